use crate::clipboard::{ClipboardEntry, ClipboardPayload};

/// Restrict `entries` to those matching `query`.
///
/// An empty query returns the input untouched. Otherwise only text entries
/// whose content contains the query, compared after Unicode lowercasing of
/// both sides, are kept. Image entries never match a non-empty query.
/// Relative order is preserved.
pub fn filter_entries(mut entries: Vec<ClipboardEntry>, query: &str) -> Vec<ClipboardEntry> {
    if query.is_empty() {
        return entries;
    }

    let needle = query.to_lowercase();
    entries.retain(|entry| matches_query(&entry.payload, &needle));
    entries
}

fn matches_query(payload: &ClipboardPayload, needle: &str) -> bool {
    match payload {
        ClipboardPayload::Text(text) => text.to_lowercase().contains(needle),
        ClipboardPayload::Image(_) => false,
    }
}
