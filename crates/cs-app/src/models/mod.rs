//! View models handed to the presentation layer.

use serde::Serialize;

use cs_core::clipboard::TimestampMs;
use cs_core::{ClipboardEntry, EntryId, PayloadKind};

/// Maximum characters shown for a text entry in a list row.
pub const DEFAULT_PREVIEW_CHARS: usize = 120;

/// One row of the history list.
///
/// 历史列表中的一行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntryPreview {
    pub id: EntryId,
    pub kind: PayloadKind,
    pub preview: String,
    pub size_bytes: usize,
    pub created_at_ms: i64,
    /// e.g. "just now", "3 minutes ago"
    pub copied: String,
}

impl HistoryEntryPreview {
    pub fn from_entry(entry: &ClipboardEntry, now: TimestampMs, max_chars: usize) -> Self {
        Self {
            id: entry.id.clone(),
            kind: entry.kind(),
            preview: entry.payload.preview(max_chars),
            size_bytes: entry.payload.size_bytes(),
            created_at_ms: entry.created_at.as_millis(),
            copied: entry.created_at.relative_label(now),
        }
    }
}
