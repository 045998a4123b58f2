use std::sync::Arc;

use tracing::{debug, debug_span, Instrument};

use cs_core::clipboard::TimestampMs;
use cs_core::ports::ClockPort;
use cs_core::{filter_entries, ClipboardEntry};

use crate::history::SharedHistory;
use crate::models::HistoryEntryPreview;

/// Use case for listing and searching the history
/// 列出与搜索历史记录的用例
///
/// Takes one snapshot and filters it; the live collection is never handed out.
pub struct ListHistoryEntries {
    history: SharedHistory,
    clock: Arc<dyn ClockPort>,
}

impl ListHistoryEntries {
    pub fn new(history: SharedHistory, clock: Arc<dyn ClockPort>) -> Self {
        Self { history, clock }
    }

    /// Entries matching `query`, newest first. An empty query returns everything.
    pub async fn execute(&self, query: &str) -> Vec<ClipboardEntry> {
        let span = debug_span!("usecase.list_history_entries.execute", query_len = query.len());

        async {
            let snapshot = self.history.snapshot().await;
            let total = snapshot.len();
            let entries = filter_entries(snapshot, query);
            debug!(total, matched = entries.len(), "History listed");
            entries
        }
        .instrument(span)
        .await
    }

    /// Same as [`execute`](Self::execute), rendered as list rows.
    pub async fn previews(&self, query: &str, max_chars: usize) -> Vec<HistoryEntryPreview> {
        let now = TimestampMs::from_epoch_millis(self.clock.now_ms());
        self.execute(query)
            .await
            .iter()
            .map(|entry| HistoryEntryPreview::from_entry(entry, now, max_chars))
            .collect()
    }
}
