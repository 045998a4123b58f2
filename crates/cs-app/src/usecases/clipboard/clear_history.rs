use tracing::{info, info_span, Instrument};

use crate::history::SharedHistory;

/// Use case for removing every entry from the history
/// 清空历史记录的用例
pub struct ClearHistory {
    history: SharedHistory,
}

impl ClearHistory {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    /// Empties the history unconditionally. Returns how many entries were removed.
    pub async fn execute(&self) -> usize {
        let span = info_span!("usecase.clear_history.execute");

        async {
            let removed = self.history.len().await;
            self.history.clear_all().await;
            info!(removed, "Clipboard history cleared");
            removed
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::ports::ClockPort;
    use cs_core::{ClipboardPayload, HistoryStore};
    use std::sync::Arc;

    struct ZeroClock;

    impl ClockPort for ZeroClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    #[tokio::test]
    async fn test_clear_empties_history_and_reports_count() {
        let history = SharedHistory::new(HistoryStore::new(50, Arc::new(ZeroClock)));
        history.insert(ClipboardPayload::Text("a".into())).await;
        history.insert(ClipboardPayload::Text("b".into())).await;

        let removed = ClearHistory::new(history.clone()).execute().await;

        assert_eq!(removed, 2);
        assert!(history.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_on_empty_history_is_a_noop() {
        let history = SharedHistory::new(HistoryStore::new(50, Arc::new(ZeroClock)));

        assert_eq!(ClearHistory::new(history.clone()).execute().await, 0);
        assert!(history.is_empty().await);
    }
}
