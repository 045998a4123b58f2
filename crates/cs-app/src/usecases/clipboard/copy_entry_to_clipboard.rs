use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use cs_core::ports::{ClipboardWriterPort, PasteTriggerPort, PasteboardWriteError};
use cs_core::EntryId;

use crate::history::SharedHistory;

/// Error type for selecting a history entry.
/// 选择历史条目失败的错误类型。
///
/// Both variants are recoverable: the shell reports them and the history is
/// left untouched. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum CopyEntryError {
    #[error("Clipboard entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Failed to write entry to the pasteboard: {0}")]
    WriteFailed(#[from] PasteboardWriteError),
}

/// Result of a successful select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Whether a paste keystroke was sent after the write.
    pub pasted: bool,
}

/// Copy a history entry back onto the pasteboard
/// 将历史条目写回系统剪贴板
///
/// ## Behavior / 行为
/// - Looks the entry up by id in the current history
/// - Writes its payload through the clipboard writer, which marks the
///   resulting change as already observed so it is not captured again
/// - Promotes the entry to the top of the history (same id, same payload)
/// - When paste simulation is enabled, triggers the paste keystroke; a
///   failing trigger is logged and reported as `pasted: false`
///
/// A failed write leaves the history order untouched.
pub struct CopyEntryToClipboard {
    history: SharedHistory,
    writer: Arc<dyn ClipboardWriterPort>,
    paste_trigger: Arc<dyn PasteTriggerPort>,
    simulate_paste: bool,
}

impl CopyEntryToClipboard {
    pub fn new(
        history: SharedHistory,
        writer: Arc<dyn ClipboardWriterPort>,
        paste_trigger: Arc<dyn PasteTriggerPort>,
        simulate_paste: bool,
    ) -> Self {
        Self {
            history,
            writer,
            paste_trigger,
            simulate_paste,
        }
    }

    pub async fn execute(&self, entry_id: &EntryId) -> Result<CopyOutcome, CopyEntryError> {
        let span = info_span!("usecase.copy_entry_to_clipboard.execute", %entry_id);

        async {
            let entry = self
                .history
                .get(entry_id)
                .await
                .ok_or_else(|| CopyEntryError::EntryNotFound(entry_id.clone()))?;

            self.writer.write(&entry.payload).await?;
            info!(kind = %entry.kind(), "Entry written to pasteboard");

            // The entry may have been cleared or evicted since the lookup.
            if !self.history.promote(entry_id).await {
                debug!("Entry left the history before it could be promoted");
            }

            if !self.simulate_paste {
                return Ok(CopyOutcome { pasted: false });
            }

            match self.paste_trigger.trigger_paste() {
                Ok(()) => Ok(CopyOutcome { pasted: true }),
                Err(err) => {
                    warn!(error = %err, "Paste keystroke failed after write");
                    Ok(CopyOutcome { pasted: false })
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use cs_core::ports::ClockPort;
    use cs_core::{ClipboardPayload, HistoryStore};
    use mockall::{mock, predicate::eq};

    mock! {
        Writer {}

        #[async_trait]
        impl ClipboardWriterPort for Writer {
            async fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError>;
        }
    }

    mock! {
        Trigger {}

        impl PasteTriggerPort for Trigger {
            fn trigger_paste(&self) -> anyhow::Result<()>;
        }
    }

    struct ZeroClock;

    impl ClockPort for ZeroClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    async fn history_with(text: &str) -> (SharedHistory, EntryId) {
        let history = SharedHistory::new(HistoryStore::new(50, Arc::new(ZeroClock)));
        let outcome = history.insert(ClipboardPayload::Text(text.into())).await;
        let id = outcome.entry().unwrap().id.clone();
        (history, id)
    }

    #[tokio::test]
    async fn test_select_writes_payload_without_paste() {
        let (history, id) = history_with("snippet").await;
        let mut writer = MockWriter::new();
        writer
            .expect_write()
            .with(eq(ClipboardPayload::Text("snippet".into())))
            .times(1)
            .returning(|_| Ok(()));
        let mut trigger = MockTrigger::new();
        trigger.expect_trigger_paste().never();

        let uc = CopyEntryToClipboard::new(history, Arc::new(writer), Arc::new(trigger), false);

        assert_eq!(uc.execute(&id).await.unwrap(), CopyOutcome { pasted: false });
    }

    #[tokio::test]
    async fn test_select_promotes_entry_to_top() {
        let (history, old_id) = history_with("old").await;
        history.insert(ClipboardPayload::Text("new".into())).await;
        let mut writer = MockWriter::new();
        writer.expect_write().times(1).returning(|_| Ok(()));

        let uc = CopyEntryToClipboard::new(
            history.clone(),
            Arc::new(writer),
            Arc::new(MockTrigger::new()),
            false,
        );
        uc.execute(&old_id).await.unwrap();

        let snapshot = history.snapshot().await;
        let texts: Vec<_> = snapshot.iter().filter_map(|e| e.text()).collect();
        assert_eq!(texts, vec!["old", "new"]);
        assert_eq!(snapshot[0].id, old_id);
    }

    #[tokio::test]
    async fn test_select_triggers_paste_when_enabled() {
        let (history, id) = history_with("snippet").await;
        let mut writer = MockWriter::new();
        writer.expect_write().returning(|_| Ok(()));
        let mut trigger = MockTrigger::new();
        trigger.expect_trigger_paste().times(1).returning(|| Ok(()));

        let uc = CopyEntryToClipboard::new(history, Arc::new(writer), Arc::new(trigger), true);

        assert_eq!(uc.execute(&id).await.unwrap(), CopyOutcome { pasted: true });
    }

    #[tokio::test]
    async fn test_paste_failure_is_not_an_error() {
        let (history, id) = history_with("snippet").await;
        let mut writer = MockWriter::new();
        writer.expect_write().returning(|_| Ok(()));
        let mut trigger = MockTrigger::new();
        trigger
            .expect_trigger_paste()
            .returning(|| Err(anyhow!("accessibility permission missing")));

        let uc = CopyEntryToClipboard::new(history, Arc::new(writer), Arc::new(trigger), true);

        assert_eq!(uc.execute(&id).await.unwrap(), CopyOutcome { pasted: false });
    }

    #[tokio::test]
    async fn test_write_failure_is_surfaced_and_skips_paste() {
        let (history, id) = history_with("snippet").await;
        let mut writer = MockWriter::new();
        writer
            .expect_write()
            .returning(|_| Err(PasteboardWriteError::Rejected("busy".into())));
        let mut trigger = MockTrigger::new();
        trigger.expect_trigger_paste().never();

        let uc = CopyEntryToClipboard::new(
            history.clone(),
            Arc::new(writer),
            Arc::new(trigger),
            true,
        );

        history.insert(ClipboardPayload::Text("newer".into())).await;
        let err = uc.execute(&id).await.unwrap_err();
        assert!(matches!(err, CopyEntryError::WriteFailed(_)));
        assert_eq!(history.snapshot().await[0].text(), Some("newer"));
    }

    #[tokio::test]
    async fn test_unknown_entry_is_reported() {
        let (history, _id) = history_with("snippet").await;
        let mut writer = MockWriter::new();
        writer.expect_write().never();

        let uc = CopyEntryToClipboard::new(
            history,
            Arc::new(writer),
            Arc::new(MockTrigger::new()),
            false,
        );

        let missing = EntryId::from_string("missing".into());
        let err = uc.execute(&missing).await.unwrap_err();
        assert!(matches!(err, CopyEntryError::EntryNotFound(id) if id == missing));
    }
}
