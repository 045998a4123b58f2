use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, info_span, Instrument};

use cs_core::ports::ClipboardChangeHandler;
use cs_core::{ClipboardPayload, InsertOutcome};

use crate::history::SharedHistory;

/// Records content captured by the poller into the history.
///
/// 将轮询器捕获的剪贴板内容写入历史记录。
///
/// Duplicate text and empty payloads are outcomes of the store, not errors.
pub struct CaptureClipboardChange {
    history: SharedHistory,
}

impl CaptureClipboardChange {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    pub async fn execute(&self, payload: ClipboardPayload) -> InsertOutcome {
        let kind = payload.kind();
        let span = info_span!("usecase.capture_clipboard_change.execute", %kind);

        async {
            let outcome = self.history.insert(payload).await;
            match &outcome {
                InsertOutcome::Inserted { entry, evicted } => {
                    info!(entry_id = %entry.id, size = entry.payload.size_bytes(), "Captured clipboard entry");
                    if let Some(evicted) = evicted {
                        debug!(entry_id = %evicted, "Evicted oldest entry");
                    }
                }
                InsertOutcome::Duplicate => debug!("Text already in history, skipped"),
                InsertOutcome::Rejected => debug!("Empty payload rejected"),
            }
            outcome
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ClipboardChangeHandler for CaptureClipboardChange {
    async fn on_clipboard_changed(&self, payload: ClipboardPayload) -> Result<()> {
        self.execute(payload).await;
        Ok(())
    }
}
