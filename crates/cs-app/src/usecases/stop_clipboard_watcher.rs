//! Use case for stopping the clipboard watcher
//! 停止剪贴板监控器的用例

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum StopClipboardWatcherError {
    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}

impl From<WatcherControlError> for StopClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StopClipboardWatcherError::StopFailed(err.to_string())
    }
}

/// Use case for stopping the clipboard watcher.
///
/// Returns once no further tick can fire. Stopping a stopped watcher is a no-op.
/// 返回后不会再有轮询触发；重复停止无副作用。
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StopClipboardWatcherError> {
        let span = info_span!("usecase.stop_clipboard_watcher.execute");

        async {
            if !self.watcher_control.is_watching() {
                info!("Clipboard watcher already stopped");
                return Ok(());
            }

            self.watcher_control.stop_watcher().await?;

            info!("Clipboard watcher stopped");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
