//! Use case for starting the clipboard watcher
//! 启动剪贴板监控器的用例

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use cs_core::ports::{WatcherControlError, WatcherControlPort};

/// Error type for clipboard watcher startup failures.
/// 剪贴板监控器启动失败的错误类型。
#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StartClipboardWatcherError::StartFailed(err.to_string())
    }
}

/// Use case for starting the clipboard watcher.
///
/// ## Behavior / 行为
/// - Requests the poller to start through the WatcherControlPort
/// - Idempotent: starting an already-running watcher is safe
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(())` if the watcher is running afterwards
    /// - `Err(StartClipboardWatcherError)` if starting the watcher failed
    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");

            self.watcher_control.start_watcher().await?;

            info!("Clipboard watcher started successfully");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
