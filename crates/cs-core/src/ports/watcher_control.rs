use async_trait::async_trait;

/// Port for controlling the pasteboard poller lifecycle.
///
/// 剪贴板轮询器生命周期控制端口。
///
/// # Behavior / 行为
/// - `start_watcher()` is idempotent: starting a running poller is a no-op.
/// - `stop_watcher()` is idempotent and returns only once no further tick can fire.
///
/// - `start_watcher()` 应当具备幂等性。
/// - `stop_watcher()` 应当具备幂等性，返回后不会再有任何轮询触发。
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the poller to start.
    ///
    /// 请求启动轮询器。
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Request the poller to stop.
    ///
    /// 请求停止轮询器。
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;

    /// Whether the periodic task is currently scheduled.
    fn is_watching(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}
