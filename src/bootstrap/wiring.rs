//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create platform implementations (pasteboard, clock, paste trigger)
//!   创建平台层具体实现
//! - Assemble history, poller and runtime into `AppRuntime`
//!   组装历史记录、轮询器与运行时
//!
//! ## Prohibited / 禁止事项
//!
//! No business logic and no configuration validation: settings arrive
//! already resolved.
//! 禁止包含业务逻辑与配置验证：传入的设置已经解析完毕。

use std::sync::Arc;

use cs_app::usecases::CaptureClipboardChange;
use cs_app::{AppDeps, SharedHistory};
use cs_core::ports::*;
use cs_core::{EngineSettings, HistoryStore};
use cs_platform::adapters::{NoopPasteTrigger, SystemClock};
use cs_platform::clipboard::SystemPasteboard;
use cs_platform::runtime::clipboard::{ClipboardPoller, PollingClipboardRuntime};

use super::runtime::AppRuntime;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Assemble the engine around the given adapters.
///
/// ```text
/// pasteboard ─→ ClipboardPoller ─→ CaptureClipboardChange ─→ SharedHistory
///                     ↑                                           ↑
///        CopyEntryToClipboard (writer)        ListHistoryEntries / ClearHistory
/// ```
pub fn wire_engine(
    settings: EngineSettings,
    pasteboard: Arc<dyn PasteboardPort>,
    paste_trigger: Arc<dyn PasteTriggerPort>,
    clock: Arc<dyn ClockPort>,
) -> AppRuntime {
    let history = SharedHistory::new(HistoryStore::new(
        settings.history_capacity,
        clock.clone(),
    ));

    let capture: Arc<dyn ClipboardChangeHandler> =
        Arc::new(CaptureClipboardChange::new(history.clone()));
    let poller = Arc::new(ClipboardPoller::new(pasteboard.clone(), capture));
    let watcher = Arc::new(PollingClipboardRuntime::new(
        poller.clone(),
        settings.poll_interval,
    ));

    let deps = AppDeps {
        // History / 历史记录
        history,

        // Clipboard dependencies / 剪贴板依赖
        clipboard_writer: poller,
        paste_trigger,
        watcher_control: watcher.clone(),

        // System / 系统
        clock,

        // Settings / 设置
        settings,
    };

    AppRuntime::new(deps, pasteboard, watcher)
}

/// Wire the engine against the system pasteboard.
/// 使用系统剪贴板组装引擎。
///
/// # Errors / 错误
///
/// Returns `WiringError::ClipboardInit` if the system pasteboard cannot be opened.
pub fn wire_dependencies(settings: EngineSettings) -> WiringResult<AppRuntime> {
    let pasteboard = SystemPasteboard::new()
        .map_err(|e| WiringError::ClipboardInit(format!("Failed to open pasteboard: {e:#}")))?;

    Ok(wire_engine(
        settings,
        Arc::new(pasteboard),
        Arc::new(NoopPasteTrigger),
        Arc::new(SystemClock),
    ))
}
