//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for building the use cases.
//! 用于构造用例的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic, just parameter grouping.
//! **这不是 Builder 模式**，仅用于参数打包。

use std::sync::Arc;

use cs_core::ports::*;
use cs_core::EngineSettings;

use crate::history::SharedHistory;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required.
/// 所有依赖都是必需的。
pub struct AppDeps {
    // History / 历史记录
    pub history: SharedHistory,

    // Clipboard dependencies / 剪贴板依赖
    pub clipboard_writer: Arc<dyn ClipboardWriterPort>,
    pub paste_trigger: Arc<dyn PasteTriggerPort>,
    pub watcher_control: Arc<dyn WatcherControlPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,

    // Settings / 设置
    pub settings: EngineSettings,
}
