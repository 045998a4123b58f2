//! Assembled application runtime and its use case accessor.

use std::sync::Arc;

use cs_app::models::HistoryEntryPreview;
use cs_app::usecases::{
    ClearHistory, CopyEntryToClipboard, ListHistoryEntries, StartClipboardWatcher,
    StopClipboardWatcher,
};
use cs_app::AppDeps;
use cs_core::ports::PasteboardPort;
use cs_platform::runtime::clipboard::PollingClipboardRuntime;

/// The completed application runtime.
///
/// 组装完成的应用运行时。
pub struct AppRuntime {
    pub deps: AppDeps,
    pasteboard: Arc<dyn PasteboardPort>,
    watcher: Arc<PollingClipboardRuntime>,
}

impl AppRuntime {
    pub fn new(
        deps: AppDeps,
        pasteboard: Arc<dyn PasteboardPort>,
        watcher: Arc<PollingClipboardRuntime>,
    ) -> Self {
        Self {
            deps,
            pasteboard,
            watcher,
        }
    }

    /// Accessor for the use cases, built on demand from `deps`.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    pub fn pasteboard(&self) -> &Arc<dyn PasteboardPort> {
        &self.pasteboard
    }

    pub fn watcher(&self) -> &Arc<PollingClipboardRuntime> {
        &self.watcher
    }
}

/// Use case accessor.
///
/// 用例访问器：驱动适配器 → UseCases → 用例 → 端口。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    /// List and search the history.
    ///
    /// ```rust,no_run
    /// # async fn example(runtime: &clipstack_lib::bootstrap::AppRuntime) {
    /// let uc = runtime.usecases().list_history_entries();
    /// let matches = uc.execute("invoice").await;
    /// # let _ = matches;
    /// # }
    /// ```
    pub fn list_history_entries(&self) -> ListHistoryEntries {
        ListHistoryEntries::new(
            self.runtime.deps.history.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.runtime.deps.history.clone())
    }

    /// Select: write an entry back onto the pasteboard.
    pub fn copy_entry_to_clipboard(&self) -> CopyEntryToClipboard {
        let deps = &self.runtime.deps;
        CopyEntryToClipboard::new(
            deps.history.clone(),
            deps.clipboard_writer.clone(),
            deps.paste_trigger.clone(),
            deps.settings.simulate_paste,
        )
    }

    pub fn start_clipboard_watcher(&self) -> StartClipboardWatcher {
        StartClipboardWatcher::new(self.runtime.deps.watcher_control.clone())
    }

    pub fn stop_clipboard_watcher(&self) -> StopClipboardWatcher {
        StopClipboardWatcher::new(self.runtime.deps.watcher_control.clone())
    }

    /// Rows for the history list, as the shell renders them.
    pub async fn history_previews(&self, query: &str) -> Vec<HistoryEntryPreview> {
        self.list_history_entries()
            .previews(query, cs_app::models::DEFAULT_PREVIEW_CHARS)
            .await
    }
}
