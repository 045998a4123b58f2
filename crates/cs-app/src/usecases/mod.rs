//! Business logic use cases
//!
//! ```text
//! [ClipboardPoller]
//!         ↓
//! CaptureClipboardChange
//!         ↓
//! ---------------------------------
//! ListHistoryEntries      → list / search
//! ClearHistory            → clear all
//! CopyEntryToClipboard    → select (write back, optional paste)
//! ---------------------------------
//! StartClipboardWatcher / StopClipboardWatcher
//! ```

pub mod clipboard;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

pub use clipboard::{
    CaptureClipboardChange, ClearHistory, CopyEntryError, CopyEntryToClipboard, CopyOutcome,
    ListHistoryEntries,
};
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
pub use stop_clipboard_watcher::{StopClipboardWatcher, StopClipboardWatcherError};
