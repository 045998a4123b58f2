pub mod capture_clipboard_change;
pub mod clear_history;
pub mod copy_entry_to_clipboard;
pub mod list_history_entries;

pub use capture_clipboard_change::CaptureClipboardChange;
pub use clear_history::ClearHistory;
pub use copy_entry_to_clipboard::{CopyEntryError, CopyEntryToClipboard, CopyOutcome};
pub use list_history_entries::ListHistoryEntries;
