//! Ports implemented by the platform and application layers.

mod clipboard_change_handler;
mod clipboard_writer;
mod clock;
mod paste_trigger;
mod pasteboard;
pub mod watcher_control;

pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clipboard_writer::ClipboardWriterPort;
pub use clock::ClockPort;
pub use paste_trigger::PasteTriggerPort;
pub use pasteboard::{ChangeToken, PasteboardPort, PasteboardWriteError};
pub use watcher_control::{WatcherControlError, WatcherControlPort};
