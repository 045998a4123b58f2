//! Clipboard domain models.
mod entry;
mod payload;
mod timestamp;

pub use entry::ClipboardEntry;
pub use payload::{ClipboardPayload, PayloadKind};
pub use timestamp::TimestampMs;
