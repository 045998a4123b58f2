//! Pasteboard change detection.
//!
//! ```text
//! PasteboardPort
//!      ↓
//! ClipboardPoller          (one tick = check_once)
//!      ↓
//! ClipboardChangeHandler   (capture use case)
//! ```
//!
//! `PollingClipboardRuntime` drives the poller from a tokio interval and is
//! the `WatcherControlPort` the application starts and stops.

mod poller;
mod runtime;

pub use poller::{ClipboardPoller, PollerPhase, TickOutcome};
pub use runtime::PollingClipboardRuntime;
