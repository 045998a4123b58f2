//! Clipboard change handler port
//!
//! This port defines the callback interface for handling pasteboard changes
//! detected by the platform poller. It follows the Dependency Inversion Principle:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements this interface

use anyhow::Result;

use crate::clipboard::ClipboardPayload;

/// Callback handler for clipboard change events.
///
/// The poller calls this once per detected change, with the payload it
/// already read. Calls arrive in tick order and never overlap.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called when new pasteboard content has been read.
    ///
    /// # Parameters
    /// - `payload`: non-empty text or image captured by the poller
    async fn on_clipboard_changed(&self, payload: ClipboardPayload) -> Result<()>;
}
