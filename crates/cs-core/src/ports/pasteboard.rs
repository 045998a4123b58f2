//! Pasteboard port - abstracts the system clipboard
//!
//! The engine never talks to the OS clipboard directly. Everything it needs
//! is a change token to detect new copies cheaply, two typed reads and a
//! write that replaces the whole pasteboard content.

use anyhow::Result;
use bytes::Bytes;
use tracing::debug;

use crate::clipboard::{ClipboardPayload, PayloadKind};

/// Opaque, monotonically increasing marker of pasteboard content.
///
/// Only equality is meaningful to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeToken(u64);

impl ChangeToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ChangeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A write the pasteboard could not accept.
///
/// Recoverable: surfaced to the caller, never retried by the engine.
#[derive(Debug, thiserror::Error)]
pub enum PasteboardWriteError {
    #[error("pasteboard rejected the write: {0}")]
    Rejected(String),

    #[error("{0} payloads are not supported by this pasteboard")]
    Unsupported(PayloadKind),

    #[error("pasteboard backend error: {0:#}")]
    Backend(#[from] anyhow::Error),
}

/// Pasteboard port
///
/// Calls are synchronous and expected to be fast (in-memory clipboard
/// reads). Read errors are transient by contract: callers treat them as
/// "nothing readable".
pub trait PasteboardPort: Send + Sync {
    /// Current change token. Changes whenever the pasteboard content is replaced.
    fn current_change_token(&self) -> Result<ChangeToken>;

    /// Plain text representation, if any.
    fn read_text(&self) -> Result<Option<String>>;

    /// Image representation as PNG bytes, if any and if it decodes.
    fn read_image(&self) -> Result<Option<Bytes>>;

    /// Replace all pasteboard content with `payload`.
    fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError>;

    /// Read the current content in priority order: text first, image second.
    ///
    /// When an application publishes several representations for one copy,
    /// text is authoritative and the image representation is ignored.
    /// Failed or empty reads count as absent.
    fn read_snapshot(&self) -> Option<ClipboardPayload> {
        match self.read_text() {
            Ok(Some(text)) if !text.is_empty() => return Some(ClipboardPayload::Text(text)),
            Ok(_) => {}
            Err(err) => debug!(error = %err, "No readable text on pasteboard"),
        }

        match self.read_image() {
            Ok(Some(bytes)) if !bytes.is_empty() => Some(ClipboardPayload::Image(bytes)),
            Ok(_) => None,
            Err(err) => {
                debug!(error = %err, "No readable image on pasteboard");
                None
            }
        }
    }
}
