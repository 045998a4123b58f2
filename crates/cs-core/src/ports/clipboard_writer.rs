use async_trait::async_trait;

use super::PasteboardWriteError;
use crate::clipboard::ClipboardPayload;

/// Writes a payload back onto the pasteboard on behalf of the user.
///
/// Implementations coordinate with the change poller so that the write is
/// not captured again as a fresh copy: the change token produced by the
/// write is recorded as already observed.
#[async_trait]
pub trait ClipboardWriterPort: Send + Sync {
    async fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError>;
}
