use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use cs_core::ports::{
    ChangeToken, ClipboardChangeHandler, ClipboardWriterPort, PasteboardPort,
    PasteboardWriteError,
};
use cs_core::{ClipboardPayload, PayloadKind};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token equal to the last observed one, nothing read.
    Unchanged,
    /// Token changed but neither text nor image was readable.
    Absorbed,
    /// Token changed and a payload of this kind was handed to the handler.
    Captured(PayloadKind),
}

/// Poller state. `Checking` only lasts for the duration of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerPhase {
    Idle,
    Checking,
}

/// Detects new pasteboard content by comparing change tokens.
///
/// 通过比较变更令牌检测剪贴板的新内容。
///
/// The poller remembers the last token it observed. A tick that sees a
/// different token records it first, unconditionally, and only then reads
/// the content, so a copy that cannot be read is never retried.
///
/// Writes issued by the engine go through the same poller (see the
/// `ClipboardWriterPort` impl) so the token they produce is recorded as
/// observed and the write is not captured again.
pub struct ClipboardPoller {
    pasteboard: Arc<dyn PasteboardPort>,
    handler: Arc<dyn ClipboardChangeHandler>,
    last_token: Mutex<Option<ChangeToken>>,
    checking: AtomicBool,
}

impl ClipboardPoller {
    pub fn new(
        pasteboard: Arc<dyn PasteboardPort>,
        handler: Arc<dyn ClipboardChangeHandler>,
    ) -> Self {
        Self {
            pasteboard,
            handler,
            last_token: Mutex::new(None),
            checking: AtomicBool::new(false),
        }
    }

    pub fn phase(&self) -> PollerPhase {
        if self.checking.load(Ordering::Acquire) {
            PollerPhase::Checking
        } else {
            PollerPhase::Idle
        }
    }

    /// Last token seen by a tick or produced by an engine write.
    pub async fn last_token(&self) -> Option<ChangeToken> {
        *self.last_token.lock().await
    }

    /// Run one tick.
    ///
    /// Never fails: token read errors count as "unchanged", content read
    /// errors count as absent and handler errors are logged.
    pub async fn check_once(&self) -> TickOutcome {
        let mut last_token = self.last_token.lock().await;
        let _checking = CheckingFlag::raise(&self.checking);
        self.tick(&mut last_token).await
    }

    async fn tick(&self, last_token: &mut Option<ChangeToken>) -> TickOutcome {
        let token = match self.pasteboard.current_change_token() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read pasteboard change token");
                return TickOutcome::Unchanged;
            }
        };

        if *last_token == Some(token) {
            return TickOutcome::Unchanged;
        }
        *last_token = Some(token);

        let Some(payload) = self.pasteboard.read_snapshot() else {
            debug!(%token, "Pasteboard changed with no readable content");
            return TickOutcome::Absorbed;
        };

        let kind = payload.kind();
        debug!(%token, %kind, size = payload.size_bytes(), "Pasteboard change captured");

        if let Err(err) = self.handler.on_clipboard_changed(payload).await {
            warn!(error = %err, %kind, "Clipboard change handler failed");
        }
        TickOutcome::Captured(kind)
    }
}

/// Lowers the flag on drop, including when the tick task is aborted.
struct CheckingFlag<'a>(&'a AtomicBool);

impl<'a> CheckingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for CheckingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl ClipboardWriterPort for ClipboardPoller {
    async fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError> {
        let mut last_token = self.last_token.lock().await;
        let before = self.pasteboard.current_change_token();
        self.pasteboard.write(payload)?;

        // Only a single step past the pre-write token is ours. Anything else
        // means another copy landed around the write and must be read.
        match (before, self.pasteboard.current_change_token()) {
            (Ok(before), Ok(after)) if before.value().checked_add(1) == Some(after.value()) => {
                debug!(token = %after, kind = %payload.kind(), "Recorded token of engine write");
                *last_token = Some(after);
            }
            (Ok(before), Ok(after)) => {
                debug!(%before, %after, "Token moved past the engine write, next tick reads it");
            }
            // The next tick will capture the write; dedup absorbs text.
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "Failed to read change token around write");
            }
        }
        Ok(())
    }
}
