use std::sync::Mutex;

use anyhow::{anyhow, Result};
use bytes::Bytes;
use clipboard_rs::ClipboardContext;
use cs_core::ports::{ChangeToken, PasteboardPort, PasteboardWriteError};
use cs_core::ClipboardPayload;
use tracing::{debug, debug_span};

use super::common::CommonClipboardImpl;
use super::platform::native_change_count;

/// System pasteboard adapter backed by clipboard-rs.
pub struct SystemPasteboard {
    ctx: Mutex<ClipboardContext>,
    fingerprint: Mutex<FingerprintCounter>,
}

impl SystemPasteboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            ctx: Mutex::new(context),
            fingerprint: Mutex::new(FingerprintCounter::default()),
        })
    }

    fn with_context<T>(&self, f: impl FnOnce(&ClipboardContext) -> Result<T>) -> Result<T> {
        let ctx = self
            .ctx
            .lock()
            .map_err(|e| anyhow!("clipboard context mutex poisoned: {}", e))?;
        f(&ctx)
    }

    /// Counter bumped whenever the readable content hashes differently from
    /// the previous sample.
    fn fingerprint_token(&self) -> Result<ChangeToken> {
        let digest = self.with_context(|ctx| {
            let mut hasher = blake3::Hasher::new();
            match CommonClipboardImpl::read_text(ctx) {
                Ok(Some(text)) if !text.is_empty() => {
                    hasher.update(b"text\0");
                    hasher.update(text.as_bytes());
                }
                _ => {
                    if let Ok(Some(png)) = CommonClipboardImpl::read_png_bytes(ctx) {
                        hasher.update(b"image\0");
                        hasher.update(&png);
                    }
                }
            }
            Ok(hasher.finalize())
        })?;

        let mut counter = self
            .fingerprint
            .lock()
            .map_err(|e| anyhow!("fingerprint mutex poisoned: {}", e))?;
        Ok(counter.observe(digest))
    }
}

impl PasteboardPort for SystemPasteboard {
    fn current_change_token(&self) -> Result<ChangeToken> {
        match native_change_count() {
            Some(count) => Ok(ChangeToken::new(count)),
            None => self.fingerprint_token(),
        }
    }

    fn read_text(&self) -> Result<Option<String>> {
        let span = debug_span!("platform.pasteboard.read_text");
        span.in_scope(|| self.with_context(CommonClipboardImpl::read_text))
    }

    fn read_image(&self) -> Result<Option<Bytes>> {
        let span = debug_span!("platform.pasteboard.read_image");
        span.in_scope(|| {
            let image = self.with_context(CommonClipboardImpl::read_image)?;
            if let Some(bytes) = &image {
                debug!(size_bytes = bytes.len(), "Read image from pasteboard");
            }
            Ok(image)
        })
    }

    fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError> {
        let span = debug_span!(
            "platform.pasteboard.write",
            kind = %payload.kind(),
            size_bytes = payload.size_bytes(),
        );
        span.in_scope(|| {
            let ctx = self
                .ctx
                .lock()
                .map_err(|e| anyhow!("clipboard context mutex poisoned: {}", e))?;
            CommonClipboardImpl::write(&ctx, payload)?;
            debug!("Wrote payload to system pasteboard");
            Ok(())
        })
    }
}

#[derive(Debug, Default)]
struct FingerprintCounter {
    last: Option<blake3::Hash>,
    counter: u64,
}

impl FingerprintCounter {
    fn observe(&mut self, digest: blake3::Hash) -> ChangeToken {
        if self.last != Some(digest) {
            self.last = Some(digest);
            self.counter += 1;
        }
        ChangeToken::new(self.counter)
    }
}
