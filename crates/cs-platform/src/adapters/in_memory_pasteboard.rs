use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use bytes::Bytes;
use cs_core::ports::{ChangeToken, PasteboardPort, PasteboardWriteError};
use cs_core::{ClipboardPayload, PayloadKind};

/// In-memory pasteboard.
///
/// 内存版的剪贴板实现，用于测试与演示。
///
/// Behaves like a system pasteboard with a change counter: every `set_*`
/// call and every successful `write` replaces all content and bumps the
/// token. Reads and writes can be made to fail to exercise error paths.
#[derive(Debug)]
pub struct InMemoryPasteboard {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    change_count: u64,
    text: Option<String>,
    image: Option<Bytes>,
    fail_reads: bool,
    fail_writes: bool,
    text_only: bool,
    racing_copy: Option<String>,
    writes: Vec<ClipboardPayload>,
}

impl State {
    fn replace(&mut self, text: Option<String>, image: Option<Bytes>) {
        self.text = text;
        self.image = image;
        self.change_count += 1;
    }
}

impl Default for InMemoryPasteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPasteboard {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// A pasteboard that refuses image writes.
    pub fn text_only() -> Self {
        let pasteboard = Self::new();
        pasteboard.lock().text_only = true;
        pasteboard
    }

    // Poisoning only happens if a test panicked mid-update; the state is
    // still consistent enough to keep using.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulate a copy of plain text from another application.
    pub fn set_text(&self, text: impl Into<String>) {
        self.lock().replace(Some(text.into()), None);
    }

    /// Simulate a copy of an image from another application.
    pub fn set_image(&self, png: impl Into<Bytes>) {
        self.lock().replace(None, Some(png.into()));
    }

    /// Simulate an application publishing both representations at once.
    pub fn set_text_and_image(&self, text: impl Into<String>, png: impl Into<Bytes>) {
        self.lock().replace(Some(text.into()), Some(png.into()));
    }

    /// Simulate a copy with no readable representation.
    pub fn set_empty(&self) {
        self.lock().replace(None, None);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Simulate another application copying `text` right after the next
    /// successful `write`, before the writer can read the token back.
    pub fn copy_during_next_write(&self, text: impl Into<String>) {
        self.lock().racing_copy = Some(text.into());
    }

    /// Payloads accepted by `write`, oldest first.
    pub fn writes(&self) -> Vec<ClipboardPayload> {
        self.lock().writes.clone()
    }
}

impl PasteboardPort for InMemoryPasteboard {
    fn current_change_token(&self) -> Result<ChangeToken> {
        Ok(ChangeToken::new(self.lock().change_count))
    }

    fn read_text(&self) -> Result<Option<String>> {
        let state = self.lock();
        if state.fail_reads {
            return Err(anyhow!("no string representation available"));
        }
        Ok(state.text.clone())
    }

    fn read_image(&self) -> Result<Option<Bytes>> {
        let state = self.lock();
        if state.fail_reads {
            return Err(anyhow!("image bytes failed to decode"));
        }
        Ok(state.image.clone())
    }

    fn write(&self, payload: &ClipboardPayload) -> Result<(), PasteboardWriteError> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(PasteboardWriteError::Rejected(
                "pasteboard is locked by another process".to_string(),
            ));
        }

        match payload {
            ClipboardPayload::Text(text) => state.replace(Some(text.clone()), None),
            ClipboardPayload::Image(bytes) => {
                if state.text_only {
                    return Err(PasteboardWriteError::Unsupported(PayloadKind::Image));
                }
                state.replace(None, Some(bytes.clone()))
            }
        }
        state.writes.push(payload.clone());
        if let Some(text) = state.racing_copy.take() {
            state.replace(Some(text), None);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_replacement_bumps_the_token() {
        let pasteboard = InMemoryPasteboard::new();
        let t0 = pasteboard.current_change_token().unwrap();

        pasteboard.set_text("a");
        let t1 = pasteboard.current_change_token().unwrap();
        pasteboard.set_text("a");
        let t2 = pasteboard.current_change_token().unwrap();

        assert_ne!(t0, t1);
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_set_text_clears_image() {
        let pasteboard = InMemoryPasteboard::new();
        pasteboard.set_image(vec![1u8, 2, 3]);
        pasteboard.set_text("text");

        assert_eq!(pasteboard.read_text().unwrap(), Some("text".to_string()));
        assert_eq!(pasteboard.read_image().unwrap(), None);
    }

    #[test]
    fn test_write_replaces_content_and_is_recorded() {
        let pasteboard = InMemoryPasteboard::new();
        let payload = ClipboardPayload::Text("back".to_string());

        pasteboard.write(&payload).unwrap();

        assert_eq!(pasteboard.read_text().unwrap(), Some("back".to_string()));
        assert_eq!(pasteboard.writes(), vec![payload]);
    }

    #[test]
    fn test_failing_write_leaves_content_untouched() {
        let pasteboard = InMemoryPasteboard::new();
        pasteboard.set_text("before");
        let token = pasteboard.current_change_token().unwrap();
        pasteboard.fail_writes(true);

        let result = pasteboard.write(&ClipboardPayload::Text("after".to_string()));

        assert!(matches!(result, Err(PasteboardWriteError::Rejected(_))));
        assert_eq!(pasteboard.current_change_token().unwrap(), token);
        assert_eq!(pasteboard.read_text().unwrap(), Some("before".to_string()));
    }

    #[test]
    fn test_racing_copy_lands_after_the_write() {
        let pasteboard = InMemoryPasteboard::new();
        let before = pasteboard.current_change_token().unwrap();
        pasteboard.copy_during_next_write("other");

        pasteboard.write(&ClipboardPayload::Text("mine".to_string())).unwrap();

        assert_eq!(pasteboard.current_change_token().unwrap().value(), before.value() + 2);
        assert_eq!(pasteboard.read_text().unwrap(), Some("other".to_string()));
    }

    #[test]
    fn test_text_only_pasteboard_rejects_images() {
        let pasteboard = InMemoryPasteboard::text_only();

        let result = pasteboard.write(&ClipboardPayload::Image(Bytes::from_static(b"png")));

        assert!(matches!(
            result,
            Err(PasteboardWriteError::Unsupported(PayloadKind::Image))
        ));
    }

    #[test]
    fn test_failing_reads_error_out() {
        let pasteboard = InMemoryPasteboard::new();
        pasteboard.set_text("x");
        pasteboard.fail_reads(true);

        assert!(pasteboard.read_text().is_err());
        assert!(pasteboard.read_image().is_err());
        assert_eq!(pasteboard.read_snapshot(), None);
    }
}
