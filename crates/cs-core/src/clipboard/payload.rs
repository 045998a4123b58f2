use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Discriminant of [`ClipboardPayload`], useful for logging and UI badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Text,
    Image,
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadKind::Text => write!(f, "text"),
            PayloadKind::Image => write!(f, "image"),
        }
    }
}

/// Content captured from, or written back to, the pasteboard.
///
/// This is a closed set: the history store, the search filter and the
/// pasteboard adapters all match on it exhaustively, so a new kind of
/// payload cannot be added without revisiting each of them.
///
/// Image bytes are a lossless PNG encoding of the bitmap. `Bytes` keeps
/// snapshot copies cheap for large images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ClipboardPayload {
    Text(String),
    Image(Bytes),
}

impl ClipboardPayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            ClipboardPayload::Text(_) => PayloadKind::Text,
            ClipboardPayload::Image(_) => PayloadKind::Image,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ClipboardPayload::Text(text) => text.is_empty(),
            ClipboardPayload::Image(bytes) => bytes.is_empty(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            ClipboardPayload::Text(text) => text.len(),
            ClipboardPayload::Image(bytes) => bytes.len(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardPayload::Text(text) => Some(text),
            ClipboardPayload::Image(_) => None,
        }
    }

    /// Single-line label for list rows.
    ///
    /// Text is flattened to one line and truncated to `max_chars` characters
    /// (never splitting a character); images render as a size badge.
    pub fn preview(&self, max_chars: usize) -> String {
        match self {
            ClipboardPayload::Text(text) => {
                let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if flat.chars().count() <= max_chars {
                    flat
                } else {
                    let mut truncated: String = flat.chars().take(max_chars).collect();
                    truncated.push('…');
                    truncated
                }
            }
            ClipboardPayload::Image(bytes) => format!("[image {} bytes]", bytes.len()),
        }
    }
}
