use serde::{Deserialize, Serialize};

use super::{ClipboardPayload, PayloadKind, TimestampMs};
use crate::ids::EntryId;

/// One retained clipboard item.
///
/// Entries are immutable once created. The store hands out clones, never
/// references into its own collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub payload: ClipboardPayload,
    pub created_at: TimestampMs,
}

impl ClipboardEntry {
    /// Build an entry with a fresh id.
    pub fn new(payload: ClipboardPayload, created_at: TimestampMs) -> Self {
        Self {
            id: EntryId::new(),
            payload,
            created_at,
        }
    }

    pub fn kind(&self) -> PayloadKind {
        self.payload.kind()
    }

    pub fn text(&self) -> Option<&str> {
        self.payload.as_text()
    }
}
