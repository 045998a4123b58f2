use std::collections::VecDeque;
use std::sync::Arc;

use bytes::Bytes;

use crate::clipboard::{ClipboardEntry, ClipboardPayload, TimestampMs};
use crate::ids::EntryId;
use crate::ports::ClockPort;

/// Number of entries retained when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Result of an insert attempt.
///
/// `Duplicate` and `Rejected` are defined no-ops, not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The entry now sits at index 0. `evicted` is the tail entry dropped to
    /// stay within capacity, if any.
    Inserted {
        entry: ClipboardEntry,
        evicted: Option<EntryId>,
    },
    /// A text entry with identical content already exists.
    Duplicate,
    /// Empty content is never stored.
    Rejected,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }

    pub fn entry(&self) -> Option<&ClipboardEntry> {
        match self {
            InsertOutcome::Inserted { entry, .. } => Some(entry),
            InsertOutcome::Duplicate | InsertOutcome::Rejected => None,
        }
    }
}

/// Bounded, newest-first clipboard history.
///
/// Single source of truth for captured entries. Mutation requires `&mut self`;
/// callers sharing the store across tasks serialize access themselves so that
/// each insert (dedup check, insert, evict) is atomic.
pub struct HistoryStore {
    entries: VecDeque<ClipboardEntry>,
    capacity: usize,
    clock: Arc<dyn ClockPort>,
}

impl HistoryStore {
    /// Create an empty store. A zero capacity is treated as one.
    pub fn new(capacity: usize, clock: Arc<dyn ClockPort>) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            clock,
        }
    }

    pub fn with_default_capacity(clock: Arc<dyn ClockPort>) -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, clock)
    }

    /// Insert a text entry unless it is empty or already present.
    ///
    /// Dedup compares the exact string against every text entry in the
    /// collection; the existing entry keeps its position.
    pub fn insert_text(&mut self, content: String) -> InsertOutcome {
        if content.is_empty() {
            return InsertOutcome::Rejected;
        }

        let duplicate = self.entries.iter().any(|entry| match &entry.payload {
            ClipboardPayload::Text(existing) => *existing == content,
            ClipboardPayload::Image(_) => false,
        });
        if duplicate {
            return InsertOutcome::Duplicate;
        }

        self.push_front(ClipboardPayload::Text(content))
    }

    /// Insert an image entry. Images are never deduplicated.
    pub fn insert_image(&mut self, bytes: Bytes) -> InsertOutcome {
        if bytes.is_empty() {
            return InsertOutcome::Rejected;
        }

        self.push_front(ClipboardPayload::Image(bytes))
    }

    /// Dispatch to the insert matching the payload kind.
    pub fn insert(&mut self, payload: ClipboardPayload) -> InsertOutcome {
        match payload {
            ClipboardPayload::Text(text) => self.insert_text(text),
            ClipboardPayload::Image(bytes) => self.insert_image(bytes),
        }
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Owned copy of the collection, newest first.
    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<ClipboardEntry> {
        self.entries.iter().find(|entry| entry.id == *id).cloned()
    }

    /// Move an entry to index 0, keeping its id, payload and timestamp.
    ///
    /// Returns `false` if no entry has this id. Capacity is unaffected.
    pub fn promote(&mut self, id: &EntryId) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == *id) else {
            return false;
        };
        if let Some(entry) = self.entries.remove(index) {
            self.entries.push_front(entry);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push_front(&mut self, payload: ClipboardPayload) -> InsertOutcome {
        let created_at = TimestampMs::from_epoch_millis(self.clock.now_ms());
        let entry = ClipboardEntry::new(payload, created_at);

        self.entries.push_front(entry.clone());
        let evicted = if self.entries.len() > self.capacity {
            self.entries.pop_back().map(|old| old.id)
        } else {
            None
        };

        InsertOutcome::Inserted { entry, evicted }
    }
}
