//! Shared, serialized access to the history store.

use std::sync::Arc;

use tokio::sync::Mutex;

use cs_core::{ClipboardEntry, ClipboardPayload, EntryId, HistoryStore, InsertOutcome};

/// Cloneable handle to the single [`HistoryStore`].
///
/// 历史记录的共享句柄。所有修改在同一把锁内完成（查重、插入、淘汰），
/// 因此修改是串行且原子的。
#[derive(Clone)]
pub struct SharedHistory {
    inner: Arc<Mutex<HistoryStore>>,
}

impl SharedHistory {
    pub fn new(store: HistoryStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn insert(&self, payload: ClipboardPayload) -> InsertOutcome {
        self.inner.lock().await.insert(payload)
    }

    pub async fn clear_all(&self) {
        self.inner.lock().await.clear_all();
    }

    pub async fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.inner.lock().await.snapshot()
    }

    pub async fn get(&self, id: &EntryId) -> Option<ClipboardEntry> {
        self.inner.lock().await.get(id)
    }

    /// Move an entry to the top. `false` if the id is unknown.
    pub async fn promote(&self, id: &EntryId) -> bool {
        self.inner.lock().await.promote(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.capacity()
    }
}
