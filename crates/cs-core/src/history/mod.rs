//! In-memory clipboard history.
//!
//! - `store`  : bounded, newest-first collection with text dedup and tail eviction
//! - `filter` : pure search projection over a snapshot

mod filter;
mod store;

pub use filter::filter_entries;
pub use store::{HistoryStore, InsertOutcome, DEFAULT_HISTORY_CAPACITY};
