//! # cs-core
//!
//! Core domain models and business logic for Clipstack.
//!
//! This crate contains the clipboard history engine (bounded store, search
//! filter) and the ports the outer layers implement. It has no dependency on
//! the system clipboard, the async runtime or any UI toolkit.

// Public module exports
pub mod clipboard;
pub mod config;
pub mod history;
pub mod ids;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, ClipboardPayload, PayloadKind, TimestampMs};
pub use config::AppConfig;
pub use history::{filter_entries, HistoryStore, InsertOutcome, DEFAULT_HISTORY_CAPACITY};
pub use ids::EntryId;
pub use settings::EngineSettings;
