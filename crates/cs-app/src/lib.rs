//! Clipstack Application Orchestration Layer
//!
//! This crate contains the use cases the shell drives (list, search, select,
//! clear, start/stop watching) and the shared history they operate on.

pub mod deps;
pub mod history;
pub mod models;
pub mod usecases;

pub use deps::AppDeps;
pub use history::SharedHistory;
