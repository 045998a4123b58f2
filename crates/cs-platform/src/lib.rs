//! # cs-platform
//!
//! Platform-specific implementations for Clipstack.
//!
//! This crate contains the pasteboard adapters, the change poller and the
//! periodic runtime that drives it.

pub mod adapters;
pub mod clipboard;
pub mod runtime;
