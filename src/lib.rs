//! Clipstack binary support: command line, configuration loading, tracing
//! setup and dependency wiring.

pub mod bootstrap;
pub mod cli;
