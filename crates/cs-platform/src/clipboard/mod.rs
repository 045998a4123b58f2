mod common;
pub mod platform;
mod system;

pub use system::SystemPasteboard;
