//! Native pasteboard change counters.
//!
//! macOS and Windows expose a counter that the OS bumps on every content
//! replacement. Other platforms return `None` and the adapter falls back to
//! content fingerprinting.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

// macOS exports
#[cfg(target_os = "macos")]
pub use macos::change_count as native_change_count;

// Windows exports
#[cfg(target_os = "windows")]
pub use windows::sequence_number as native_change_count;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn native_change_count() -> Option<u64> {
    None
}
