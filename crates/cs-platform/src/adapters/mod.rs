//! Adapters implementing `cs-core` ports.

mod clock;
mod in_memory_pasteboard;
mod paste_trigger;

pub use clock::SystemClock;
pub use in_memory_pasteboard::InMemoryPasteboard;
pub use paste_trigger::NoopPasteTrigger;
