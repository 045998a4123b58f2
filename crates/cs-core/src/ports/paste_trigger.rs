use anyhow::Result;

/// Synthesizes a paste keystroke into the previously focused application.
///
/// Input injection is platform specific and lives outside the engine; the
/// engine only decides *when* to ask for it.
pub trait PasteTriggerPort: Send + Sync {
    fn trigger_paste(&self) -> Result<()>;
}
