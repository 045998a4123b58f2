use anyhow::Result;
use cs_core::ports::PasteTriggerPort;

/// Paste trigger for headless runs: records the request and does nothing.
///
/// 无界面运行时使用的占位实现：只记录日志，不注入按键。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPasteTrigger;

impl PasteTriggerPort for NoopPasteTrigger {
    fn trigger_paste(&self) -> Result<()> {
        log::debug!("paste keystroke requested, no input injector configured");
        Ok(())
    }
}
