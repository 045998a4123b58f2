//! Resolved engine settings.
//!
//! [`AppConfig`] records what the user wrote; `EngineSettings` is what the
//! engine runs with: defaults filled in and out-of-range values clamped.

use std::time::Duration;

use tracing::warn;

use crate::config::AppConfig;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Default pasteboard sampling period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Shortest accepted sampling period.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub history_capacity: usize,
    pub poll_interval: Duration,
    pub simulate_paste: bool,
    pub log_to_file: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            simulate_paste: false,
            log_to_file: true,
        }
    }
}

impl EngineSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::default();

        let history_capacity = match config.history_capacity {
            Some(0) => {
                warn!("history capacity 0 is not usable, keeping a single entry");
                1
            }
            Some(capacity) => capacity,
            None => defaults.history_capacity,
        };

        let poll_interval = match config.poll_interval_ms {
            Some(ms) => Self::clamp_poll_interval(Duration::from_millis(ms)),
            None => defaults.poll_interval,
        };

        Self {
            history_capacity,
            poll_interval,
            simulate_paste: config.simulate_paste.unwrap_or(defaults.simulate_paste),
            log_to_file: config.log_to_file.unwrap_or(defaults.log_to_file),
        }
    }

    /// Override the poll interval (e.g. from a command line flag).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Self::clamp_poll_interval(interval);
        self
    }

    fn clamp_poll_interval(interval: Duration) -> Duration {
        if interval < MIN_POLL_INTERVAL {
            warn!(
                requested_ms = interval.as_millis() as u64,
                min_ms = MIN_POLL_INTERVAL.as_millis() as u64,
                "poll interval too short, clamping"
            );
            MIN_POLL_INTERVAL
        } else {
            interval
        }
    }
}
