use serde::{Deserialize, Serialize};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimestampMs(i64);

impl TimestampMs {
    /// Unix epoch milliseconds (UTC)
    pub fn from_epoch_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Milliseconds between `self` and `now`, clamped at zero when the clock
    /// went backwards.
    pub fn elapsed_ms(&self, now: TimestampMs) -> i64 {
        now.0.saturating_sub(self.0).max(0)
    }

    /// Relative label used by list rows ("3 minutes ago").
    pub fn relative_label(&self, now: TimestampMs) -> String {
        let elapsed = self.elapsed_ms(now);
        if elapsed < 5 * SECOND_MS {
            return "just now".to_string();
        }

        let (value, unit) = if elapsed < MINUTE_MS {
            (elapsed / SECOND_MS, "second")
        } else if elapsed < HOUR_MS {
            (elapsed / MINUTE_MS, "minute")
        } else if elapsed < DAY_MS {
            (elapsed / HOUR_MS, "hour")
        } else {
            (elapsed / DAY_MS, "day")
        };

        if value == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{value} {unit}s ago")
        }
    }
}
