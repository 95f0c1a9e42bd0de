//! Schedule configuration types.

use crier_error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Posting cadence configuration, tagged by `mode` in TOML:
///
/// ```toml
/// [schedule]
/// mode = "interval"
/// min_secs = 3600
/// max_secs = 10800
/// ```
///
/// or
///
/// ```toml
/// [schedule]
/// mode = "window"
/// start_hour = 9
/// end_hour = 15
/// utc_offset_minutes = -300
/// jitter_min_minutes = 10
/// jitter_max_minutes = 45
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ScheduleConfig {
    /// Random delay between posts.
    Interval(IntervalSchedule),
    /// Posts held to a daily local-time window.
    Window(WindowSchedule),
}

impl ScheduleConfig {
    /// Check bounds and ordering.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - interval: `min_secs > max_secs`
    /// - window: hours out of range, window empty, jitter bounds inverted,
    ///   or the UTC offset is a day or more
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            Self::Interval(interval) => interval.validate(),
            Self::Window(window) => window.validate(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::Interval(IntervalSchedule::default())
    }
}

/// Random-interval schedule: each delay is a uniform draw from
/// `[min_secs, max_secs]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSchedule {
    /// Minimum delay between posts (seconds).
    #[serde(default = "default_min_secs")]
    pub min_secs: u64,
    /// Maximum delay between posts (seconds).
    #[serde(default = "default_max_secs")]
    pub max_secs: u64,
}

fn default_min_secs() -> u64 {
    3600
}

fn default_max_secs() -> u64 {
    10800
}

impl IntervalSchedule {
    fn validate(&self) -> Result<(), ScheduleError> {
        if self.min_secs > self.max_secs {
            return Err(ScheduleError::new(format!(
                "min_secs ({}) exceeds max_secs ({})",
                self.min_secs, self.max_secs
            )));
        }
        Ok(())
    }
}

impl Default for IntervalSchedule {
    fn default() -> Self {
        Self {
            min_secs: default_min_secs(),
            max_secs: default_max_secs(),
        }
    }
}

/// Windowed schedule: immediate (jittered) posting inside the
/// `[start_hour, end_hour)` local window, otherwise held to the next
/// window opening plus jitter.
///
/// The window's timezone is a fixed UTC offset in minutes (e.g. `-300` for
/// US Eastern standard time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSchedule {
    /// First hour of the allowed window (local, 0-23).
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// End of the allowed window, exclusive (local, 1-24).
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    /// UTC offset of the target audience's timezone, in minutes.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Minimum jitter added to the fire time (minutes).
    #[serde(default = "default_jitter_min")]
    pub jitter_min_minutes: i64,
    /// Maximum jitter added to the fire time (minutes).
    #[serde(default = "default_jitter_max")]
    pub jitter_max_minutes: i64,
}

fn default_start_hour() -> u32 {
    9
}

fn default_end_hour() -> u32 {
    15
}

fn default_jitter_min() -> i64 {
    10
}

fn default_jitter_max() -> i64 {
    45
}

impl WindowSchedule {
    fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_hour > 23 {
            return Err(ScheduleError::new(format!(
                "start_hour ({}) out of range 0-23",
                self.start_hour
            )));
        }
        if self.end_hour > 24 {
            return Err(ScheduleError::new(format!(
                "end_hour ({}) out of range 1-24",
                self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(ScheduleError::new(format!(
                "posting window [{}, {}) is empty",
                self.start_hour, self.end_hour
            )));
        }
        if self.jitter_min_minutes < 0 || self.jitter_min_minutes > self.jitter_max_minutes {
            return Err(ScheduleError::new(format!(
                "jitter range [{}, {}] is invalid",
                self.jitter_min_minutes, self.jitter_max_minutes
            )));
        }
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(ScheduleError::new(format!(
                "utc_offset_minutes ({}) is a day or more",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

impl Default for WindowSchedule {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            utc_offset_minutes: 0,
            jitter_min_minutes: default_jitter_min(),
            jitter_max_minutes: default_jitter_max(),
        }
    }
}
