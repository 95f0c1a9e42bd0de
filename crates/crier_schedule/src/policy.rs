//! Next-fire computation.

use crate::{ScheduleConfig, WindowSchedule};
use chrono::{DateTime, Duration as TimeDelta, FixedOffset, Offset, Timelike, Utc};
use crier_error::{CrierResult, ScheduleError};
use rand::Rng;
use std::time::Duration;

/// When the next publish attempt should happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextFire {
    /// Relative delay from now (interval mode).
    Delay(Duration),
    /// Absolute target time (window mode).
    At(DateTime<FixedOffset>),
}

impl NextFire {
    /// Suspend duration from `now` until this fire point, clamped to zero.
    pub fn delay_from(&self, now: DateTime<Utc>) -> Duration {
        match self {
            Self::Delay(delay) => *delay,
            Self::At(target) => (target.with_timezone(&Utc) - now)
                .to_std()
                .unwrap_or(Duration::ZERO),
        }
    }
}

/// Computes when the next publish attempt fires.
///
/// Pure: the same (time, configuration, random draws) always produce the
/// same answer. The caller owns the clock and the RNG.
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    config: ScheduleConfig,
    offset: FixedOffset,
}

impl SchedulePolicy {
    /// Build a policy from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails
    /// [`ScheduleConfig::validate`].
    pub fn new(config: ScheduleConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        let offset = match &config {
            ScheduleConfig::Interval(_) => Utc.fix(),
            ScheduleConfig::Window(window) => FixedOffset::east_opt(
                window.utc_offset_minutes * 60,
            )
            .ok_or_else(|| {
                ScheduleError::new(format!(
                    "utc_offset_minutes ({}) is not a valid offset",
                    window.utc_offset_minutes
                ))
            })?,
        };
        Ok(Self { config, offset })
    }

    /// Compute the next fire specification.
    ///
    /// Interval mode yields a [`NextFire::Delay`] of a uniform random number
    /// of seconds in `[min_secs, max_secs]`. Window mode yields a
    /// [`NextFire::At`]: inside the window, now plus jitter; before the
    /// window, today's opening plus jitter; at or after the window end,
    /// tomorrow's opening plus jitter.
    pub fn next_fire<R: Rng>(&self, now: DateTime<Utc>, rng: &mut R) -> CrierResult<NextFire> {
        match &self.config {
            ScheduleConfig::Interval(interval) => {
                let secs = rng.gen_range(interval.min_secs..=interval.max_secs);
                Ok(NextFire::Delay(Duration::from_secs(secs)))
            }
            ScheduleConfig::Window(window) => self.next_window_fire(window, now, rng),
        }
    }

    fn next_window_fire<R: Rng>(
        &self,
        window: &WindowSchedule,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> CrierResult<NextFire> {
        let local = now.with_timezone(&self.offset);
        let jitter = TimeDelta::minutes(
            rng.gen_range(window.jitter_min_minutes..=window.jitter_max_minutes),
        );

        let base = if window.start_hour <= local.hour() && local.hour() < window.end_hour {
            local
        } else {
            let opening = local
                .date_naive()
                .and_hms_opt(window.start_hour, 0, 0)
                .ok_or_else(|| {
                    ScheduleError::new(format!("invalid window start hour {}", window.start_hour))
                })?;
            let mut target = opening
                .and_local_timezone(self.offset)
                .single()
                .ok_or_else(|| ScheduleError::new("ambiguous window opening time"))?;
            if local.hour() >= window.end_hour {
                target += TimeDelta::days(1);
            }
            target
        };

        Ok(NextFire::At(base + jitter))
    }
}
