//! Posting cadence policy for the crier posting bot.
//!
//! Two modes: a jittered random interval, and a timezone-windowed mode that
//! holds posts until an allowed local-time-of-day window. The policy is a
//! pure function of (current time, configuration, random source) with no
//! I/O and no side effects, so unit tests inject a fixed clock and a seeded
//! RNG.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod policy;

pub use config::{IntervalSchedule, ScheduleConfig, WindowSchedule};
pub use policy::{NextFire, SchedulePolicy};
