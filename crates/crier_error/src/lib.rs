//! Error types for the crier posting bot.
//!
//! This crate provides the foundation error types used throughout the crier
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - Per-concern error structs (`ConfigError`, `GenerationError`, ...) carry a
//!   message with source location tracking via `#[track_caller]`
//! - `CrierErrorKind` collects them behind `From` conversions
//! - `CrierError` boxes the kind so results stay a single pointer wide
//!
//! # Examples
//!
//! ```
//! use crier_error::{CrierResult, PublishError};
//!
//! fn push_post() -> CrierResult<String> {
//!     Err(PublishError::new("webhook", "403 Forbidden"))?
//! }
//!
//! match push_post() {
//!     Ok(id) => println!("posted: {}", id),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod publish;
mod schedule;
mod trend;

pub use config::ConfigError;
pub use error::{CrierError, CrierErrorKind, CrierResult, ErrorClass};
pub use generation::GenerationError;
pub use publish::PublishError;
pub use schedule::ScheduleError;
pub use trend::TrendError;
