//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, PublishError, ScheduleError, TrendError};

/// Recovery class of an error, as seen from the publish cycle.
///
/// The cycle never dies from a single bad iteration; this classification
/// decides how long it waits before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ErrorClass {
    /// Unrecoverable; the process should halt (no topics available at all).
    Fatal,
    /// Recovered locally with a short fixed retry delay (generation failure).
    ShortRetry,
    /// Recovered locally; the normal schedule resumes (publish failure,
    /// anything unclassified).
    Normal,
}

/// Foundation error enum for the crier workspace.
///
/// # Examples
///
/// ```
/// use crier_error::{CrierError, TrendError};
///
/// let trend_err = TrendError::new("feed unreachable");
/// let err: CrierError = trend_err.into();
/// assert!(format!("{}", err).contains("Trend Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CrierErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text or image generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Publish rejection
    #[from(PublishError)]
    Publish(PublishError),
    /// Schedule configuration error
    #[from(ScheduleError)]
    Schedule(ScheduleError),
    /// Trend fetch error
    #[from(TrendError)]
    Trend(TrendError),
}

impl CrierErrorKind {
    /// Recovery class of this error kind.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Config(_) => ErrorClass::Fatal,
            Self::Generation(_) => ErrorClass::ShortRetry,
            Self::Publish(_) | Self::Schedule(_) | Self::Trend(_) => ErrorClass::Normal,
        }
    }
}

/// Crier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use crier_error::{CrierResult, ConfigError, ErrorClass};
///
/// fn might_fail() -> CrierResult<()> {
///     Err(ConfigError::new("static topic list is empty"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.class(), ErrorClass::Fatal);
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Crier Error: {}", _0)]
pub struct CrierError(Box<CrierErrorKind>);

impl CrierError {
    /// Create a new error from a kind.
    pub fn new(kind: CrierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CrierErrorKind {
        &self.0
    }

    /// Recovery class of this error.
    pub fn class(&self) -> ErrorClass {
        self.0.class()
    }
}

// Generic From implementation for any type that converts to CrierErrorKind
impl<T> From<T> for CrierError
where
    T: Into<CrierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for crier operations.
///
/// # Examples
///
/// ```
/// use crier_error::{CrierResult, TrendError};
///
/// fn fetch_trends() -> CrierResult<Vec<String>> {
///     Err(TrendError::new("feed returned 503"))?
/// }
/// ```
pub type CrierResult<T> = std::result::Result<T, CrierError>;
