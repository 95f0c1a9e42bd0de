//! Publishing error types.

/// Platform rejection of a publish attempt.
///
/// Recovered locally by the publish cycle: logged, the iteration is skipped,
/// and the normal schedule resumes. No same-iteration retry.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error ({}): {} at line {} in {}", platform, message, line, file)]
pub struct PublishError {
    /// Platform that rejected the post (e.g. "webhook", "noop")
    pub platform: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use crier_error::PublishError;
    ///
    /// let err = PublishError::new("webhook", "rate limited");
    /// assert_eq!(err.platform, "webhook");
    /// ```
    #[track_caller]
    pub fn new(platform: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            platform: platform.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
