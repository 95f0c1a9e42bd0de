//! Trending-topic source error types.

/// Trend fetch failure.
///
/// The topic selector normalizes these to an empty list; a failed fetch
/// never propagates past the selection step.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Trend Error: {} at line {} in {}", message, line, file)]
pub struct TrendError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TrendError {
    /// Create a new TrendError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
