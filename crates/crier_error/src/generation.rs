//! Content generation error types.

/// Text or image generation failure.
///
/// The publish cycle recovers from these locally with a short fixed retry
/// delay instead of the normal posting interval.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error ({}): {} at line {} in {}", provider, message, line, file)]
pub struct GenerationError {
    /// Provider that failed (e.g. "ollama", "images")
    pub provider: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    #[track_caller]
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            provider: provider.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
