//! Topic type driving one publish cycle.

use serde::{Deserialize, Serialize};

/// The subject string driving both text and image generation for one cycle.
///
/// Immutable once selected. Topics come from a static list or a trending
/// fetch; no canonical form is enforced, so lookups elsewhere compare
/// case-insensitively.
///
/// # Examples
///
/// ```
/// use crier_core::Topic;
///
/// let topic = Topic::new("Quantum Computing");
/// assert!(topic.eq_ignore_case("quantum computing"));
/// assert_eq!(format!("{}", topic), "Quantum Computing");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct Topic(String);

impl Topic {
    /// Create a new topic.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The topic as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another name.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Topic {
    fn from(name: String) -> Self {
        Self(name)
    }
}
