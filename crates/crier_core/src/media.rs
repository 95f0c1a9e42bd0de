//! Media reference types for post attachments.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where an attached image is sourced from.
///
/// At most one media reference accompanies a post.
///
/// # Examples
///
/// ```
/// use crier_core::MediaRef;
///
/// let local = MediaRef::Path("images/devops.png".into());
/// let remote = MediaRef::Url("https://example.com/devops.png".to_string());
/// assert_ne!(local, remote);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaRef {
    /// Local file path
    Path(PathBuf),
    /// Remote URL
    Url(String),
}
