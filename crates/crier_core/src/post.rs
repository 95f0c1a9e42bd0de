//! Publishable post type.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The final, publishable string sent to the publishing collaborator.
///
/// A `Post` is produced by [`PostComposer::compose`](crate::PostComposer):
/// its text is at most the configured maximum number of characters and
/// contains at least one `#`-prefixed token. Never persisted beyond the
/// single publish attempt.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct Post {
    /// Post text.
    text: String,
}

impl Post {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    /// Length of the post in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the post carries at least one hashtag marker.
    pub fn has_hashtag(&self) -> bool {
        self.text.contains('#')
    }

    /// Consume the post, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
