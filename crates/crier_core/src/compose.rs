//! Post composition: raw generated text to a publishable post.

use crate::Post;

/// Ellipsis appended when a candidate is truncated.
const ELLIPSIS: &str = "...";

/// Normalizes raw generated text into a publishable [`Post`].
///
/// Generated text arrives messy: multi-line, wrapped in conversational
/// framing, sometimes over the platform's length budget, sometimes without a
/// single hashtag. The composer applies three rules:
///
/// 1. When the raw text spans several lines, the first non-empty line that
///    is not a markdown-style `**` header becomes the candidate.
/// 2. Candidates over `max_len` characters are truncated to `max_len - 3`
///    characters plus `"..."`, landing exactly at `max_len`.
/// 3. A candidate without a `#` gets the fallback hashtags appended after a
///    single space. The length cap still holds afterwards: the candidate is
///    re-truncated first when appending would overflow.
///
/// An empty raw input yields the fallback hashtags alone.
///
/// # Examples
///
/// ```
/// use crier_core::PostComposer;
///
/// let composer = PostComposer::new(250, "#VR #AR");
/// let post = composer.compose("This is a tweet without hashtags.");
/// assert!(post.text().ends_with(" #VR #AR"));
/// assert!(post.char_len() <= 250);
/// ```
#[derive(Debug, Clone)]
pub struct PostComposer {
    max_len: usize,
    fallback_hashtags: String,
}

impl PostComposer {
    /// Create a composer for the given character budget and fallback tags.
    ///
    /// `fallback_hashtags` should itself contain a `#` token; the hashtag
    /// guarantee on composed posts holds through it.
    pub fn new(max_len: usize, fallback_hashtags: impl Into<String>) -> Self {
        Self {
            max_len,
            fallback_hashtags: fallback_hashtags.into(),
        }
    }

    /// Configured maximum post length in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Compose a publishable post from raw generated text.
    ///
    /// The output is at most `max_len` characters and contains at least one
    /// `#` token. Already-compliant input is returned unchanged.
    pub fn compose(&self, raw: &str) -> Post {
        let candidate = candidate_line(raw).trim();

        if candidate.is_empty() {
            return Post::new(self.fallback_hashtags.clone());
        }

        let mut text = clamp_chars(candidate, self.max_len);

        if !text.contains('#') {
            let reserve = self.fallback_hashtags.chars().count() + 1;
            if char_len(&text) + reserve > self.max_len {
                text = clamp_chars(&text, self.max_len.saturating_sub(reserve));
            }
            text.push(' ');
            text.push_str(&self.fallback_hashtags);
        }

        Post::new(text)
    }
}

/// Select the candidate line from possibly multi-line raw text.
///
/// Multi-line responses usually lead with framing ("**Option 1**") before
/// the actual post; the first non-empty, non-header line wins. Single-line
/// input passes through untouched.
fn candidate_line(raw: &str) -> &str {
    if raw.lines().count() > 1 {
        raw.lines()
            .find(|line| !line.trim().is_empty() && !line.starts_with("**"))
            .unwrap_or(raw)
    } else {
        raw
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to `max` characters, replacing the tail with an ellipsis.
///
/// Truncation counts characters, not bytes, so multi-byte text never splits
/// mid-character.
fn clamp_chars(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        return s.to_string();
    }

    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
