//! Topic-to-prompt mapping for text generation.

use crate::Topic;
use std::collections::HashMap;

/// Explicit mapping from topic to generation prompt, with a default
/// template for topics that carry no override.
///
/// Override lookup is case-insensitive since topics arrive with whatever
/// casing the trending feed used.
///
/// # Examples
///
/// ```
/// use crier_core::{PromptLibrary, Topic};
/// use std::collections::HashMap;
///
/// let mut overrides = HashMap::new();
/// overrides.insert("Docker".to_string(), "Promote Docker tips.".to_string());
/// let library = PromptLibrary::new(overrides, 250);
///
/// assert_eq!(library.prompt_for(&Topic::new("docker")), "Promote Docker tips.");
/// assert!(library.prompt_for(&Topic::new("GitOps")).contains("GitOps"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    overrides: HashMap<String, String>,
    target_len: usize,
}

impl PromptLibrary {
    /// Create a library from per-topic overrides and the target post length
    /// mentioned in the default template.
    pub fn new(overrides: HashMap<String, String>, target_len: usize) -> Self {
        Self {
            overrides,
            target_len,
        }
    }

    /// The prompt to use for a topic: the override when one matches
    /// (case-insensitive), otherwise the default template.
    pub fn prompt_for(&self, topic: &Topic) -> String {
        self.overrides
            .iter()
            .find(|(name, _)| topic.eq_ignore_case(name))
            .map(|(_, prompt)| prompt.clone())
            .unwrap_or_else(|| self.default_prompt(topic))
    }

    fn default_prompt(&self, topic: &Topic) -> String {
        format!(
            "Generate exactly one snappy and engaging post on {topic}, offering tips or \
             insights. Output only the post content itself, nothing else like introductions, \
             options, or explanations. Keep the post under {} characters. Add relevant \
             hashtags. End with a call to action and ask users to like and repost.",
            self.target_len
        )
    }
}
