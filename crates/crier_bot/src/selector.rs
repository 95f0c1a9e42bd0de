//! Topic selection with trending-first preference.

use crier_core::Topic;
use crier_error::{ConfigError, CrierResult};
use crier_interface::TrendSource;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, instrument, warn};

/// Picks the next topic: a uniform draw from the leading trending entries
/// when the feed delivers, otherwise from the static list.
///
/// A failing trend fetch is logged and treated as an empty feed; it never
/// propagates. The only error is having no topic anywhere, which is the one
/// unrecoverable condition for the bot.
#[derive(Debug, Clone)]
pub struct TopicSelector {
    static_topics: Vec<Topic>,
    trend_limit: usize,
}

impl TopicSelector {
    /// Create a selector over the static topics, preferring at most
    /// `trend_limit` leading trend entries.
    pub fn new(static_topics: Vec<Topic>, trend_limit: usize) -> Self {
        Self {
            static_topics,
            trend_limit,
        }
    }

    /// Select the next topic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the static list is empty and the trend
    /// fetch yielded nothing.
    #[instrument(skip_all)]
    pub async fn select<R: Rng + Send>(
        &self,
        trends: &dyn TrendSource,
        rng: &mut R,
    ) -> CrierResult<Topic> {
        let trending = match trends.fetch().await {
            Ok(trending) => trending,
            Err(e) => {
                warn!(error = %e, "trend fetch failed, falling back to static topics");
                Vec::new()
            }
        };

        if !trending.is_empty() {
            let pool = &trending[..trending.len().min(self.trend_limit)];
            if let Some(name) = pool.choose(rng) {
                info!(topic = %name, source = "trending", "selected topic");
                return Ok(Topic::new(name.clone()));
            }
        }

        match self.static_topics.choose(rng) {
            Some(topic) => {
                info!(topic = %topic, source = "static", "selected topic");
                Ok(topic.clone())
            }
            None => Err(ConfigError::new(
                "no topics available: static list is empty and trend fetch yielded nothing",
            )
            .into()),
        }
    }
}
