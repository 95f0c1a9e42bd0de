//! Bot configuration types and loading.

use crier_error::{ConfigError, CrierResult};
use crier_schedule::ScheduleConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for the posting bot, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot identity.
    #[serde(default)]
    pub bot: BotSettings,
    /// Topic sources.
    pub topics: TopicsConfig,
    /// Post composition limits.
    #[serde(default)]
    pub compose: ComposeConfig,
    /// Text generation settings.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Posting cadence.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Publishing target.
    #[serde(default)]
    pub publish: PublishConfig,
    /// Image lookup (optional; no section means posts go out without media).
    #[serde(default)]
    pub images: Option<ImagesConfig>,
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CrierResult<Self> {
        debug!("loading bot config from file");

        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("failed to read config file: {e}"))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(
            bot = %config.bot.name,
            static_topics = config.topics.static_topics.len(),
            trend_feed = config.topics.trend_url.is_some(),
            "loaded bot configuration"
        );

        Ok(config)
    }

    /// Check for common configuration issues.
    ///
    /// Returns human-readable warnings (empty if nothing looks off). Hard
    /// errors such as an unparsable file or an invalid schedule surface from
    /// [`BotConfig::from_file`] and `SchedulePolicy::new` instead.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.topics.static_topics.is_empty() && self.topics.trend_url.is_none() {
            warnings.push(
                "no static topics and no trend feed configured; topic selection will fail"
                    .to_string(),
            );
        }

        if !self.compose.fallback_hashtags.contains('#') {
            warnings.push(format!(
                "fallback_hashtags ({:?}) contains no '#'; composed posts may lack a hashtag",
                self.compose.fallback_hashtags
            ));
        }

        let fallback_len = self.compose.fallback_hashtags.chars().count();
        if self.compose.max_len < fallback_len + 2 {
            warnings.push(format!(
                "max_len ({}) leaves no room for the fallback hashtags ({} chars)",
                self.compose.max_len, fallback_len
            ));
        }

        if self.publish.platform == PublishPlatform::Webhook && self.publish.webhook_url.is_none()
        {
            warnings.push("publish platform is webhook but webhook_url is unset".to_string());
        }

        if let Some(images) = &self.images {
            if !images.dir.is_dir() {
                warnings.push(format!(
                    "images dir ({}) does not exist or is not a directory",
                    images.dir.display()
                ));
            }
        }

        debug!(warnings = warnings.len(), "configuration validated");
        warnings
    }
}

/// Bot identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Bot name, used in logs.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

fn default_bot_name() -> String {
    "crier".to_string()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            description: String::new(),
        }
    }
}

/// Topic source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsConfig {
    /// Static topic list, used when the trend feed is empty or failing.
    #[serde(rename = "static", default)]
    pub static_topics: Vec<String>,
    /// How many leading trend entries to pick from.
    #[serde(default = "default_trend_limit")]
    pub trend_limit: usize,
    /// Trending feed URL (optional).
    #[serde(default)]
    pub trend_url: Option<String>,
}

fn default_trend_limit() -> usize {
    20
}

/// Post composition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Maximum post length in characters (platform limit minus margin).
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    /// Hashtags appended when the generated text carries none.
    #[serde(default = "default_fallback_hashtags")]
    pub fallback_hashtags: String,
}

fn default_max_len() -> usize {
    280
}

fn default_fallback_hashtags() -> String {
    "#News".to_string()
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            fallback_hashtags: default_fallback_hashtags(),
        }
    }
}

/// Text generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Ollama endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Fixed retry delay after a failed generation (seconds).
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    /// Per-topic prompt overrides (case-insensitive topic match).
    #[serde(default)]
    pub prompts: HashMap<String, String>,
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gemma3:4b".to_string()
}

fn default_retry_delay_secs() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            retry_delay_secs: default_retry_delay_secs(),
            prompts: HashMap::new(),
        }
    }
}

/// Publishing platform selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishPlatform {
    /// Log posts without sending them anywhere.
    Noop,
    /// POST to a webhook URL.
    Webhook,
}

/// Publishing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Which publisher to wire up.
    #[serde(default = "default_platform")]
    pub platform: PublishPlatform,
    /// Webhook URL (required for the webhook platform; may also come from
    /// the environment).
    #[serde(default)]
    pub webhook_url: Option<String>,
}

fn default_platform() -> PublishPlatform {
    PublishPlatform::Noop
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            webhook_url: None,
        }
    }
}

/// Image lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Directory scanned for topic-matching image files.
    pub dir: PathBuf,
}
