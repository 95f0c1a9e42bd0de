//! Trait definitions for the cycle's collaborators.

use crate::PostId;
use async_trait::async_trait;
use crier_core::{MediaRef, Post, Topic};
use crier_error::CrierResult;

/// Generates short promotional copy for a topic.
///
/// `Ok(None)` signals a failed or empty generation; the cycle treats it the
/// same as an error and skips the iteration with a short retry delay.
/// Neither outcome propagates out of the cycle.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate raw post text for the topic.
    async fn generate(&self, topic: &Topic) -> CrierResult<Option<String>>;

    /// Provider name (e.g. "ollama").
    fn provider_name(&self) -> &'static str;
}

/// Supplies an ordered list of currently-trending topic names.
///
/// Failure normalizes to an empty list at the selection step; a broken feed
/// only ever costs the trending preference, never the cycle.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetch trending topic names, most relevant first.
    async fn fetch(&self) -> CrierResult<Vec<String>>;
}

/// Looks up or generates an image to accompany a post.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Find media for the topic. `Ok(None)` is a normal outcome; the post
    /// goes out without media.
    async fn find(&self, topic: &Topic) -> CrierResult<Option<MediaRef>>;
}

/// Publishes a composed post to a social platform.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the post with an optional media attachment.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`](crier_error::PublishError) on platform
    /// rejection. The cycle logs it and resumes on the normal schedule.
    async fn publish(&self, post: &Post, media: Option<&MediaRef>) -> CrierResult<PostId>;

    /// Check that the platform is reachable with the configured credentials.
    ///
    /// Called once at startup; handles are reused for the process lifetime.
    async fn verify(&self) -> CrierResult<()>;

    /// Platform name (e.g. "webhook", "noop").
    fn platform_name(&self) -> &str;
}
