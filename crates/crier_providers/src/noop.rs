//! No-op collaborators for dry runs and feedless setups.

use async_trait::async_trait;
use crier_core::{MediaRef, Post};
use crier_error::CrierResult;
use crier_interface::{PostId, Publisher, TrendSource};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Publisher that logs the post and returns a synthetic id.
///
/// Used by `--dry-run` wiring and tests.
#[derive(Debug, Default)]
pub struct NoOpPublisher {
    published: AtomicU64,
}

impl NoOpPublisher {
    /// Create a new no-op publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts "published" so far.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Publisher for NoOpPublisher {
    async fn publish(&self, post: &Post, media: Option<&MediaRef>) -> CrierResult<PostId> {
        let n = self.published.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            chars = post.char_len(),
            has_media = media.is_some(),
            text = %post,
            "dry run: post not sent"
        );
        Ok(PostId(format!("noop-{n}")))
    }

    async fn verify(&self) -> CrierResult<()> {
        Ok(())
    }

    fn platform_name(&self) -> &str {
        "noop"
    }
}

/// Trend source that never has anything trending.
///
/// Wired up when no trend feed is configured; topic selection falls through
/// to the static list every cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTrendSource;

#[async_trait]
impl TrendSource for NoOpTrendSource {
    async fn fetch(&self) -> CrierResult<Vec<String>> {
        Ok(Vec::new())
    }
}
