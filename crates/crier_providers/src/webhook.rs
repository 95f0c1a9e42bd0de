//! Publishing through a webhook endpoint.

use async_trait::async_trait;
use crier_core::{MediaRef, Post};
use crier_error::{CrierResult, PublishError};
use crier_interface::{PostId, Publisher};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

const PLATFORM: &str = "webhook";

/// Publishes posts by POSTing `{"content": ...}` to a webhook URL.
///
/// Works with Discord-style webhooks: the request carries `wait=true` so the
/// response body holds the created message and its id. A `MediaRef::Url`
/// attaches as an image embed; local file paths cannot travel through a
/// webhook and are skipped with a warning.
pub struct WebhookPublisher {
    http: reqwest::Client,
    url: String,
}

impl WebhookPublisher {
    /// Create a publisher for the given webhook URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[derive(Deserialize)]
struct WebhookMessage {
    id: String,
}

#[async_trait]
impl Publisher for WebhookPublisher {
    #[instrument(skip(self, post, media), fields(chars = post.char_len()))]
    async fn publish(&self, post: &Post, media: Option<&MediaRef>) -> CrierResult<PostId> {
        let mut payload = json!({ "content": post.text() });

        match media {
            Some(MediaRef::Url(url)) => {
                payload["embeds"] = json!([{ "image": { "url": url } }]);
            }
            Some(MediaRef::Path(path)) => {
                warn!(path = %path.display(), "webhook cannot attach local files, posting text only");
            }
            None => {}
        }

        let response = self
            .http
            .post(&self.url)
            .query(&[("wait", "true")])
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::new(PLATFORM, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(
                PublishError::new(PLATFORM, format!("status {}", response.status())).into(),
            );
        }

        let message: WebhookMessage = response
            .json()
            .await
            .map_err(|e| PublishError::new(PLATFORM, format!("bad response body: {e}")))?;

        info!(post_id = %message.id, "published via webhook");
        Ok(PostId(message.id))
    }

    async fn verify(&self) -> CrierResult<()> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PublishError::new(PLATFORM, format!("verify failed: {e}")))?;

        if !response.status().is_success() {
            return Err(
                PublishError::new(PLATFORM, format!("verify status {}", response.status())).into(),
            );
        }
        Ok(())
    }

    fn platform_name(&self) -> &str {
        PLATFORM
    }
}
