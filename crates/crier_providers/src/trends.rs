//! Trending topics from an HTTP feed.

use async_trait::async_trait;
use crier_error::{CrierResult, TrendError};
use crier_interface::TrendSource;
use tracing::{debug, instrument};

/// Fetches trending topic names from an endpoint returning a JSON array of
/// strings.
///
/// Any transport or decode failure surfaces as a [`TrendError`]; the topic
/// selector downgrades that to an empty list.
pub struct HttpTrendSource {
    http: reqwest::Client,
    url: String,
}

impl HttpTrendSource {
    /// Create a trend source for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TrendSource for HttpTrendSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> CrierResult<Vec<String>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TrendError::new(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TrendError::new(format!("status {}", response.status())).into());
        }

        let trends: Vec<String> = response
            .json()
            .await
            .map_err(|e| TrendError::new(format!("bad response body: {e}")))?;

        debug!(count = trends.len(), "fetched trending topics");
        Ok(trends)
    }
}
