//! The publish cycle: select, generate, attach, publish, suspend, repeat.

use crate::{BotConfig, CycleMetrics, TopicSelector};
use chrono::{DateTime, Utc};
use crier_core::{PostComposer, Topic};
use crier_error::{CrierResult, ErrorClass};
use crier_interface::{ImageProvider, PostId, Publisher, TextGenerator, TrendSource};
use crier_schedule::SchedulePolicy;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Message types for the publish cycle.
#[derive(Debug)]
pub enum CycleMessage {
    /// Cut the current suspension short and post immediately.
    PostNow,
    /// Shut the cycle down.
    Shutdown,
}

/// What a single cycle iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Post published; normal schedule applies.
    Published(PostId),
    /// Text or image generation failed; the short retry delay applies.
    GenerationFailed,
    /// Publish was rejected or an unclassified error hit; normal schedule
    /// applies.
    PublishFailed,
}

/// Collaborator handles the cycle depends on.
///
/// Built once at startup and passed into [`PublishCycle::new`]. Handles
/// live as explicit dependencies, never as ambient global state.
#[derive(Clone, Getters, derive_builder::Builder)]
pub struct Collaborators {
    /// Text generation collaborator.
    text: Arc<dyn TextGenerator>,
    /// Trending-topic source.
    trends: Arc<dyn TrendSource>,
    /// Image lookup (optional; `None` means posts go out without media).
    #[builder(default)]
    images: Option<Arc<dyn ImageProvider>>,
    /// Publishing collaborator.
    publisher: Arc<dyn Publisher>,
}

/// The control loop tying the bot together.
///
/// Single logical thread of control: one iteration at a time, one
/// suspension per iteration. No single collaborator failure kills the
/// process; only shutdown or a fatal configuration error (no topics
/// anywhere) ends the loop.
pub struct PublishCycle {
    collaborators: Collaborators,
    selector: TopicSelector,
    composer: PostComposer,
    policy: SchedulePolicy,
    retry_delay: Duration,
    metrics: CycleMetrics,
    rng: StdRng,
    last_attempt: Option<DateTime<Utc>>,
    rx: mpsc::Receiver<CycleMessage>,
}

impl PublishCycle {
    /// Build a cycle from configuration and collaborator handles.
    ///
    /// # Errors
    ///
    /// Returns error if the schedule configuration is invalid.
    pub fn new(
        config: &BotConfig,
        collaborators: Collaborators,
        rx: mpsc::Receiver<CycleMessage>,
    ) -> CrierResult<Self> {
        let static_topics = config
            .topics
            .static_topics
            .iter()
            .map(|name| Topic::new(name.clone()))
            .collect();
        let selector = TopicSelector::new(static_topics, config.topics.trend_limit);
        let composer = PostComposer::new(
            config.compose.max_len,
            config.compose.fallback_hashtags.clone(),
        );
        let policy = SchedulePolicy::new(config.schedule.clone())?;

        Ok(Self {
            collaborators,
            selector,
            composer,
            policy,
            retry_delay: Duration::from_secs(config.generation.retry_delay_secs),
            metrics: CycleMetrics::new(),
            rng: StdRng::from_entropy(),
            last_attempt: None,
            rx,
        })
    }

    /// Shared handle to the cycle's metrics.
    pub fn metrics(&self) -> CycleMetrics {
        self.metrics.clone()
    }

    /// Timestamp of the last publish attempt, if any.
    pub fn last_attempt(&self) -> Option<DateTime<Utc>> {
        self.last_attempt
    }

    /// Run the cycle until shutdown.
    ///
    /// # Errors
    ///
    /// Returns error only for the unrecoverable case: topic selection with
    /// no topic source left at all.
    #[instrument(skip(self), fields(platform = %self.collaborators.publisher().platform_name()))]
    pub async fn run(mut self) -> CrierResult<()> {
        info!("publish cycle started");

        loop {
            let outcome = match self.run_once().await {
                Ok(outcome) => outcome,
                Err(e) if e.class() == ErrorClass::Fatal => {
                    error!(error = %e, "unrecoverable error, stopping publish cycle");
                    return Err(e);
                }
                Err(e) => {
                    error!(error = %e, "cycle iteration failed");
                    self.metrics.record_publish_failure();
                    CycleOutcome::PublishFailed
                }
            };

            let delay = self.next_delay(&outcome)?;
            info!(delay_secs = delay.as_secs(), "next attempt scheduled");

            tokio::select! {
                _ = sleep(delay) => {}
                msg = self.rx.recv() => match msg {
                    Some(CycleMessage::PostNow) => {
                        info!("immediate post requested");
                    }
                    Some(CycleMessage::Shutdown) | None => {
                        info!("publish cycle shutting down");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Run a single iteration: select, generate, attach, publish.
    ///
    /// Generation and publish failures are folded into the returned
    /// [`CycleOutcome`]; only topic selection errors surface as `Err`.
    #[instrument(skip(self))]
    pub async fn run_once(&mut self) -> CrierResult<CycleOutcome> {
        self.metrics.record_cycle();
        self.last_attempt = Some(Utc::now());

        let topic = self
            .selector
            .select(self.collaborators.trends().as_ref(), &mut self.rng)
            .await?;

        let raw = match self.collaborators.text().generate(&topic).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                warn!(topic = %topic, "text generation returned nothing, skipping post");
                self.metrics.record_generation_failure();
                return Ok(CycleOutcome::GenerationFailed);
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "text generation failed, skipping post");
                self.metrics.record_generation_failure();
                return Ok(CycleOutcome::GenerationFailed);
            }
        };

        let post = self.composer.compose(&raw);
        debug!(chars = post.char_len(), "composed post");

        let media = match self.collaborators.images() {
            Some(provider) => match provider.find(&topic).await {
                Ok(media) => media,
                Err(e) => {
                    warn!(topic = %topic, error = %e, "image lookup failed, skipping post");
                    self.metrics.record_generation_failure();
                    return Ok(CycleOutcome::GenerationFailed);
                }
            },
            None => None,
        };

        match self
            .collaborators
            .publisher()
            .publish(&post, media.as_ref())
            .await
        {
            Ok(id) => {
                info!(post_id = %id, topic = %topic, "published");
                self.metrics.record_published();
                Ok(CycleOutcome::Published(id))
            }
            Err(e) => {
                error!(topic = %topic, error = %e, "publish failed");
                self.metrics.record_publish_failure();
                Ok(CycleOutcome::PublishFailed)
            }
        }
    }

    /// Suspend duration to apply after an iteration.
    ///
    /// Generation failures take the short fixed retry delay; everything else
    /// follows the schedule policy.
    pub fn next_delay(&mut self, outcome: &CycleOutcome) -> CrierResult<Duration> {
        match outcome {
            CycleOutcome::GenerationFailed => Ok(self.retry_delay),
            CycleOutcome::Published(_) | CycleOutcome::PublishFailed => {
                let now = Utc::now();
                let fire = self.policy.next_fire(now, &mut self.rng)?;
                Ok(fire.delay_from(now))
            }
        }
    }
}
