//! Crier, a scheduled social posting bot.
//!
//! Crier periodically selects a topic, asks a generative-text collaborator
//! for short promotional copy, optionally attaches an image, and publishes
//! the result, then sleeps until the schedule policy's next fire time and
//! repeats, indefinitely.
//!
//! # Architecture
//!
//! The workspace is organized as focused crates:
//!
//! - `crier_error` - Error types
//! - `crier_core` - Core data types and the post composer
//! - `crier_interface` - Collaborator traits
//! - `crier_schedule` - Posting cadence policy
//! - `crier_providers` - Bundled collaborator implementations
//! - `crier_bot` - Configuration, topic selection, and the publish cycle
//!
//! This crate (`crier`) re-exports everything for convenience and carries
//! the `crier` binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crier::{
//!     BotConfig, CollaboratorsBuilder, NoOpPublisher, NoOpTrendSource, OllamaGenerator,
//!     PromptLibrary, PublishCycle,
//! };
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_file("crier.toml")?;
//!     let prompts = PromptLibrary::new(config.generation.prompts.clone(), config.compose.max_len);
//!
//!     let collaborators = CollaboratorsBuilder::default()
//!         .text(Arc::new(OllamaGenerator::new(
//!             config.generation.endpoint.clone(),
//!             config.generation.model.clone(),
//!             prompts,
//!         )))
//!         .trends(Arc::new(NoOpTrendSource))
//!         .publisher(Arc::new(NoOpPublisher::new()))
//!         .build()?;
//!
//!     let (_tx, rx) = mpsc::channel(8);
//!     PublishCycle::new(&config, collaborators, rx)?.run().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use crier_bot::{
    BotConfig, BotSettings, Collaborators, CollaboratorsBuilder, CollaboratorsBuilderError,
    ComposeConfig, CycleMessage, CycleMetrics, CycleOutcome, GenerationConfig, ImagesConfig,
    MetricsSnapshot, PublishConfig, PublishCycle, PublishPlatform, TopicSelector, TopicsConfig,
};
pub use crier_core::{MediaRef, Post, PostComposer, PromptLibrary, Topic};
pub use crier_error::{
    ConfigError, CrierError, CrierErrorKind, CrierResult, ErrorClass, GenerationError,
    PublishError, ScheduleError, TrendError,
};
pub use crier_interface::{ImageProvider, PostId, Publisher, TextGenerator, TrendSource};
pub use crier_providers::{
    DirectoryImageProvider, HttpTrendSource, NoOpPublisher, NoOpTrendSource, OllamaGenerator,
    WebhookPublisher,
};
pub use crier_schedule::{IntervalSchedule, NextFire, SchedulePolicy, ScheduleConfig, WindowSchedule};
