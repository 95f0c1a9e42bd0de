//! Publish cycle for the crier posting bot.
//!
//! Ties the workspace together: select a topic, obtain copy from the text
//! generator, optionally attach an image, publish, then suspend until the
//! schedule policy's next fire time. Every collaborator failure is isolated
//! to its iteration; the loop only stops on shutdown or when no topic
//! source is left at all.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cycle;
mod metrics;
mod selector;

pub use config::{
    BotConfig, BotSettings, ComposeConfig, GenerationConfig, ImagesConfig, PublishConfig,
    PublishPlatform, TopicsConfig,
};
pub use cycle::{
    Collaborators, CollaboratorsBuilder, CollaboratorsBuilderError, CycleMessage, CycleOutcome,
    PublishCycle,
};
pub use metrics::{CycleMetrics, MetricsSnapshot};
pub use selector::TopicSelector;
