//! Bundled collaborator implementations for the crier posting bot.
//!
//! Thin wrappers over external services, each implementing one
//! `crier_interface` trait: a local Ollama chat generator, an HTTP trending
//! feed, a directory-scan image lookup, a webhook publisher, and a no-op
//! publisher for dry runs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod images;
mod noop;
mod ollama;
mod trends;
mod webhook;

pub use images::DirectoryImageProvider;
pub use noop::{NoOpPublisher, NoOpTrendSource};
pub use ollama::OllamaGenerator;
pub use trends::HttpTrendSource;
pub use webhook::WebhookPublisher;
