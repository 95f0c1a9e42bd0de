//! Crier binary: long-running scheduled posting bot.
//!
//! Loads configuration, wires up the collaborators, verifies the publisher
//! connection once, and runs the publish cycle until Ctrl+C.

use clap::Parser;
use crier_bot::{
    BotConfig, Collaborators, CollaboratorsBuilder, CycleMessage, PublishCycle, PublishPlatform,
};
use crier_core::PromptLibrary;
use crier_error::{ConfigError, CrierResult};
use crier_interface::{ImageProvider, Publisher, TrendSource};
use crier_providers::{
    DirectoryImageProvider, HttpTrendSource, NoOpPublisher, NoOpTrendSource, OllamaGenerator,
    WebhookPublisher,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the crier bot.
#[derive(Parser, Debug)]
#[command(name = "crier")]
#[command(about = "Crier - scheduled social posting bot")]
#[command(version)]
struct Args {
    /// Path to bot configuration file
    #[arg(short, long, default_value = "crier.toml")]
    config: PathBuf,

    /// Webhook URL (overrides the config file)
    #[arg(long, env = "CRIER_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Log posts instead of publishing them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let _ = dotenvy::dotenv();
    let args = Args::parse();
    info!(config_file = ?args.config, "starting crier");

    let config = BotConfig::from_file(&args.config)?;
    for warning in config.validate() {
        warn!(%warning, "configuration warning");
    }

    let collaborators = wire_collaborators(&config, &args)?;

    let publisher = Arc::clone(collaborators.publisher());
    info!(platform = %publisher.platform_name(), "verifying publisher connection");
    publisher.verify().await?;

    let (tx, rx) = mpsc::channel(8);
    let cycle = PublishCycle::new(&config, collaborators, rx)?;
    let metrics = cycle.metrics();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received ctrl-c, shutting down");
            let _ = tx.send(CycleMessage::Shutdown).await;
        }
    });

    let result = cycle.run().await;
    info!(snapshot = ?metrics.snapshot(), "final metrics");
    result?;
    Ok(())
}

/// Build the collaborator handles from configuration and flags.
fn wire_collaborators(config: &BotConfig, args: &Args) -> CrierResult<Collaborators> {
    let prompts = PromptLibrary::new(config.generation.prompts.clone(), config.compose.max_len);
    let generator = OllamaGenerator::new(
        config.generation.endpoint.clone(),
        config.generation.model.clone(),
        prompts,
    );

    let trends: Arc<dyn TrendSource> = match &config.topics.trend_url {
        Some(url) => Arc::new(HttpTrendSource::new(url.clone())),
        None => Arc::new(NoOpTrendSource),
    };

    let publisher: Arc<dyn Publisher> = if args.dry_run {
        info!("dry run: posts will be logged, not published");
        Arc::new(NoOpPublisher::new())
    } else {
        match config.publish.platform {
            PublishPlatform::Noop => Arc::new(NoOpPublisher::new()),
            PublishPlatform::Webhook => {
                let url = args
                    .webhook_url
                    .clone()
                    .or_else(|| config.publish.webhook_url.clone())
                    .ok_or_else(|| {
                        ConfigError::new(
                            "publish platform is webhook but no webhook URL is configured",
                        )
                    })?;
                Arc::new(WebhookPublisher::new(url))
            }
        }
    };

    let mut builder = CollaboratorsBuilder::default();
    builder
        .text(Arc::new(generator))
        .trends(trends)
        .publisher(publisher);

    if let Some(images) = &config.images {
        let provider: Arc<dyn ImageProvider> =
            Arc::new(DirectoryImageProvider::new(images.dir.clone()));
        builder.images(Some(provider));
    }

    builder
        .build()
        .map_err(|e| ConfigError::new(format!("collaborator wiring incomplete: {e}")).into())
}
