//! rnoh-notify - developer CLI for the push-notification adapter.
//!
//! Subcommands:
//! - translate: one bridge request (JSON) → native request (JSON)
//! - simulate: a JSON array of bridge requests pushed through the bridge into
//!   an in-memory notification center, then the delivered list is printed

use clap::{Parser, Subcommand};
use rnoh_push_notifications::native::MemoryNotificationCenter;
use rnoh_push_notifications::{
    Config, InboundNotificationRequest, NotificationBridge, RequestTranslator,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "rnoh-notify", version, about = "Translate and simulate push notification requests")]
struct Cli {
    /// JSON configuration file.
    #[arg(long, env = "RNOH_NOTIFY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate a single request and print the native request.
    Translate {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
    /// Publish a list of requests into an in-memory center.
    Simulate {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
}

async fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(input).await
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Initialize observability
    rnoh_push_notifications::observability::init_tracing_with(&config.observability);

    match cli.command {
        Command::Translate { input } => {
            let raw = read_input(&input).await?;
            let request: InboundNotificationRequest = serde_json::from_str(&raw)?;
            let normalized = RequestTranslator::new(config.translation).translate(&request)?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
        }
        Command::Simulate { input } => {
            let raw = read_input(&input).await?;
            let requests: Vec<InboundNotificationRequest> = serde_json::from_str(&raw)?;

            let center = Arc::new(MemoryNotificationCenter::new());
            let bridge = NotificationBridge::from_config(Arc::clone(&center), &config);

            for (index, request) in requests.iter().enumerate() {
                match bridge.add_notification_request(request) {
                    Ok(handle) => handle.await?,
                    Err(err) => tracing::warn!("Skipping request #{}: {}", index, err),
                }
            }

            let delivered = bridge.get_delivered_notifications().await;
            tracing::info!("Simulated {} requests, {} delivered", requests.len(), delivered.len());

            let report = serde_json::json!({
                "delivered": delivered,
                "badgeNumber": center.badge_number().await,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
