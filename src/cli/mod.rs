use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod auth;
pub mod init;
pub mod presentation;

use crate::core::AppConfig;
use presentation::PresentationArgs;

#[derive(Subcommand)]
enum Command {
    /// Create the document store tables
    Init {},
    /// Authorize access to Google Calendar and save the refresh token
    Auth {},
    /// Add a presentation to the presentations collection
    #[command(name = "a_presentation")]
    APresentation(PresentationArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let config = AppConfig::load()?;

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(config).await?;
        }
        Some(Command::Auth {}) => {
            auth::run(config).await?;
        }
        Some(Command::APresentation(presentation_args)) => {
            presentation::run(presentation_args, config).await?;
        }
        None => {}
    }

    Ok(())
}
