use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// A CLI for interacting with the Jules API.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// API key; falls back to the JULES_API_KEY environment variable
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage sources
    Sources {
        #[command(subcommand)]
        command: commands::sources::SourcesCommand,
    },
    /// Manage sessions
    Sessions {
        #[command(subcommand)]
        command: commands::sessions::SessionsCommand,
    },
    /// Manage activities
    Activities {
        #[command(subcommand)]
        command: commands::activities::ActivitiesCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key = jules_api::auth::resolve_api_key_from_env(cli.api_key.clone())?;
    let mut config = jules_api::Config::new(api_key);
    if let Some(base_url) = &cli.api_base_url {
        config = config.with_api_base_url(base_url.clone());
    }
    tracing::debug!(api_base_url = %config.api_base_url, "building client");
    let client = jules_api::JulesClient::new(config).context("failed to build client")?;

    match &cli.command {
        Commands::Sources { command } => {
            commands::sources::handle_sources_command(command, &client, &cli.format).await?
        }
        Commands::Sessions { command } => {
            commands::sessions::handle_sessions_command(command, &client, &cli.format).await?
        }
        Commands::Activities { command } => {
            commands::activities::handle_activities_command(command, &client, &cli.format).await?
        }
    }

    Ok(())
}
