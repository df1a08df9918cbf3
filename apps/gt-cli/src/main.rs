//! # gt-cli
//!
//! Command-line interface for the goal tracker.
//!
//! Drives the synchronizer against a remote goal store:
//! - `goals list` — show the current goal collection
//! - `goals add <text>` — create a goal and show the updated list
//! - `goals delete <id>` — delete a goal by id and show the updated list
//!
//! The store base URL is resolved from `--base-url`, then the
//! `GOALS_BASE_URL` environment variable, then a `goals.toml` config file.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use gt_client::GoalStoreClient;
use gt_sync::Synchronizer;

/// Goal tracker CLI — list, add, and delete goals on a remote store.
#[derive(Parser)]
#[command(name = "goals", version, about)]
struct Cli {
    /// Base URL of the remote goal store (overrides env and config file).
    #[arg(long)]
    base_url: Option<Url>,

    /// Path to a config file (defaults to ./goals.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all goals.
    List,
    /// Add a new goal.
    Add {
        /// Goal text (e.g., "Run 5k").
        text: String,
    },
    /// Delete a goal by id.
    Delete {
        /// Goal id as shown by `goals list`.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let base_url = config::resolve_base_url(
        cli.base_url,
        std::env::var("GOALS_BASE_URL").ok(),
        cli.config.as_deref(),
    )?;

    tracing::debug!(%base_url, "using goal store");
    let sync = Synchronizer::new(GoalStoreClient::new(base_url));

    match &cli.command {
        Commands::List => commands::goals::list(&sync).await,
        Commands::Add { text } => commands::goals::add(&sync, text).await,
        Commands::Delete { id } => commands::goals::delete(&sync, *id).await,
    }
}
