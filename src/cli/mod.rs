//! CLI module — command parsing and dispatch
//!
//! All CLI logic lives here. `main.rs` calls `cli::run()`.

pub mod common;
pub mod config;
pub mod onboard;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kickpulse")]
#[command(version)]
#[command(about = "Keeps a chat presence on live Kick.com channels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start monitoring the configured channels (default)
    Run {
        /// Config file path (default: ~/.kickpulse/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Create a configuration interactively
    Onboard,
    /// Validate configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Check configuration for errors and warnings
    Check {
        /// Config file path (default: ~/.kickpulse/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI — called from main().
pub async fn run() -> Result<()> {
    // Initialize logging from config; fall back to defaults if the config
    // file is missing or unreadable.
    let logging_cfg = kickpulse::Config::load_from_path(&kickpulse::Config::path())
        .map(|c| c.logging)
        .unwrap_or_default();
    kickpulse::utils::logging::init_logging(&logging_cfg);

    let cli = Cli::parse();

    match cli.command {
        // Bare `kickpulse` starts monitoring, like the run subcommand.
        None => {
            run::cmd_run(None).await?;
        }
        Some(Commands::Run { config }) => {
            run::cmd_run(config).await?;
        }
        Some(Commands::Onboard) => {
            onboard::cmd_onboard().await?;
        }
        Some(Commands::Config { action }) => {
            config::cmd_config(action).await?;
        }
        Some(Commands::Version) => {
            cmd_version();
        }
    }

    Ok(())
}

/// Display version information
fn cmd_version() {
    println!("kickpulse {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Keeps a chat presence on live Kick.com channels");
    println!("https://github.com/kickpulse/kickpulse");
}
