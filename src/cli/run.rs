//! Run command — load, validate, and supervise the channel monitors.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use kickpulse::{supervisor, Config};

use super::common::resolve_config_path;

pub(crate) async fn cmd_run(config_flag: Option<PathBuf>) -> Result<()> {
    println!("kickpulse — Kick.com chat presence");
    println!("{}", "=".repeat(60));

    let path = resolve_config_path(config_flag);
    if !path.exists() {
        bail!(
            "Config file not found: {}\nRun 'kickpulse onboard' to create one interactively.",
            path.display()
        );
    }

    let config = Config::load_from_path(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config at {}", path.display()))?;

    supervisor::run(config).await?;

    println!("Goodbye!");
    Ok(())
}
