//! Supervisor — spawns one monitor task per configured channel and keeps
//! the process alive until Ctrl+C.
//!
//! Monitors are fire-and-forget: the supervisor never joins on them and
//! one channel's failures or timing never affect another. Shutdown is
//! cooperative through a watch channel; in-flight cycles are abandoned
//! (each send is independent, so nothing needs draining).

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::client;
use crate::config::Config;
use crate::error::Result;
use crate::monitor::ChannelMonitor;
use crate::prober::KickProber;
use crate::sender::KickSender;
use crate::utils::random::{RandomSource, ThreadRngSource};

/// Spawn one monitor per channel entry. Duplicate entries get duplicate
/// monitors, matching the config verbatim.
fn spawn_monitors(
    config: &Config,
    http: &reqwest::Client,
    random: &Arc<dyn RandomSource>,
    shutdown: &watch::Receiver<bool>,
) {
    for channel in &config.channels {
        let prober = KickProber::new(http.clone());
        let sender = KickSender::new(
            http.clone(),
            config.authorization.clone(),
            config.messages.clone(),
            Arc::clone(random),
        );
        let monitor = ChannelMonitor::new(
            channel.clone(),
            prober,
            sender,
            config.wait_times.clone(),
            Arc::clone(random),
            shutdown.clone(),
        );
        tokio::spawn(monitor.run());
    }
}

/// Run the supervisor until an interrupt signal arrives.
///
/// The configuration is expected to be validated by the caller; the
/// invariants are re-checked here so a monitor can never start against
/// bad values.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let http = client::build_client()?;
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRngSource);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    println!("Monitoring {} channel(s)...", config.channels.len());
    println!("Press Ctrl+C to stop");
    println!("{}", "=".repeat(60));

    spawn_monitors(&config, &http, &random, &shutdown_rx);
    info!(channels = config.channels.len(), "all monitors started");

    tokio::signal::ctrl_c().await?;

    let _ = shutdown_tx.send(true);
    println!();
    println!("{}", "=".repeat(60));
    println!("Shutting down...");
    info!("interrupt received, stopping monitors");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActiveWait, LoggingConfig, WaitTimes};

    fn config_with_channels(channels: Vec<String>) -> Config {
        Config {
            channels,
            authorization: "Bearer token".into(),
            messages: vec!["hi".into()],
            wait_times: WaitTimes {
                livestream_active: ActiveWait { min: 60, max: 120 },
                livestream_inactive: 300,
                error_wait: 30,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let config = config_with_channels(vec![]);
        let err = run(config).await.unwrap_err();
        assert!(err.to_string().contains("channels"));
    }

    #[tokio::test]
    async fn test_spawn_monitors_accepts_duplicates() {
        // Spawning must not panic or dedupe; the tasks park on their first
        // probe against an unreachable host and die with the runtime.
        let config = config_with_channels(vec!["same".into(), "same".into()]);
        let http = client::build_client().unwrap();
        let random: Arc<dyn RandomSource> = Arc::new(ThreadRngSource);
        let (_tx, rx) = watch::channel(false);
        spawn_monitors(&config, &http, &random, &rx);
    }
}
