//! Logging initialization for kickpulse.
//!
//! Supports three formats:
//! - `component`: compact `[timestamp] [LEVEL] target message` lines (default)
//! - `pretty`: default tracing pretty-print
//! - `json`: structured JSON lines for log aggregators
//!
//! Per-cycle channel status lines go to stdout regardless; tracing carries
//! the structured mirror of them plus everything else.

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber from config.
///
/// Call this once at startup before any tracing events are emitted.
/// Falls back to the `RUST_LOG` env var; if unset, uses `cfg.level`.
pub fn init_logging(cfg: &LoggingConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    match cfg.format {
        LogFormat::Json => {
            if let Some(path) = &cfg.file {
                match std::fs::OpenOptions::new().create(true).append(true).open(path) {
                    Ok(file) => {
                        tracing_subscriber::fmt()
                            .json()
                            .with_env_filter(filter)
                            .with_writer(move || file.try_clone().expect("file writer"))
                            .init();
                    }
                    Err(e) => {
                        eprintln!("Failed to open log file {}: {} — logging to stderr", path, e);
                        tracing_subscriber::fmt().json().with_env_filter(filter).init();
                    }
                }
            } else {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .pretty()
                .init();
        }
        LogFormat::Component => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .compact()
                .init();
        }
    }
}
