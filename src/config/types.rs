//! Configuration type definitions for kickpulse.
//!
//! All types implement serde traits for JSON serialization. The config is
//! immutable after load + validation; monitors share it read-only.

use serde::{Deserialize, Serialize};

/// Main configuration struct for kickpulse.
///
/// Matches the on-disk `config.json` shape:
///
/// ```json
/// {
///   "channels": ["somechannel"],
///   "authorization": "Bearer eyJ...",
///   "messages": ["[emote:1730772:emojiFire]", "hi chat"],
///   "wait_times": {
///     "livestream_active": { "min": 60, "max": 120 },
///     "livestream_inactive": 300,
///     "error_wait": 30
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Channel slugs to monitor. Duplicates are permitted and get one
    /// monitor each.
    pub channels: Vec<String>,
    /// Bearer credential attached to every send, verbatim
    /// (`"Bearer <token>"`).
    pub authorization: String,
    /// Message pool; one entry is chosen uniformly at random per send.
    pub messages: Vec<String>,
    /// Wait durations for the three monitor outcomes.
    pub wait_times: WaitTimes,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Wait durations (seconds) selected by the monitor after each cycle.
///
/// Defaults are intentionally zero: a config that omits a wait time fails
/// validation instead of silently running with a made-up cadence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitTimes {
    /// Range for the randomized wait after a successful send.
    pub livestream_active: ActiveWait,
    /// Fixed wait when the channel is offline or a send was rejected.
    pub livestream_inactive: u64,
    /// Fixed wait after a transport failure while probing or sending.
    pub error_wait: u64,
}

/// Closed interval `[min, max]` for the post-send wait, in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveWait {
    pub min: u64,
    pub max: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format: "component" (default), "pretty", or "json".
    pub format: LogFormat,
    /// Optional log file path. Logs to stderr if unset.
    pub file: Option<String>,
    /// Default level filter when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Component,
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact `[timestamp] [LEVEL] target message` lines.
    Component,
    /// tracing's pretty printer.
    Pretty,
    /// Structured JSON lines for log aggregators.
    Json,
}
