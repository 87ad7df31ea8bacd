//! kickpulse — keeps a chat presence on live Kick.com channels.
//!
//! For every configured channel an independent monitor probes liveness,
//! posts a random message from the pool when the stream is up, and sleeps
//! one of three configured wait tiers depending on the outcome.

pub mod client;
pub mod config;
pub mod error;
pub mod monitor;
pub mod prober;
pub mod sender;
pub mod supervisor;
pub mod utils;

pub use config::Config;
pub use error::{PulseError, Result};
pub use monitor::{ChannelMonitor, CycleOutcome};
pub use prober::{KickProber, ProbeError, ProbeResult, Prober};
pub use sender::{KickSender, SendError, SendResult, Sender};
