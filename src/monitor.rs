//! Channel monitor — the per-channel probe/send/wait loop.
//!
//! Each monitor runs `PROBING -> (LIVE_SENT | LIVE_NOSEND | NOT_LIVE |
//! FAILED) -> WAITING -> PROBING ...` forever. No failure escapes a cycle:
//! probe and send errors are folded into the `Failed` outcome, logged, and
//! answered with the error wait tier. The wait itself is interruptible by
//! the supervisor's shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::WaitTimes;
use crate::prober::Prober;
use crate::sender::Sender;
use crate::utils::random::RandomSource;

/// Classification of one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Channel was live and the message was accepted (HTTP 200).
    LiveSent { message: String },
    /// Channel was live but the send was rejected (non-200 status).
    /// Shares the inactive wait tier so a rejecting chat endpoint (e.g. a
    /// stale credential) is not hammered, while staying distinguishable
    /// from true inactivity in the logs.
    LiveNoSend,
    /// No active broadcast (or no resolvable chatroom id).
    NotLive,
    /// Probe or send failed at the transport level.
    Failed { error: String },
}

/// One monitor per configured channel entry. Owns nothing shared except
/// the read-only configuration values it was constructed with.
pub struct ChannelMonitor<P, S> {
    channel: String,
    prober: P,
    sender: S,
    wait_times: WaitTimes,
    random: Arc<dyn RandomSource>,
    shutdown: watch::Receiver<bool>,
}

impl<P: Prober, S: Sender> ChannelMonitor<P, S> {
    pub fn new(
        channel: String,
        prober: P,
        sender: S,
        wait_times: WaitTimes,
        random: Arc<dyn RandomSource>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            channel,
            prober,
            sender,
            wait_times,
            random,
            shutdown,
        }
    }

    /// Run one probe/send cycle and compute the wait that follows it.
    ///
    /// Never returns an error: every failure becomes `Failed`.
    pub async fn run_cycle(&self) -> (CycleOutcome, u64) {
        let outcome = match self.prober.probe(&self.channel).await {
            Err(e) => CycleOutcome::Failed {
                error: e.to_string(),
            },
            Ok(probe) => match probe.chatroom_id {
                None => CycleOutcome::NotLive,
                Some(chatroom_id) => match self.sender.send(&chatroom_id).await {
                    Err(e) => CycleOutcome::Failed {
                        error: e.to_string(),
                    },
                    Ok(result) if result.sent => CycleOutcome::LiveSent {
                        message: result.chosen_message.unwrap_or_default(),
                    },
                    Ok(_) => CycleOutcome::LiveNoSend,
                },
            },
        };

        let wait_secs = self.wait_for(&outcome);
        (outcome, wait_secs)
    }

    /// Deterministic tier mapping; only the active tier draws a random value.
    fn wait_for(&self, outcome: &CycleOutcome) -> u64 {
        match outcome {
            CycleOutcome::LiveSent { .. } => {
                let active = &self.wait_times.livestream_active;
                self.random.wait_secs(active.min, active.max)
            }
            CycleOutcome::NotLive | CycleOutcome::LiveNoSend => {
                self.wait_times.livestream_inactive
            }
            CycleOutcome::Failed { .. } => self.wait_times.error_wait,
        }
    }

    /// Emit the per-cycle status line (stdout, `HH:MM:SS` stamp) and its
    /// structured tracing mirror.
    fn report(&self, outcome: &CycleOutcome, wait_secs: u64) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        match outcome {
            CycleOutcome::LiveSent { message } => {
                println!(
                    "[{}] {}: sent \"{}\" | waiting {}s",
                    stamp, self.channel, message, wait_secs
                );
                info!(channel = %self.channel, message, wait_secs, "message sent");
            }
            CycleOutcome::LiveNoSend => {
                println!(
                    "[{}] {}: live, send rejected | waiting {}s",
                    stamp, self.channel, wait_secs
                );
                warn!(channel = %self.channel, wait_secs, "send rejected");
            }
            CycleOutcome::NotLive => {
                println!(
                    "[{}] {}: stream offline | waiting {}s",
                    stamp, self.channel, wait_secs
                );
                info!(channel = %self.channel, wait_secs, "stream offline");
            }
            CycleOutcome::Failed { error } => {
                println!(
                    "[{}] {}: error: {} | waiting {}s",
                    stamp, self.channel, error, wait_secs
                );
                warn!(channel = %self.channel, error = %error, wait_secs, "cycle failed");
            }
        }
    }

    /// Monitor loop. Runs until the shutdown signal flips; cycles within
    /// one channel are strictly sequential.
    pub async fn run(mut self) {
        println!("Monitoring channel: {}", self.channel);
        info!(channel = %self.channel, "monitor started");

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            let (outcome, wait_secs) = self.run_cycle().await;
            self.report(&outcome, wait_secs);

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(wait_secs)) => {}
                changed = self.shutdown.changed() => {
                    // A dropped sender counts as shutdown.
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!(channel = %self.channel, "monitor stopped");
    }
}
