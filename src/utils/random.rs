//! Injectable randomness for the monitor loops.
//!
//! Three decisions are randomized at runtime: which message to send, how
//! long to wait after a successful send, and the per-send `message_ref`.
//! They sit behind [`RandomSource`] so tests can script exact values and
//! assert boundary behavior.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// `message_ref` value space: 13-digit decimal integers. Wide enough that
/// repeated sends never reuse a reference in practice.
const MESSAGE_REF_MIN: u64 = 1_000_000_000_000;
const MESSAGE_REF_MAX: u64 = 9_999_999_999_999;

/// Source of the random decisions made per monitor cycle.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `[0, len)`. `len` is always > 0 (the message pool
    /// is validated non-empty).
    fn pick_index(&self, len: usize) -> usize;

    /// Uniform integer in `[min, max]` inclusive.
    fn wait_secs(&self, min: u64, max: u64) -> u64;

    /// Fresh numeric reference string for one send.
    fn message_ref(&self) -> String;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn wait_secs(&self, min: u64, max: u64) -> u64 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn message_ref(&self) -> String {
        rand::thread_rng()
            .gen_range(MESSAGE_REF_MIN..=MESSAGE_REF_MAX)
            .to_string()
    }
}

/// Deterministic source that replays scripted values; used by tests.
///
/// `pick_index` pops from `indices`, `wait_secs` pops from `waits`; when a
/// queue runs dry the source falls back to `0` / `min`.
#[derive(Debug, Default)]
pub struct SequenceSource {
    indices: Mutex<VecDeque<usize>>,
    waits: Mutex<VecDeque<u64>>,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>, waits: Vec<u64>) -> Self {
        Self {
            indices: Mutex::new(indices.into()),
            waits: Mutex::new(waits.into()),
        }
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&self, len: usize) -> usize {
        let scripted = self
            .indices
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(0);
        scripted.min(len.saturating_sub(1))
    }

    fn wait_secs(&self, min: u64, max: u64) -> u64 {
        let scripted = self
            .waits
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(min);
        scripted.clamp(min, max)
    }

    fn message_ref(&self) -> String {
        MESSAGE_REF_MIN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_pick_index_in_range() {
        let source = ThreadRngSource;
        for _ in 0..100 {
            assert!(source.pick_index(7) < 7);
        }
        assert_eq!(source.pick_index(1), 0);
    }

    #[test]
    fn test_thread_rng_wait_secs_inclusive_bounds() {
        let source = ThreadRngSource;
        for _ in 0..100 {
            let w = source.wait_secs(60, 120);
            assert!((60..=120).contains(&w));
        }
        // Degenerate range still works.
        assert_eq!(source.wait_secs(5, 5), 5);
    }

    #[test]
    fn test_thread_rng_message_ref_is_13_digits() {
        let source = ThreadRngSource;
        for _ in 0..100 {
            let r = source.message_ref();
            assert_eq!(r.len(), 13);
            assert!(r.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_sequence_source_replays_values() {
        let source = SequenceSource::new(vec![2, 0], vec![60, 120]);
        assert_eq!(source.pick_index(5), 2);
        assert_eq!(source.pick_index(5), 0);
        assert_eq!(source.wait_secs(60, 120), 60);
        assert_eq!(source.wait_secs(60, 120), 120);
    }

    #[test]
    fn test_sequence_source_clamps_and_defaults() {
        let source = SequenceSource::new(vec![99], vec![999]);
        // Out-of-range scripted values are pulled into the valid range.
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.wait_secs(10, 20), 20);
        // Dry queues fall back to the low end.
        assert_eq!(source.pick_index(3), 0);
        assert_eq!(source.wait_secs(10, 20), 10);
    }
}
