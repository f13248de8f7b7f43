//! Per-username sliding-window rate limiter gating OPRF evaluation (C9).

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::{OSrpError, OSrpResult};

/// Sliding-window request counter, keyed by username.
///
/// The map is the only shared mutable state a [`crate::srp::SrpServer`]
/// holds; `check_and_record` is atomic per call under a single mutex, per
/// spec.md §5.
pub struct RateLimiter {
    window_ms: u64,
    max_requests: usize,
    entries: Mutex<HashMap<String, VecDeque<u64>>>,
}

impl RateLimiter {
    /// Builds a limiter allowing `max_requests` per `window_ms` per username.
    pub fn new(window_ms: u64, max_requests: usize) -> Self {
        Self {
            window_ms,
            max_requests,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Trims timestamps older than `now_ms - window_ms`, then admits the
    /// request if fewer than `max_requests` remain, recording `now_ms` on
    /// success. Never records on rejection.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn check_and_record(&self, username: &str, now_ms: u64) -> OSrpResult<()> {
        let cutoff = now_ms.saturating_sub(self.window_ms);
        let mut entries = self.entries.lock().expect("rate limiter mutex poisoned");
        let timestamps = entries.entry(username.to_string()).or_default();

        while matches!(timestamps.front(), Some(&t) if t < cutoff) {
            timestamps.pop_front();
        }

        if timestamps.len() >= self.max_requests {
            tracing::debug!(username, count = timestamps.len(), "oprf rate limit hit");
            if timestamps.is_empty() {
                entries.remove(username);
            }
            return Err(OSrpError::RateLimited);
        }

        timestamps.push_back(now_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_max_requests() {
        let limiter = RateLimiter::new(60_000, 3);
        for i in 0..3 {
            limiter.check_and_record("alice", 1_000 + i).unwrap();
        }
        assert_eq!(
            limiter.check_and_record("alice", 1_050),
            Err(OSrpError::RateLimited)
        );
    }

    #[test]
    fn window_resets_after_idle_period() {
        let limiter = RateLimiter::new(1_000, 2);
        limiter.check_and_record("bob", 0).unwrap();
        limiter.check_and_record("bob", 100).unwrap();
        assert_eq!(
            limiter.check_and_record("bob", 200),
            Err(OSrpError::RateLimited)
        );
        // A full window later, the budget has reset.
        limiter.check_and_record("bob", 1_300).unwrap();
    }

    #[test]
    fn usernames_are_independent() {
        let limiter = RateLimiter::new(60_000, 1);
        limiter.check_and_record("alice", 0).unwrap();
        limiter.check_and_record("bob", 0).unwrap();
        assert_eq!(
            limiter.check_and_record("alice", 1),
            Err(OSrpError::RateLimited)
        );
    }
}
