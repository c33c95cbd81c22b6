//! Timeout helpers for the blocking read loop.

use std::time::{Duration, Instant};

/// Overall deadline for a response, in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

/// Interval between `bytes_waiting` polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Pause before the second read pass that picks up a trailing burst.
pub const DEFAULT_BURST_DELAY_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// A fixed point in time after which a wait gives up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Time left, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }
}
