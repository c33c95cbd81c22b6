// rl866/src/transport/reader.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::debug;
#[cfg(feature = "diagnostics")]
use log::trace;

use crate::transport::traits::Transport;
use crate::utils::{
    DEFAULT_BURST_DELAY_MS, DEFAULT_POLL_INTERVAL_MS, Deadline, HexDump, default_read_timeout, ms,
};
use crate::{ProtocolError, Result};

/// Timing of the blocking response read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadPolicy {
    /// Overall deadline for the first byte to show up.
    pub timeout: Duration,
    pub poll_interval: Duration,
    /// Wait before the second read that collects a trailing burst.
    pub burst_delay: Duration,
}

impl Default for ReadPolicy {
    fn default() -> Self {
        Self {
            timeout: default_read_timeout(),
            poll_interval: ms(DEFAULT_POLL_INTERVAL_MS),
            burst_delay: ms(DEFAULT_BURST_DELAY_MS),
        }
    }
}

/// Shared flag that aborts a blocking read from another thread.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal(Arc<AtomicBool>);

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Re-arm after a shutdown was handled.
    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Block until a response arrives, the policy's deadline passes, or
/// `shutdown` is triggered.
///
/// The reader may split one response across two driver reads, so after the
/// first burst the loop waits `burst_delay` and picks up whatever followed.
pub fn read_response(
    transport: &mut dyn Transport,
    policy: &ReadPolicy,
    shutdown: &ShutdownSignal,
) -> Result<Vec<u8>> {
    let deadline = Deadline::after(policy.timeout);

    loop {
        if shutdown.is_triggered() {
            return Err(ProtocolError::Cancelled);
        }
        if transport.bytes_waiting()? > 0 {
            break;
        }
        if deadline.expired() {
            debug!("no response within {:?}", policy.timeout);
            return Err(ProtocolError::Timeout);
        }
        thread::sleep(policy.poll_interval.min(deadline.remaining()));
    }

    let mut buf = transport.read_available()?;
    #[cfg(feature = "diagnostics")]
    trace!("rx burst 1: {}", HexDump(&buf));

    thread::sleep(policy.burst_delay);
    if transport.bytes_waiting()? > 0 {
        let tail = transport.read_available()?;
        #[cfg(feature = "diagnostics")]
        trace!("rx burst 2: {}", HexDump(&tail));
        buf.extend_from_slice(&tail);
    }

    debug!("rx {}", HexDump(&buf));
    Ok(buf)
}
