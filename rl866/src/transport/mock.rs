// rl866/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::transport::traits::Transport;
use crate::{ProtocolError, Result};

#[derive(Debug, Default)]
struct Wire {
    /// Replies armed for future writes, one per write, each as read chunks.
    replies: VecDeque<Vec<Vec<u8>>>,
    /// Chunks currently "in the driver buffer", one per read_available.
    inbound: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
    /// bytes_waiting calls that report 0 before inbound data shows up
    silent_polls: usize,
    write_failures: usize,
    resets: usize,
}

/// Mock transport for unit tests. It records written frames and answers
/// each write with the next queued reply.
///
/// Clones share one simulated wire, so a test can keep a handle for
/// inspection after the session has taken ownership of another clone.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    wire: Arc<Mutex<Wire>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn wire(&self) -> MutexGuard<'_, Wire> {
        // recover the wire from a panicked test thread
        self.wire.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a reply delivered in one read after the next write.
    pub fn push_reply(&self, reply: Vec<u8>) {
        self.wire().replies.push_back(vec![reply]);
    }

    /// Queue a reply that arrives as two separate bursts.
    pub fn push_split_reply(&self, first: Vec<u8>, second: Vec<u8>) {
        self.wire().replies.push_back(vec![first, second]);
    }

    /// Queue a write that gets no answer at all.
    pub fn push_silence(&self) {
        self.wire().replies.push_back(Vec::new());
    }

    /// Bytes that arrive without having been asked for.
    pub fn push_unsolicited(&self, bytes: Vec<u8>) {
        self.wire().inbound.push_back(bytes);
    }

    /// Make the next `n` polls report an empty buffer.
    pub fn set_silent_polls(&self, n: usize) {
        self.wire().silent_polls = n;
    }

    /// Make the next `n` writes fail with an I/O error.
    pub fn set_write_failures(&self, n: usize) {
        self.wire().write_failures = n;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.wire().sent.clone()
    }

    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.wire().sent.last().cloned()
    }

    pub fn reset_count(&self) -> usize {
        self.wire().resets
    }

    pub fn pending_replies(&self) -> usize {
        self.wire().replies.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let mut wire = self.wire();
        if wire.write_failures > 0 {
            wire.write_failures -= 1;
            return Err(ProtocolError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock write failure",
            )));
        }
        wire.sent.push(data.to_vec());
        if let Some(chunks) = wire.replies.pop_front() {
            wire.inbound.extend(chunks);
        }
        Ok(data.len())
    }

    fn read_available(&mut self) -> Result<Vec<u8>> {
        Ok(self.wire().inbound.pop_front().unwrap_or_default())
    }

    fn bytes_waiting(&mut self) -> Result<usize> {
        let mut wire = self.wire();
        if wire.silent_polls > 0 {
            wire.silent_polls -= 1;
            return Ok(0);
        }
        Ok(wire.inbound.front().map_or(0, Vec::len))
    }

    fn reset(&mut self) -> Result<()> {
        // Armed replies survive so tests can pre-seed answers before the
        // session discards stale input.
        let mut wire = self.wire();
        wire.inbound.clear();
        wire.resets += 1;
        Ok(())
    }
}
