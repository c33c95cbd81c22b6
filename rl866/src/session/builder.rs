// rl866/src/session/builder.rs

use std::time::Duration;

use crate::protocol::SequenceCheck;
use crate::session::config::SessionConfig;
use crate::session::handle::{Session, Synchronized, Unsynchronized};
use crate::transport::{ReadPolicy, ShutdownSignal, Transport};
use crate::types::ResourceId;
use crate::{ProtocolError, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
    shutdown: Option<ShutdownSignal>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port at the reader's default line settings.
    #[cfg(feature = "serial")]
    pub fn with_serial_port(self, path: &str) -> Result<Self> {
        let port = crate::transport::SerialTransport::open(path)?;
        Ok(self.with_transport(Box::new(port)))
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resource_id(mut self, rid: ResourceId) -> Self {
        self.config.resource_id = rid;
        self
    }

    pub fn initial_sequence(mut self, raw: u8) -> Self {
        self.config.initial_sequence = raw;
        self
    }

    pub fn read_policy(mut self, policy: ReadPolicy) -> Self {
        self.config.read_policy = policy;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_policy.timeout = timeout;
        self
    }

    pub fn sequence_check(mut self, check: SequenceCheck) -> Self {
        self.config.sequence_check = check;
        self
    }

    pub fn max_inventory_rounds(mut self, rounds: usize) -> Self {
        self.config.max_inventory_rounds = rounds;
        self
    }

    /// Share an existing shutdown flag instead of creating a fresh one.
    pub fn shutdown_signal(mut self, signal: ShutdownSignal) -> Self {
        self.shutdown = Some(signal);
        self
    }

    /// Consume the builder and return a session that has not talked to the
    /// reader yet. Fails when no transport was provided.
    pub fn build_unsynchronized(self) -> Result<Session<Unsynchronized>> {
        let transport = self
            .transport
            .ok_or_else(|| ProtocolError::InvalidParameter("no transport configured".into()))?;
        let mut session = Session::new(transport, self.config);
        if let Some(signal) = self.shutdown {
            session.set_shutdown_signal(signal);
        }
        Ok(session)
    }

    /// Build and run the resync exchange.
    pub fn build(self) -> Result<Session<Synchronized>> {
        self.build_unsynchronized()?.resynchronize()
    }
}
