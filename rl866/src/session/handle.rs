// rl866/src/session/handle.rs

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::protocol::codec;
use crate::protocol::{
    Command, Frame, InventoryRequest, Response, SequenceState, StopReason, SystemConfiguration,
    TagInventoryResult, TagRecord,
};
use crate::session::config::SessionConfig;
use crate::transport::{ShutdownSignal, Transport, read_response};
use crate::types::{ConfigSource, ResourceId};
use crate::utils::HexDump;
use crate::{ProtocolError, Result};

/// Type-state markers
pub struct Unsynchronized;
pub struct Synchronized;

/// One reader session: owns the link and its sequence state.
///
/// I-Block traffic is only available once the resync exchange has
/// succeeded, which the type parameter enforces at compile time. A failure
/// that leaves the reader's sequence expectation unknown marks the session
/// as needing a resync; `execute` refuses to run until `resync` succeeds.
pub struct Session<State = Unsynchronized> {
    transport: Box<dyn Transport>,
    config: SessionConfig,
    sequence: SequenceState,
    shutdown: ShutdownSignal,
    desynchronized: bool,
    _state: PhantomData<State>,
}

impl<State> Session<State> {
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn resource_id(&self) -> ResourceId {
        self.config.resource_id
    }

    /// Snapshot of the sequence state the next request will use.
    pub fn sequence(&self) -> SequenceState {
        self.sequence
    }

    /// Handle that aborts a blocking read from another thread.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    pub(crate) fn set_shutdown_signal(&mut self, signal: ShutdownSignal) {
        self.shutdown = signal;
    }

    /// Whether a resync is owed before the next I-Block.
    pub fn needs_resync(&self) -> bool {
        self.desynchronized
    }

    fn into_state<Next>(self) -> Session<Next> {
        Session {
            transport: self.transport,
            config: self.config,
            sequence: self.sequence,
            shutdown: self.shutdown,
            desynchronized: self.desynchronized,
            _state: PhantomData,
        }
    }

    fn send(&mut self, frame: &Frame) -> Result<()> {
        let bytes = frame.serialize();
        debug!("tx {}", HexDump(&bytes));
        self.transport.write(&bytes)?;
        Ok(())
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        read_response(&mut *self.transport, &self.config.read_policy, &self.shutdown)
    }

    /// Discard stale input, send the S-Block and wait for its echo.
    fn exchange_resync(&mut self) -> Result<()> {
        let result = self.try_resync();
        self.desynchronized = result.is_err();
        result
    }

    fn try_resync(&mut self) -> Result<()> {
        self.transport.reset()?;
        let request = codec::build_resync(&mut self.sequence, self.config.resource_id);
        info!("resync rid {}", self.config.resource_id);
        self.send(&request)?;
        let bytes = self.receive()?;
        codec::decode_resync_response(&request, &bytes)?;
        Ok(())
    }
}

impl Session<Unsynchronized> {
    /// Create a Session from an existing Transport instance. Nothing is
    /// sent until `resynchronize`.
    pub fn new(transport: Box<dyn Transport>, config: SessionConfig) -> Self {
        let sequence = SequenceState::with_raw(config.initial_sequence);
        Self {
            transport,
            config,
            sequence,
            shutdown: ShutdownSignal::new(),
            desynchronized: false,
            _state: PhantomData,
        }
    }

    /// Run the resync exchange. Returns a synchronized Session on success.
    pub fn resynchronize(self) -> Result<Session<Synchronized>> {
        let mut this = self;
        this.exchange_resync()?;
        Ok(this.into_state())
    }

    /// Skip the resync exchange and trust `initial_sequence` to match the
    /// reader, e.g. when re-attaching to a link another process drove.
    pub fn assume_synchronized(self) -> Session<Synchronized> {
        warn!(
            "assuming reader is synchronized at sequence {}",
            self.sequence.raw()
        );
        self.into_state()
    }
}

impl Session<Synchronized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        if self.desynchronized {
            return Err(ProtocolError::InvalidState(
                "resync required before the next request".into(),
            ));
        }

        let pending = self.transport.bytes_waiting()?;
        if pending > 0 {
            self.desynchronized = true;
            return Err(ProtocolError::InvalidState(format!(
                "{} unsolicited bytes pending before request",
                pending
            )));
        }

        let request = codec::encode_command_frame(&mut self.sequence, self.config.resource_id, cmd)?;

        // Any failure up to and including the command echo leaves the
        // exchange out of lockstep.
        let response = match self.exchange(&request) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("{}; resync required", e);
                self.desynchronized = true;
                return Err(e);
            }
        };

        let result = codec::decode_checked_response(&response);
        if let Err(e) = &result {
            if e.requires_resync() {
                self.desynchronized = true;
            }
        }
        result
    }

    fn exchange(&mut self, request: &Frame) -> Result<Frame> {
        self.send(request)?;
        let bytes = self.receive()?;
        codec::check_response_frame(request, &bytes, self.config.sequence_check)
    }

    /// Resynchronize an established session, resetting the sequence to 0.
    pub fn resync(&mut self) -> Result<()> {
        self.exchange_resync()
    }

    /// Read `count` configuration blocks starting at `address`.
    pub fn read_system_configuration(
        &mut self,
        source: ConfigSource,
        address: u8,
        count: u8,
    ) -> Result<SystemConfiguration> {
        let cmd = Command::ReadSystemConfigurationBlock {
            source,
            address,
            count,
        };
        match self.execute(&cmd)? {
            Response::ReadSystemConfigurationBlock(cfg) => Ok(cfg),
            other => Err(ProtocolError::UnexpectedResponse {
                expected: cmd.command_code(),
                actual: other.command_code(),
            }),
        }
    }

    /// Run one inventory round.
    pub fn inventory(&mut self, request: &InventoryRequest) -> Result<TagInventoryResult> {
        let cmd = Command::TagInventory(request.clone());
        match self.execute(&cmd)? {
            Response::TagInventory(result) => {
                debug!(
                    "inventory: {:?}, {} of {} tags",
                    result.stop_reason, result.tags_transmitted, result.total_tags_buffered
                );
                Ok(result)
            }
            other => Err(ProtocolError::UnexpectedResponse {
                expected: cmd.command_code(),
                actual: other.command_code(),
            }),
        }
    }

    /// Inventory until the reader has nothing pending, issuing continuation
    /// requests as needed. Tags come back in discovery order.
    ///
    /// Stops after `max_inventory_rounds` rounds with a warning and returns
    /// what was collected.
    pub fn inventory_all(&mut self, request: &InventoryRequest) -> Result<Vec<TagRecord>> {
        let rounds = self.config.max_inventory_rounds.max(1);
        let mut tags = Vec::new();
        let mut next = request.clone();

        for _ in 0..rounds {
            let result = self.inventory(&next)?;
            tags.extend(result.tags);
            if result.stop_reason != StopReason::MorePending {
                return Ok(tags);
            }
            next = request.continuation();
        }

        warn!(
            "reader still reports pending tags after {} rounds; returning {} tags",
            rounds,
            tags.len()
        );
        Ok(tags)
    }
}
