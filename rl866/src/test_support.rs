//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::codec::information_pcb;
use crate::session::{Session, SessionConfig, Synchronized};
use crate::transport::{MockTransport, ReadPolicy};
use crate::types::ResourceId;
use crate::utils::ms;
use crate::Result;

/// Session configuration with millisecond read timing so tests that hit
/// the timeout path stay fast.
#[doc(hidden)]
pub fn fast_config() -> SessionConfig {
    SessionConfig {
        read_policy: ReadPolicy {
            timeout: ms(30),
            poll_interval: ms(1),
            burst_delay: ms(1),
        },
        ..SessionConfig::default()
    }
}

/// Create a synchronized Session over a MockTransport that already
/// answered the resync exchange. The returned mock shares its wire with the
/// session, so tests can queue replies and inspect sent frames.
#[doc(hidden)]
pub fn synchronized_mock_session() -> Result<(Session<Synchronized>, MockTransport)> {
    synchronized_mock_session_with(fast_config())
}

#[doc(hidden)]
pub fn synchronized_mock_session_with(
    config: SessionConfig,
) -> Result<(Session<Synchronized>, MockTransport)> {
    let mock = MockTransport::new();
    mock.push_reply(resync_reply(config.resource_id));
    let session = Session::new(Box::new(mock.clone()), config).resynchronize()?;
    Ok((session, mock))
}

/// The reader's answer to a resync S-Block.
#[doc(hidden)]
pub fn resync_reply(rid: ResourceId) -> Vec<u8> {
    vec![crate::constants::PCB_S_BLOCK, rid.as_u8()]
}

/// Wrap a response information field in an I-Block envelope.
#[doc(hidden)]
pub fn i_block_reply(sequence_bit: u8, rid: ResourceId, information_field: &[u8]) -> Vec<u8> {
    let mut out = vec![information_pcb(sequence_bit), rid.as_u8()];
    out.extend_from_slice(information_field);
    out
}
