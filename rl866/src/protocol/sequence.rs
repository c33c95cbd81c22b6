// rl866/src/protocol/sequence.rs

use crate::constants::{PCB_BLOCK_TYPE_MASK, PCB_S_BLOCK};
use crate::{ProtocolError, Result};

/// Block type carried in bits 7..6 of the protocol control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// I-Block: application command, sequence numbered
    Information,
    /// S-Block: link supervision (resync), no information field
    Supervisory,
}

impl BlockType {
    /// Classify a PCB. Bit 7 clear is an I-Block, `11` in bits 7..6 an
    /// S-Block; anything else is not spoken by this engine.
    pub fn from_pcb(pcb: u8) -> Result<Self> {
        if pcb & 0x80 == 0 {
            Ok(Self::Information)
        } else if pcb & PCB_BLOCK_TYPE_MASK == PCB_S_BLOCK {
            Ok(Self::Supervisory)
        } else {
            Err(ProtocolError::InvalidFrame(format!(
                "unsupported block type in pcb {:#04x}",
                pcb
            )))
        }
    }
}

/// Alternating transmission sequence number of one session.
///
/// Holds 0 or 1. The raw value is kept unchecked so a corrupted state is
/// caught where it matters: building the next request fails with
/// `InvalidState` instead of emitting a frame with a bogus control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceState {
    raw: u8,
}

impl SequenceState {
    pub const INITIAL: u8 = 0;

    pub fn new() -> Self {
        Self { raw: Self::INITIAL }
    }

    /// Start from an arbitrary raw value. Values other than 0/1 are
    /// accepted here and rejected on first use.
    pub fn with_raw(raw: u8) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> u8 {
        self.raw
    }

    /// The sequence bit the next request will carry.
    pub fn current(&self) -> Result<u8> {
        match self.raw {
            0 | 1 => Ok(self.raw),
            other => Err(ProtocolError::InvalidState(format!(
                "transmission sequence number {} must be 0 or 1",
                other
            ))),
        }
    }

    /// Hand out the current bit and flip to the other one.
    pub(crate) fn advance(&mut self) -> Result<u8> {
        let bit = self.current()?;
        self.raw = bit ^ 1;
        Ok(bit)
    }

    pub(crate) fn reset(&mut self) {
        self.raw = Self::INITIAL;
    }
}

/// What to do when a response's sequence bit does not echo the request's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceCheck {
    Ignore,
    /// Log a warning and accept the response.
    #[default]
    Warn,
    /// Reject with `SequenceMismatch`.
    Strict,
}
