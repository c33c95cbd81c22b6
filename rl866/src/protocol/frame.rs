// rl866/src/protocol/frame.rs

use crate::constants::{ENVELOPE_HEADER_LEN, PCB_CHAINING_BIT, PCB_SEQUENCE_BIT};
use crate::protocol::sequence::BlockType;
use crate::types::ResourceId;
use crate::{ProtocolError, Result};

/// RL866 wire envelope.
/// Format: [PCB(1)] [RID(1)] [INF(n)]
/// INF, when present, starts with the one-byte command code; the rest of
/// it is the parameter field.
///
/// Frames are built fresh per exchange and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pcb: u8,
    resource_id: ResourceId,
    information_field: Vec<u8>,
}

impl Frame {
    pub fn new(pcb: u8, resource_id: ResourceId, information_field: Vec<u8>) -> Self {
        Self {
            pcb,
            resource_id,
            information_field,
        }
    }

    /// Split raw bytes into PCB, RID and the remaining payload.
    pub fn decode_envelope(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ENVELOPE_HEADER_LEN {
            return Err(ProtocolError::Truncated {
                needed: ENVELOPE_HEADER_LEN,
                available: bytes.len(),
            });
        }
        Ok(Self {
            pcb: bytes[0],
            resource_id: ResourceId::new(bytes[1]),
            information_field: bytes[ENVELOPE_HEADER_LEN..].to_vec(),
        })
    }

    /// Wire bytes of this frame. Output depends only on the frame's fields.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + self.information_field.len());
        out.push(self.pcb);
        out.push(self.resource_id.as_u8());
        out.extend_from_slice(&self.information_field);
        out
    }

    pub fn pcb(&self) -> u8 {
        self.pcb
    }

    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    pub fn block_type(&self) -> Result<BlockType> {
        BlockType::from_pcb(self.pcb)
    }

    /// Sequence number bit (meaningful for I-Blocks only).
    pub fn sequence_bit(&self) -> u8 {
        (self.pcb & PCB_SEQUENCE_BIT) >> 6
    }

    pub fn is_chaining(&self) -> bool {
        self.pcb & PCB_CHAINING_BIT != 0
    }

    pub fn information_field(&self) -> &[u8] {
        &self.information_field
    }

    pub fn command_code(&self) -> Option<u8> {
        self.information_field.first().copied()
    }

    /// Information field with the command code stripped.
    pub fn parameter_field(&self) -> &[u8] {
        self.information_field.get(1..).unwrap_or(&[])
    }
}
