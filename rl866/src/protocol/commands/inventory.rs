// rl866/src/protocol/commands/inventory.rs

use crate::constants::{
    CMD_TAG_INVENTORY, INV_FLAG_AIR_PROTOCOL_PARAMETERS, INV_FLAG_ANTENNA_SELECTION,
    INV_FLAG_NEW_INVENTORY, INV_FLAG_STOP_TRIGGER,
};
use crate::types::{AirProtocolParameter, AntennaSelection, StopTrigger};
use crate::{ProtocolError, Result};

/// Parameters of a TagInventory request.
///
/// Each optional sub-field goes on the wire only when present, and its
/// presence bit in the option flags is derived from it, so the two can't
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRequest {
    pub antennas: Option<AntennaSelection>,
    pub air_protocol_parameters: Vec<AirProtocolParameter>,
    pub stop_trigger: Option<StopTrigger>,
    pub new_inventory: bool,
}

impl InventoryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_antennas(mut self, antennas: AntennaSelection) -> Self {
        self.antennas = Some(antennas);
        self
    }

    pub fn with_stop_trigger(mut self, trigger: StopTrigger) -> Self {
        self.stop_trigger = Some(trigger);
        self
    }

    pub fn with_new_inventory(mut self, new_inventory: bool) -> Self {
        self.new_inventory = new_inventory;
        self
    }

    /// The follow-up request issued after the reader stopped with more
    /// tags pending: same sub-fields, bit 3 set.
    pub fn continuation(&self) -> Self {
        let mut next = self.clone();
        next.new_inventory = true;
        next
    }

    /// Option flags byte (field 1).
    pub fn flags(&self) -> u8 {
        let mut flags = 0u8;
        if self.antennas.is_some() {
            flags |= INV_FLAG_ANTENNA_SELECTION;
        }
        if !self.air_protocol_parameters.is_empty() {
            flags |= INV_FLAG_AIR_PROTOCOL_PARAMETERS;
        }
        if self.stop_trigger.is_some() {
            flags |= INV_FLAG_STOP_TRIGGER;
        }
        if self.new_inventory {
            flags |= INV_FLAG_NEW_INVENTORY;
        }
        flags
    }
}

/// Encode TagInventory information field (command code 0x31)
/// Layout: command_code(1) + flags(1) [+ antenna selection] [+ air protocol
/// parameter set] [+ stop trigger(7)]
pub fn encode_tag_inventory(req: &InventoryRequest) -> Result<Vec<u8>> {
    if !req.air_protocol_parameters.is_empty() {
        // parameter length is an EBV; not implemented
        return Err(ProtocolError::Unsupported("air_protocol_parameters"));
    }

    let mut buf = vec![CMD_TAG_INVENTORY, req.flags()];

    if let Some(antennas) = &req.antennas {
        buf.extend_from_slice(&antennas.encode());
    }

    if let Some(trigger) = &req.stop_trigger {
        buf.extend_from_slice(&trigger.encode());
    }

    Ok(buf)
}
