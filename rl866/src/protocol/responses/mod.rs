// rl866/src/protocol/responses/mod.rs

pub mod config;
pub mod inventory;

pub use config::{SystemConfiguration, decode_read_system_configuration};
pub use inventory::{
    StopReason, TagInventoryResult, TagRecord, TagReportFlags, decode_tag_inventory,
    decode_tag_record,
};

use crate::constants::{CMD_READ_SYSTEM_CONFIGURATION_BLOCK, CMD_TAG_INVENTORY};
use crate::protocol::cursor::ByteCursor;
use crate::{ProtocolError, Result};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    ReadSystemConfigurationBlock(SystemConfiguration),
    TagInventory(TagInventoryResult),
}

impl Response {
    /// Decode a response information field (including the echoed command
    /// code) for the given expected command code.
    pub fn decode(expected_cmd: u8, inf: &[u8]) -> Result<Self> {
        match expected_cmd {
            CMD_READ_SYSTEM_CONFIGURATION_BLOCK => Ok(Self::ReadSystemConfigurationBlock(
                decode_read_system_configuration(inf)?,
            )),
            CMD_TAG_INVENTORY => Ok(Self::TagInventory(decode_tag_inventory(inf)?)),
            other => Err(ProtocolError::UnknownCommand(other)),
        }
    }

    /// The command code this response answers.
    pub fn command_code(&self) -> u8 {
        match self {
            Response::ReadSystemConfigurationBlock(_) => CMD_READ_SYSTEM_CONFIGURATION_BLOCK,
            Response::TagInventory(_) => CMD_TAG_INVENTORY,
        }
    }
}

/// Consume the leading command code and check it echoes the request.
pub(crate) fn expect_command_code(cur: &mut ByteCursor<'_>, expected: u8) -> Result<()> {
    let actual = cur.read_u8()?;
    if actual != expected {
        return Err(ProtocolError::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
