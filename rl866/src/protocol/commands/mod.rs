// rl866/src/protocol/commands/mod.rs

pub mod config;
pub mod inventory;

pub use config::encode_read_system_configuration;
pub use inventory::{InventoryRequest, encode_tag_inventory};

use crate::Result;
use crate::constants::{CMD_READ_SYSTEM_CONFIGURATION_BLOCK, CMD_TAG_INVENTORY};
use crate::types::ConfigSource;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReadSystemConfigurationBlock {
        source: ConfigSource,
        address: u8,
        count: u8,
    },
    TagInventory(InventoryRequest),
}

impl Command {
    /// Return the one-byte command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::ReadSystemConfigurationBlock { .. } => CMD_READ_SYSTEM_CONFIGURATION_BLOCK,
            Self::TagInventory(_) => CMD_TAG_INVENTORY,
        }
    }

    /// Whether `code` selects a command this crate has a codec for.
    pub fn is_known_code(code: u8) -> bool {
        matches!(code, CMD_READ_SYSTEM_CONFIGURATION_BLOCK | CMD_TAG_INVENTORY)
    }

    /// Encode the command into its information field (command code + params).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::ReadSystemConfigurationBlock {
                source,
                address,
                count,
            } => encode_read_system_configuration(*source, *address, *count),
            Self::TagInventory(req) => encode_tag_inventory(req),
        }
    }
}
