// rl866/src/protocol/commands/config.rs

use crate::constants::{CFG_MAX_BLOCK_ADDRESS, CFG_READ_ROM_BIT, CMD_READ_SYSTEM_CONFIGURATION_BLOCK};
use crate::types::ConfigSource;
use crate::{ProtocolError, Result};

/// Encode ReadSystemConfigurationBlock information field (command code 0x01)
/// Layout: command_code(1) + address(1) + block_count(1)
/// address: bit7 = read ROM, bit6 reserved (0), bits5-0 = start block
pub fn encode_read_system_configuration(
    source: ConfigSource,
    address: u8,
    count: u8,
) -> Result<Vec<u8>> {
    if address > CFG_MAX_BLOCK_ADDRESS {
        return Err(ProtocolError::InvalidParameter(format!(
            "configuration block address {} outside 0..={}",
            address, CFG_MAX_BLOCK_ADDRESS
        )));
    }
    if count == 0 {
        return Err(ProtocolError::InvalidParameter(
            "configuration block count must be at least 1".into(),
        ));
    }

    let mut field1 = address;
    if source == ConfigSource::Rom {
        field1 |= CFG_READ_ROM_BIT;
    }

    Ok(vec![CMD_READ_SYSTEM_CONFIGURATION_BLOCK, field1, count])
}
