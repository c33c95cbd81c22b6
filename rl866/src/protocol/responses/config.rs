// rl866/src/protocol/responses/config.rs

use crate::constants::{CFG_BLOCK_LEN, CMD_READ_SYSTEM_CONFIGURATION_BLOCK};
use crate::protocol::cursor::ByteCursor;
use crate::types::ConfigBlock;
use crate::{ProtocolError, Result};

/// Configuration blocks returned by ReadSystemConfigurationBlock.
///
/// `data().len() == blocks_read() * 14` always holds; the decoder rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfiguration {
    blocks_read: u8,
    data: Vec<u8>,
}

impl SystemConfiguration {
    pub fn blocks_read(&self) -> u8 {
        self.blocks_read
    }

    /// Raw configuration bytes, all blocks back to back.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn blocks(&self) -> impl Iterator<Item = ConfigBlock> + '_ {
        self.data.chunks_exact(CFG_BLOCK_LEN).map(|chunk| {
            let mut arr = [0u8; CFG_BLOCK_LEN];
            arr.copy_from_slice(chunk);
            ConfigBlock::from_bytes(arr)
        })
    }

    pub fn block(&self, index: usize) -> Option<ConfigBlock> {
        self.blocks().nth(index)
    }
}

/// Decode ReadSystemConfigurationBlock response information field
/// Layout: command_code(1) + blocks_read(1) + data(blocks_read * 14)
pub fn decode_read_system_configuration(inf: &[u8]) -> Result<SystemConfiguration> {
    let mut cur = ByteCursor::new(inf);
    super::expect_command_code(&mut cur, CMD_READ_SYSTEM_CONFIGURATION_BLOCK)?;

    let blocks_read = cur.read_u8()?;
    let data = cur.read_rest();

    let expected = blocks_read as usize * CFG_BLOCK_LEN;
    if data.len() != expected {
        return Err(ProtocolError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    Ok(SystemConfiguration {
        blocks_read,
        data: data.to_vec(),
    })
}
