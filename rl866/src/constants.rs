// rl866/src/constants.rs
//! Common protocol constants used across the crate

/// PCB bits 7..6: block type. Bit 7 clear marks an I-Block.
pub const PCB_BLOCK_TYPE_MASK: u8 = 0xC0;

/// PCB value of a supervisory (S-Block) resync frame: bits 7..6 = `11`.
pub const PCB_S_BLOCK: u8 = 0xC0;

/// PCB bit 6: transmission sequence number (I-Block only).
pub const PCB_SEQUENCE_BIT: u8 = 1 << 6;

/// PCB bit 5: chaining, more data follows. Reserved; never set by this crate.
pub const PCB_CHAINING_BIT: u8 = 1 << 5;

/// Envelope header: PCB(1) + RID(1)
pub const ENVELOPE_HEADER_LEN: usize = 2;

/// Read System Configuration Block command code
pub const CMD_READ_SYSTEM_CONFIGURATION_BLOCK: u8 = 0x01;

/// Tag Inventory command code
pub const CMD_TAG_INVENTORY: u8 = 0x31;

/// Size of one system configuration block in bytes
pub const CFG_BLOCK_LEN: usize = 14;

/// Highest addressable configuration block (6-bit address field)
pub const CFG_MAX_BLOCK_ADDRESS: u8 = 0x3F;

/// Field 1 bit 7 of the configuration read request: read from ROM
pub const CFG_READ_ROM_BIT: u8 = 1 << 7;

/// Tag inventory option flags (request field 1)
pub const INV_FLAG_ANTENNA_SELECTION: u8 = 1 << 0;
pub const INV_FLAG_AIR_PROTOCOL_PARAMETERS: u8 = 1 << 1;
pub const INV_FLAG_STOP_TRIGGER: u8 = 1 << 2;
pub const INV_FLAG_NEW_INVENTORY: u8 = 1 << 3;

/// Tag report presence flags (response field 4.1)
pub const TAG_FLAG_ANTENNA_ID: u8 = 1 << 0;
pub const TAG_FLAG_AIR_PROTOCOL: u8 = 1 << 1;
pub const TAG_FLAG_TAG_TYPE: u8 = 1 << 2;
pub const TAG_FLAG_SERIAL_NUMBER: u8 = 1 << 3;
pub const TAG_FLAG_MEMORY_DATA: u8 = 1 << 4;
pub const TAG_FLAG_EMBEDDED_COMMAND: u8 = 1 << 7;

/// Serial line defaults of the reader module (8E1)
pub const DEFAULT_BAUD_RATE: u32 = 38_400;
