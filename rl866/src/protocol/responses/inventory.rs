// rl866/src/protocol/responses/inventory.rs

use log::trace;

use crate::constants::{
    CMD_TAG_INVENTORY, TAG_FLAG_AIR_PROTOCOL, TAG_FLAG_ANTENNA_ID, TAG_FLAG_EMBEDDED_COMMAND,
    TAG_FLAG_MEMORY_DATA, TAG_FLAG_SERIAL_NUMBER, TAG_FLAG_TAG_TYPE,
};
use crate::protocol::cursor::ByteCursor;
use crate::types::{AirProtocol, SerialNumber, TagMemory};
use crate::{ProtocolError, Result};

/// Why the reader stopped enumerating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The configured stop trigger fired; nothing left to report.
    Completed,
    /// Total timeout or buffer full. More tags are waiting and a
    /// continuation inventory has to be issued.
    MorePending,
    Other(u8),
}

impl From<u8> for StopReason {
    fn from(b: u8) -> Self {
        match b {
            0 => Self::Completed,
            1 => Self::MorePending,
            other => Self::Other(other),
        }
    }
}

/// Presence bits of one tag report (field 4.1). Bits 5-6 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagReportFlags {
    pub antenna_id: bool,
    pub air_protocol: bool,
    pub tag_type_id: bool,
    pub serial_number: bool,
    pub memory_data: bool,
    pub embedded_command: bool,
}

impl From<u8> for TagReportFlags {
    fn from(b: u8) -> Self {
        Self {
            antenna_id: b & TAG_FLAG_ANTENNA_ID != 0,
            air_protocol: b & TAG_FLAG_AIR_PROTOCOL != 0,
            tag_type_id: b & TAG_FLAG_TAG_TYPE != 0,
            serial_number: b & TAG_FLAG_SERIAL_NUMBER != 0,
            memory_data: b & TAG_FLAG_MEMORY_DATA != 0,
            embedded_command: b & TAG_FLAG_EMBEDDED_COMMAND != 0,
        }
    }
}

/// One inventoried tag. `None` means the reader did not send the field,
/// which is distinct from a field sent with zero length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRecord {
    pub antenna_id: Option<u8>,
    pub air_protocol: Option<AirProtocol>,
    pub tag_type_id: Option<u8>,
    pub serial_number: Option<SerialNumber>,
    pub memory: Option<TagMemory>,
}

/// Decoded TagInventory response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagInventoryResult {
    pub stop_reason: StopReason,
    /// Tags the reader has found in this inventory, possibly more than sent
    pub total_tags_buffered: u16,
    pub tags_transmitted: u8,
    /// In discovery order; `tags.len() == tags_transmitted`
    pub tags: Vec<TagRecord>,
}

impl TagInventoryResult {
    pub fn has_more_pending(&self) -> bool {
        self.stop_reason == StopReason::MorePending
    }
}

/// Decode one tag report starting at the cursor's flag byte.
pub fn decode_tag_record(cur: &mut ByteCursor<'_>) -> Result<TagRecord> {
    let flags = TagReportFlags::from(cur.read_u8()?);
    trace!("tag report flags {:?}", flags);

    let mut tag = TagRecord::default();

    if flags.antenna_id {
        tag.antenna_id = Some(cur.read_u8()?);
    }

    if flags.air_protocol {
        tag.air_protocol = Some(AirProtocol::try_from(cur.read_u8()?)?);
    }

    if flags.tag_type_id {
        tag.tag_type_id = Some(cur.read_u8()?);
    }

    if flags.serial_number {
        let len = cur.read_u8()? as usize;
        let sn = SerialNumber::from_bytes(cur.read_bytes(len)?.to_vec());
        trace!("serial number {}", sn.to_hex());
        tag.serial_number = Some(sn);
    }

    if flags.memory_data {
        let bits = cur.read_u16_le()?;
        let data = cur.read_bytes(TagMemory::byte_len(bits))?;
        tag.memory = Some(TagMemory::new(bits, data.to_vec())?);
    }

    if flags.embedded_command {
        return Err(ProtocolError::Unsupported("embedded_command"));
    }

    Ok(tag)
}

/// Decode TagInventory response information field
/// Layout: command_code(1) + stop(1) + total_buffered WORD(2) + count(1)
///         + tag reports(count)
pub fn decode_tag_inventory(inf: &[u8]) -> Result<TagInventoryResult> {
    let mut cur = ByteCursor::new(inf);
    super::expect_command_code(&mut cur, CMD_TAG_INVENTORY)?;

    let stop_reason = StopReason::from(cur.read_u8()?);
    let total_tags_buffered = cur.read_u16_le()?;
    let tags_transmitted = cur.read_u8()?;

    let mut tags = Vec::with_capacity(tags_transmitted as usize);
    for _ in 0..tags_transmitted {
        tags.push(decode_tag_record(&mut cur)?);
    }
    cur.finish()?;

    Ok(TagInventoryResult {
        stop_reason,
        total_tags_buffered,
        tags_transmitted,
        tags,
    })
}
