// rl866/src/types.rs

use crate::constants::CFG_BLOCK_LEN;
use crate::{ProtocolError, Result};

/// Resource/Request ID - Newtype Pattern (1 バイト)
///
/// Opaque to the protocol engine; the reader echoes it in every response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::From, derive_more::Display,
)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceId(u8);

impl ResourceId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Where a configuration block read is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigSource {
    Ram,
    Rom,
}

/// One fixed-size system configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBlock([u8; CFG_BLOCK_LEN]);

impl ConfigBlock {
    pub fn from_bytes(bytes: [u8; CFG_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; CFG_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for ConfigBlock {
    type Error = ProtocolError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; CFG_BLOCK_LEN] =
            bytes
                .try_into()
                .map_err(|_| ProtocolError::LengthMismatch {
                    expected: CFG_BLOCK_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }
}

/// Air interface protocol type codes recognised in tag reports.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirProtocol {
    #[display(fmt = "ISO 15693")]
    Iso15693 = 1,
    #[display(fmt = "ISO 14443A")]
    Iso14443A = 2,
    #[display(fmt = "ISO 14443B")]
    Iso14443B = 3,
    #[display(fmt = "ISO 18000-6C")]
    Iso18000_6C = 4,
}

impl AirProtocol {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for AirProtocol {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Iso15693),
            2 => Ok(Self::Iso14443A),
            3 => Ok(Self::Iso14443B),
            4 => Ok(Self::Iso18000_6C),
            other => Err(ProtocolError::UnknownProtocol(other)),
        }
    }
}

/// Antenna selection sub-field of the inventory request.
///
/// Wire layout: antenna count(1) + selection bits((count+7)/8). Antenna `k`
/// (1-based) is bit `(k-1) % 8` of byte `(k-1) / 8`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntennaSelection {
    count: u8,
    bits: Vec<u8>,
}

impl AntennaSelection {
    /// No antenna selected yet.
    pub fn new(count: u8) -> Self {
        let len = (count as usize).div_ceil(8);
        Self {
            count,
            bits: vec![0u8; len],
        }
    }

    /// One antenna interface, selected.
    pub fn single() -> Self {
        Self {
            count: 1,
            bits: vec![0x01],
        }
    }

    /// Mark antenna `antenna` (1-based) as selected.
    pub fn select(mut self, antenna: u8) -> Result<Self> {
        if antenna == 0 || antenna > self.count {
            return Err(ProtocolError::InvalidParameter(format!(
                "antenna {} outside 1..={}",
                antenna, self.count
            )));
        }
        let idx = (antenna - 1) as usize;
        self.bits[idx / 8] |= 1 << (idx % 8);
        Ok(self)
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_selected(&self, antenna: u8) -> bool {
        if antenna == 0 || antenna > self.count {
            return false;
        }
        let idx = (antenna - 1) as usize;
        self.bits[idx / 8] & (1 << (idx % 8)) != 0
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.bits.len());
        out.push(self.count);
        out.extend_from_slice(&self.bits);
        out
    }
}

impl Default for AntennaSelection {
    fn default() -> Self {
        Self::single()
    }
}

/// One node of the air-protocol parameter set.
///
/// The parameter length is EBV-encoded on the wire, which this crate does
/// not implement; requests carrying any of these fail to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirProtocolParameter {
    pub protocol: AirProtocol,
    /// 0 applies the parameter to every antenna interface
    pub antenna_interface: u8,
    pub parameter: Vec<u8>,
}

/// Stop trigger type (request field 4.1)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopTriggerType {
    /// No new tag found within `value` ms, or timed out
    NoNewTagWithin = 0,
    /// No new tag after `value` attempts, or timed out
    NoNewTagAfterAttempts = 1,
    /// `value` tags found, or timed out
    TagCountReached = 2,
    /// Only the timeout ends the inventory; `value` is ignored
    TimeoutOnly = 3,
}

/// Stop trigger sub-field of the inventory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopTrigger {
    pub kind: StopTriggerType,
    pub timeout: u32,
    pub value: u16,
}

impl StopTrigger {
    pub fn new(kind: StopTriggerType, timeout: u32, value: u16) -> Self {
        Self {
            kind,
            timeout,
            value,
        }
    }

    /// Layout: type(1) + timeout DWORD(4) + value WORD(2), multi-byte
    /// fields lower byte first.
    pub fn encode(&self) -> [u8; 7] {
        let t = self.timeout.to_le_bytes();
        let v = self.value.to_le_bytes();
        [self.kind as u8, t[0], t[1], t[2], t[3], v[0], v[1]]
    }
}

/// Tag serial number as transmitted (lower byte first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialNumber(Vec<u8>);

impl SerialNumber {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer value of the serial number; `None` when wider than 128 bits.
    pub fn as_u128(&self) -> Option<u128> {
        crate::utils::le_to_u128(&self.0)
    }

    /// `0x`-prefixed hex of the integer value, e.g. `[0xAA, 0xBB]` -> `"0xbbaa"`.
    pub fn to_hex(&self) -> String {
        crate::utils::le_int_hex(&self.0)
    }
}

/// Bit data read from the tag memory user area.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagMemory {
    bit_count: u16,
    data: Vec<u8>,
}

impl TagMemory {
    /// `data` must hold `ceil(bit_count / 8)` bytes.
    pub fn new(bit_count: u16, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(bit_count);
        if data.len() != expected {
            return Err(ProtocolError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { bit_count, data })
    }

    /// Number of payload bytes carrying `bit_count` bits.
    pub fn byte_len(bit_count: u16) -> usize {
        (bit_count as usize).div_ceil(8)
    }

    pub fn bit_count(&self) -> u16 {
        self.bit_count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_u128(&self) -> Option<u128> {
        crate::utils::le_to_u128(&self.data)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::le_int_hex(&self.data)
    }
}
