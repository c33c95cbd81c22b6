//! Hexadecimal rendering for frames, serial numbers and log lines.

use std::fmt;

/// Lazily formats a byte slice as spaced lowercase hex.
///
/// Used in `log` calls so nothing is rendered unless the record is emitted:
/// `debug!("tx {}", HexDump(&bytes))`.
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Convert a byte slice to a lowercase hex string without separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Convert a byte slice to a lowercase hex string, one space between bytes.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexDump(bytes).to_string()
}

/// Interpret `bytes` as a lower-byte-first unsigned integer.
///
/// Returns `None` when more than 16 bytes are given.
pub fn le_to_u128(bytes: &[u8]) -> Option<u128> {
    if bytes.len() > 16 {
        return None;
    }
    Some(
        bytes
            .iter()
            .rev()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128),
    )
}

/// `0x`-prefixed hex of a lower-byte-first integer of any width, without
/// leading zeros. An empty slice renders as `"0x0"`.
pub fn le_int_hex(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().rev().map(|b| format!("{:02x}", b)).collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}
