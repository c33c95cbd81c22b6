// rl866/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("truncated data: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("unknown air protocol type id {0:#04x}")]
    UnknownProtocol(u8),

    #[error("unsupported field: {0}")]
    Unsupported(&'static str),

    #[error("operation timed out")]
    Timeout,

    #[error("read cancelled by shutdown signal")]
    Cancelled,

    #[error("frame format error: {0}")]
    InvalidFrame(String),

    #[error("unknown command code {0:#04x}")]
    UnknownCommand(u8),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("resource id mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ResourceMismatch { expected: u8, actual: u8 },

    #[error("sequence bit mismatch: expected {expected}, got {actual}")]
    SequenceMismatch { expected: u8, actual: u8 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl ProtocolError {
    /// Whether the failure leaves the reader's sequence expectation unknown.
    ///
    /// After any of these the owning session must send a resync S-Block
    /// before another I-Block goes out. Payload decode errors are not in
    /// this set: the request/response pair completed in lockstep, only its
    /// content was unusable.
    pub fn requires_resync(&self) -> bool {
        match self {
            Self::Timeout
            | Self::Cancelled
            | Self::Io(_)
            | Self::InvalidFrame(_)
            | Self::ResourceMismatch { .. }
            | Self::SequenceMismatch { .. } => true,
            #[cfg(feature = "serial")]
            Self::Serial(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
