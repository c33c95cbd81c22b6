// rl866/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod cursor;
pub mod frame;
pub mod responses;
pub mod sequence;

pub use codec::{build_request, build_resync, decode_envelope};
pub use commands::{Command, InventoryRequest};
pub use cursor::ByteCursor;
pub use frame::Frame;
pub use responses::{
    Response, StopReason, SystemConfiguration, TagInventoryResult, TagRecord, TagReportFlags,
};
pub use sequence::{BlockType, SequenceCheck, SequenceState};
