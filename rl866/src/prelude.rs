// rl866/src/prelude.rs

pub use crate::protocol::{
    Command, InventoryRequest, Response, SequenceCheck, StopReason, SystemConfiguration,
    TagInventoryResult, TagRecord,
};
pub use crate::session::{Session, SessionBuilder, SessionConfig, Synchronized, Unsynchronized};
pub use crate::transport::{ReadPolicy, ShutdownSignal, Transport};
pub use crate::{
    AirProtocol, AntennaSelection, ConfigBlock, ConfigSource, ProtocolError, ResourceId, Result,
    SerialNumber, StopTrigger, StopTriggerType, TagMemory,
};

// Re-export small utilities for convenience
pub use crate::utils::{HexDump, bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms};
