// rl866/src/session/config.rs

use crate::protocol::SequenceCheck;
use crate::transport::ReadPolicy;
use crate::types::ResourceId;

/// Continuation inventories issued by `inventory_all` before giving up.
pub const DEFAULT_MAX_INVENTORY_ROUNDS: usize = 16;

/// Tunables of one reader session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// RID stamped on every request and expected back in every response
    pub resource_id: ResourceId,
    /// Raw starting sequence number. Anything other than 0 or 1 makes the
    /// first request fail with `InvalidState`.
    pub initial_sequence: u8,
    pub read_policy: ReadPolicy,
    pub sequence_check: SequenceCheck,
    pub max_inventory_rounds: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resource_id: ResourceId::default(),
            initial_sequence: 0,
            read_policy: ReadPolicy::default(),
            sequence_check: SequenceCheck::default(),
            max_inventory_rounds: DEFAULT_MAX_INVENTORY_ROUNDS,
        }
    }
}
