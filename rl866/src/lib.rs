// rl866/src/lib.rs

//! rl866
//!
//! Pure Rust implementation of the RL866 block protocol spoken by UHF RFID
//! reader modules over a half-duplex serial link.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::ProtocolError`,
// `crate::Result`, and the newtypes in `types` are available for consumers
// and for convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
