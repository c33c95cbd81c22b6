//! Utilities for rl866: small helpers shared by the codec, the transport
//! read loop and log output.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
