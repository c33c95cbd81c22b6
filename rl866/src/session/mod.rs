// rl866/src/session/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::SessionBuilder;
pub use config::{DEFAULT_MAX_INVENTORY_ROUNDS, SessionConfig};
pub use handle::{Session, Synchronized, Unsynchronized};
