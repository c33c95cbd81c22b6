// rl866/src/transport/mod.rs

pub mod mock;
pub mod reader;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::MockTransport;
pub use reader::{ReadPolicy, ShutdownSignal, read_response};
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
