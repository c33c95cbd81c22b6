// rl866/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the half-duplex byte link away from the
/// protocol engine. Implementations never interpret the bytes they move.
///
/// Transports are `Send` so a session can be moved to, or shared behind a
/// mutex with, another thread.
pub trait Transport: Send {
    /// Write `data` completely; returns the number of bytes written.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Return whatever is currently buffered without blocking. An empty
    /// vector means nothing has arrived.
    fn read_available(&mut self) -> Result<Vec<u8>>;

    /// Number of received bytes waiting to be read.
    fn bytes_waiting(&mut self) -> Result<usize>;

    /// Drop any pending input. The default drains through `read_available`.
    fn reset(&mut self) -> Result<()> {
        while self.bytes_waiting()? > 0 {
            self.read_available()?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read_available(&mut self) -> Result<Vec<u8>> {
        (**self).read_available()
    }

    fn bytes_waiting(&mut self) -> Result<usize> {
        (**self).bytes_waiting()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
