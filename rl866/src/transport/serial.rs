// rl866/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::Duration;

use log::debug;
use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};

use crate::Result;
use crate::constants::DEFAULT_BAUD_RATE;
use crate::transport::traits::Transport;

/// Serial line to an RL866 reader module, 8 data bits, even parity,
/// 1 stop bit.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` at the reader's default 38400 baud.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with(path, DEFAULT_BAUD_RATE)
    }

    pub fn open_with(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::Even)
            .stop_bits(StopBits::One)
            .timeout(Duration::from_millis(100))
            .open()?;
        debug!("opened {} at {} baud", path, baud_rate);
        Ok(Self::from_port(port))
    }

    /// Wrap a port the caller already configured.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(data.len())
    }

    fn read_available(&mut self) -> Result<Vec<u8>> {
        let n = self.port.bytes_to_read()? as usize;
        let mut buf = vec![0u8; n];
        if n > 0 {
            self.port.read_exact(&mut buf)?;
        }
        Ok(buf)
    }

    fn bytes_waiting(&mut self) -> Result<usize> {
        Ok(self.port.bytes_to_read()? as usize)
    }

    fn reset(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
