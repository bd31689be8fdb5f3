//! Bus transport abstraction for the Nunchuck link
//!
//! This module provides a unified interface for the byte-level bus
//! operations the driver needs, decoupling the protocol logic from any
//! specific hardware binding.

pub mod mock;

#[cfg(target_os = "linux")]
pub mod linux_i2c;

#[cfg(target_os = "linux")]
pub use linux_i2c::LinuxI2cTransport;

pub use mock::MockTransport;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to open bus device: {0}")]
    Open(String),

    #[error("Bus write failed: {0}")]
    Write(String),

    #[error("Bus read failed: {0}")]
    Read(String),
}

/// Unified interface for the bus operations the driver performs.
///
/// The device address is fixed when the concrete transport is opened; the
/// driver only ever talks to the single controller behind the handle. All
/// operations block the calling thread for their full duration.
pub trait BusTransport {
    /// Write a single byte to a device register
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError>;

    /// Write a single raw byte to the device
    fn write_byte(&mut self, value: u8) -> Result<(), TransportError>;

    /// Read a single raw byte from the device
    fn read_byte(&mut self) -> Result<u8, TransportError>;
}
