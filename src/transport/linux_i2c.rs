//! Linux hardware transport over the i2c-dev character device.

use crate::nunchuck::constants::NUNCHUCK_I2C_ADDRESS;
use crate::transport::{BusTransport, TransportError};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use log::info;
use std::path::Path;

/// Real bus transport backed by a Linux i2c-dev node (e.g. `/dev/i2c-1`).
pub struct LinuxI2cTransport {
    device: LinuxI2CDevice,
}

impl LinuxI2cTransport {
    /// Open the given i2c-dev node addressed to the Nunchuck.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TransportError> {
        let device = LinuxI2CDevice::new(&path, NUNCHUCK_I2C_ADDRESS)
            .map_err(|e| TransportError::Open(e.to_string()))?;
        info!(
            "Opened I2C bus {} at address 0x{:02x}",
            path.as_ref().display(),
            NUNCHUCK_I2C_ADDRESS
        );
        Ok(Self { device })
    }
}

impl BusTransport for LinuxI2cTransport {
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError> {
        self.device
            .smbus_write_byte_data(register, value)
            .map_err(|e| TransportError::Write(e.to_string()))
    }

    fn write_byte(&mut self, value: u8) -> Result<(), TransportError> {
        self.device
            .smbus_write_byte(value)
            .map_err(|e| TransportError::Write(e.to_string()))
    }

    fn read_byte(&mut self) -> Result<u8, TransportError> {
        self.device
            .smbus_read_byte()
            .map_err(|e| TransportError::Read(e.to_string()))
    }
}
