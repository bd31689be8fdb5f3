//! Nunchuck-rs: Wii Nunchuck I2C driver
//!
//! This library provides a blocking driver for the Wii Nunchuck controller,
//! decoding the device's raw 6-byte frames into joystick, accelerometer,
//! and button readings over a pluggable bus transport.

pub mod nunchuck;
pub mod transport;

// Re-export commonly used items
pub use nunchuck::{
    Accelerometer, ButtonState, InitMode, Joystick, NunchuckData, NunchuckError, NunchuckReader,
    RawReading,
};
pub use transport::{BusTransport, MockTransport, TransportError};

#[cfg(target_os = "linux")]
pub use transport::LinuxI2cTransport;
