//! Nunchuck reading types
//!
//! This module defines the value types produced by the driver: the flat
//! raw reading and its structured relabeling into joystick, accelerometer,
//! and button sub-values.

use serde::{Deserialize, Serialize};

/// Joystick position (0-255 per axis, center near 128)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joystick {
    /// Horizontal axis (0 = left, 255 = right)
    pub x: u8,

    /// Vertical axis (0 = down, 255 = up)
    pub y: u8,
}

/// Accelerometer sample (10-bit per axis, 0-1023)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accelerometer {
    /// Acceleration along X-axis
    pub x: u16,

    /// Acceleration along Y-axis
    pub y: u16,

    /// Acceleration along Z-axis
    pub z: u16,
}

/// Button states, surfaced with the hardware's active-low convention:
/// 0 = pressed, 1 = released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// C button bit
    pub c: u8,

    /// Z button bit
    pub z: u8,
}

impl ButtonState {
    /// Whether the C button is held (active-low)
    pub fn is_c_pressed(&self) -> bool {
        self.c == 0
    }

    /// Whether the Z button is held (active-low)
    pub fn is_z_pressed(&self) -> bool {
        self.z == 0
    }
}

/// One flat reading decoded from a device frame.
///
/// Joystick axes are the raw 8-bit samples, accelerometer axes the
/// reconstructed 10-bit values, and buttons the raw active-low bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReading {
    pub joystick_x: u8,
    pub joystick_y: u8,
    pub accel_x: u16,
    pub accel_y: u16,
    pub accel_z: u16,
    pub button_c: u8,
    pub button_z: u8,
}

/// A raw reading relabeled into semantic sub-values. Same numbers,
/// no extra invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NunchuckData {
    pub joystick: Joystick,
    pub accelerometer: Accelerometer,
    pub buttons: ButtonState,
}

impl From<RawReading> for NunchuckData {
    fn from(raw: RawReading) -> Self {
        Self {
            joystick: Joystick {
                x: raw.joystick_x,
                y: raw.joystick_y,
            },
            accelerometer: Accelerometer {
                x: raw.accel_x,
                y: raw.accel_y,
                z: raw.accel_z,
            },
            buttons: ButtonState {
                c: raw.button_c,
                z: raw.button_z,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reading_mirrors_raw_fields() {
        let raw = RawReading {
            joystick_x: 130,
            joystick_y: 120,
            accel_x: 512,
            accel_y: 480,
            accel_z: 700,
            button_c: 0,
            button_z: 1,
        };

        let data = NunchuckData::from(raw);
        assert_eq!(data.joystick.x, raw.joystick_x);
        assert_eq!(data.joystick.y, raw.joystick_y);
        assert_eq!(data.accelerometer.x, raw.accel_x);
        assert_eq!(data.accelerometer.y, raw.accel_y);
        assert_eq!(data.accelerometer.z, raw.accel_z);
        assert_eq!(data.buttons.c, raw.button_c);
        assert_eq!(data.buttons.z, raw.button_z);
    }

    #[test]
    fn button_helpers_follow_active_low() {
        let buttons = ButtonState { c: 0, z: 1 };
        assert!(buttons.is_c_pressed());
        assert!(!buttons.is_z_pressed());
    }
}
