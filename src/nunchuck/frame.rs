//! Frame decode and decrypt
//!
//! Pure bit-level transforms on the device's 6-byte frames. Both are total
//! over all byte inputs; no frame is invalid.

use crate::nunchuck::constants::{DECRYPT_KEY, FRAME_LEN};
use crate::nunchuck::types::RawReading;

/// The fixed device response read once per cycle:
/// `[joy_x, joy_y, accel_x_hi, accel_y_hi, accel_z_hi, packed]`.
///
/// `packed` carries the two low-order bits of each accelerometer axis and
/// both button bits.
pub type RawFrame = [u8; FRAME_LEN];

/// Unscramble one byte of an encrypted-mode frame.
///
/// Fixed, keyless device obfuscation; not a security mechanism.
pub fn decrypt_byte(byte: u8) -> u8 {
    (byte ^ DECRYPT_KEY).wrapping_add(DECRYPT_KEY)
}

/// Unscramble a full encrypted-mode frame, byte by byte.
pub fn decrypt_frame(frame: RawFrame) -> RawFrame {
    frame.map(decrypt_byte)
}

/// Decode a frame into a flat reading.
///
/// Each accelerometer axis is an 8-bit coarse sample extended with 2
/// low-order bits from the packed byte, yielding a 10-bit value. Button
/// bits are surfaced unmodified (active-low, 0 = pressed).
pub fn decode_frame(frame: &RawFrame) -> RawReading {
    let packed = frame[5];

    RawReading {
        joystick_x: frame[0],
        joystick_y: frame[1],
        accel_x: ((frame[2] as u16) << 2) | (((packed & 0xC0) >> 6) as u16),
        accel_y: ((frame[3] as u16) << 2) | (((packed & 0x30) >> 4) as u16),
        accel_z: ((frame[4] as u16) << 2) | (((packed & 0x0C) >> 2) as u16),
        button_c: (packed & 0x02) >> 1,
        button_z: packed & 0x01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reference_frame() {
        let reading = decode_frame(&[0x80, 0x80, 0x10, 0x20, 0x30, 0xC3]);

        assert_eq!(reading.joystick_x, 0x80);
        assert_eq!(reading.joystick_y, 0x80);
        assert_eq!(reading.accel_x, 67); // (0x10 << 2) | 0b11
        assert_eq!(reading.accel_y, 128);
        assert_eq!(reading.accel_z, 192);
        assert_eq!(reading.button_c, 1);
        assert_eq!(reading.button_z, 1);
    }

    #[test]
    fn decoded_values_stay_in_range() {
        // Sweep the packed byte against extreme coarse samples
        for packed in 0..=255u8 {
            let reading = decode_frame(&[0xFF, 0x00, 0xFF, 0xFF, 0xFF, packed]);
            assert!(reading.accel_x <= 1023);
            assert!(reading.accel_y <= 1023);
            assert!(reading.accel_z <= 1023);
            assert!(reading.button_c <= 1);
            assert!(reading.button_z <= 1);
        }
    }

    #[test]
    fn button_bits_come_from_packed_byte() {
        let both_pressed = decode_frame(&[0, 0, 0, 0, 0, 0x00]);
        assert_eq!(both_pressed.button_c, 0);
        assert_eq!(both_pressed.button_z, 0);

        let c_only_released = decode_frame(&[0, 0, 0, 0, 0, 0x02]);
        assert_eq!(c_only_released.button_c, 1);
        assert_eq!(c_only_released.button_z, 0);

        let z_only_released = decode_frame(&[0, 0, 0, 0, 0, 0x01]);
        assert_eq!(z_only_released.button_c, 0);
        assert_eq!(z_only_released.button_z, 1);
    }

    #[test]
    fn decrypt_fixed_vectors() {
        assert_eq!(decrypt_byte(0x00), 0x2E);
        assert_eq!(decrypt_byte(0x7E), 0x80);
        // Sum wraps past 0xFF
        assert_eq!(decrypt_byte(0xE9), 0x15);
    }

    #[test]
    fn decrypt_frame_applies_per_byte() {
        let frame = decrypt_frame([0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(frame, [0x2E; 6]);
    }
}
