//! Nunchuck protocol constants
//!
//! This module contains all the constants needed for Nunchuck communication:
//! - Device addressing
//! - Initialization handshake registers and values
//! - Read cycle framing and the decrypt key
//! - Timing floors and defaults
//!
//! These are protocol facts, not configuration; nothing here is tunable.

// ============================================================================
// Device Addressing
// ============================================================================

/// Fixed I2C slave address of the Nunchuck controller
pub const NUNCHUCK_I2C_ADDRESS: u16 = 0x52;

// ============================================================================
// Initialization Handshake
// ============================================================================

/// Register written to initialize the controller in encrypted mode
pub const ENCRYPTED_INIT_REGISTER: u8 = 0x40;

/// Value written to [`ENCRYPTED_INIT_REGISTER`]
pub const ENCRYPTED_INIT_VALUE: u8 = 0x00;

/// First register of the plain (unencrypted) handshake
pub const PLAIN_INIT_FIRST_REGISTER: u8 = 0xF0;

/// Value written to [`PLAIN_INIT_FIRST_REGISTER`]
pub const PLAIN_INIT_FIRST_VALUE: u8 = 0x55;

/// Second register of the plain handshake
pub const PLAIN_INIT_SECOND_REGISTER: u8 = 0xFB;

/// Value written to [`PLAIN_INIT_SECOND_REGISTER`]
pub const PLAIN_INIT_SECOND_VALUE: u8 = 0x00;

// ============================================================================
// Read Cycle
// ============================================================================

/// Byte written to the device to request the next data frame
pub const FRAME_REQUEST_BYTE: u8 = 0x00;

/// Length of a device data frame in bytes
pub const FRAME_LEN: usize = 6;

/// Key used by the per-byte unscrambling of encrypted-mode frames
pub const DECRYPT_KEY: u8 = 0x17;

// ============================================================================
// Timing Constants
// ============================================================================

/// Minimum settle delay the circuit tolerates between command and response
pub const MIN_SETTLE_MICROS: u64 = 300;

/// Settle delay used when the caller does not specify one
pub const DEFAULT_SETTLE_MICROS: u64 = 500;
