//! Nunchuck protocol driver
//!
//! This module owns the bus transport and sequences the three phases of
//! the protocol: the initialization handshake, the timed frame fetch, and
//! the decode (plus optional decrypt) into typed readings.

use crate::nunchuck::constants::{
    DEFAULT_SETTLE_MICROS, ENCRYPTED_INIT_REGISTER, ENCRYPTED_INIT_VALUE, FRAME_LEN,
    FRAME_REQUEST_BYTE, MIN_SETTLE_MICROS, PLAIN_INIT_FIRST_REGISTER, PLAIN_INIT_FIRST_VALUE,
    PLAIN_INIT_SECOND_REGISTER, PLAIN_INIT_SECOND_VALUE,
};
use crate::nunchuck::frame::{decode_frame, decrypt_frame, RawFrame};
use crate::nunchuck::types::{NunchuckData, RawReading};
use crate::transport::{BusTransport, TransportError};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Initialization handshake to negotiate with the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    /// Classic handshake; the controller scrambles every byte it returns
    Encrypted,
    /// Third-party handshake; frames come back unscrambled
    Plain,
}

impl FromStr for InitMode {
    type Err = NunchuckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypted" => Ok(Self::Encrypted),
            "plain" => Ok(Self::Plain),
            other => Err(NunchuckError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum NunchuckError {
    #[error("Settle delay of {requested_micros} microseconds is below the minimum of {MIN_SETTLE_MICROS}")]
    InvalidSettleDelay { requested_micros: u64 },

    #[error("Invalid initialization mode: {0}")]
    InvalidMode(String),

    #[error("Bus transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Blocking Nunchuck driver.
///
/// Owns its transport exclusively for its whole lifetime. Construction runs
/// the initialization handshake; a reader that failed to construct never
/// existed, so no read can be issued against an uninitialized device.
///
/// Reads take `&mut self`: the bus protocol is a strict request/then-timed-
/// read sequence, so callers sharing a reader across threads must serialize
/// whole read cycles themselves.
pub struct NunchuckReader<T: BusTransport> {
    transport: T,
    settle_micros: u64,
    encryption_active: bool,
}

impl<T: BusTransport> NunchuckReader<T> {
    /// Create a reader with the default 500 microsecond settle delay and
    /// run the handshake for `mode`.
    pub fn new(transport: T, mode: InitMode) -> Result<Self, NunchuckError> {
        Self::with_settle_micros(transport, DEFAULT_SETTLE_MICROS, mode)
    }

    /// Create a reader with an explicit settle delay in microseconds.
    ///
    /// The delay is waited after every command so the circuit can prepare
    /// its response. Values below 300 microseconds are rejected before any
    /// bus I/O happens; there is no upper bound.
    pub fn with_settle_micros(
        transport: T,
        settle_micros: u64,
        mode: InitMode,
    ) -> Result<Self, NunchuckError> {
        if settle_micros < MIN_SETTLE_MICROS {
            return Err(NunchuckError::InvalidSettleDelay {
                requested_micros: settle_micros,
            });
        }

        let mut reader = Self {
            transport,
            settle_micros,
            encryption_active: false,
        };

        match mode {
            InitMode::Encrypted => reader.init_encrypted()?,
            InitMode::Plain => reader.init_plain()?,
        }

        Ok(reader)
    }

    /// Whether the controller was initialized with the encrypted handshake.
    /// Set once during construction and never changes afterward.
    pub fn is_encryption_active(&self) -> bool {
        self.encryption_active
    }

    /// Configured settle delay in microseconds
    pub fn settle_micros(&self) -> u64 {
        self.settle_micros
    }

    /// Read one flat reading from the controller.
    ///
    /// Fetches a fresh 6-byte frame (blocking for at least the settle
    /// delay), unscrambles it if the encrypted handshake was used, and
    /// decodes it. Fails as a whole on any transport error; no partial
    /// reading is ever returned.
    pub fn read_raw(&mut self) -> Result<RawReading, NunchuckError> {
        let mut frame = self.fetch_frame()?;
        if self.encryption_active {
            frame = decrypt_frame(frame);
        }
        Ok(decode_frame(&frame))
    }

    /// Read one structured reading from the controller.
    ///
    /// Same I/O as [`read_raw`](Self::read_raw); the result is purely a
    /// relabeling into joystick, accelerometer, and button sub-values.
    pub fn read(&mut self) -> Result<NunchuckData, NunchuckError> {
        Ok(NunchuckData::from(self.read_raw()?))
    }

    fn init_encrypted(&mut self) -> Result<(), NunchuckError> {
        self.transport
            .write_register(ENCRYPTED_INIT_REGISTER, ENCRYPTED_INIT_VALUE)?;
        self.settle();
        self.encryption_active = true;
        info!("Nunchuck initialized in encrypted mode");
        Ok(())
    }

    fn init_plain(&mut self) -> Result<(), NunchuckError> {
        self.transport
            .write_register(PLAIN_INIT_FIRST_REGISTER, PLAIN_INIT_FIRST_VALUE)?;
        self.transport
            .write_register(PLAIN_INIT_SECOND_REGISTER, PLAIN_INIT_SECOND_VALUE)?;
        self.settle();
        self.encryption_active = false;
        info!("Nunchuck initialized in plain mode");
        Ok(())
    }

    /// Request a frame, wait for the circuit to settle, then read exactly
    /// 6 bytes in fixed order. No retry and no partial-frame recovery.
    fn fetch_frame(&mut self) -> Result<RawFrame, NunchuckError> {
        self.transport.write_byte(FRAME_REQUEST_BYTE)?;
        self.settle();

        let mut frame: RawFrame = [0; FRAME_LEN];
        for byte in frame.iter_mut() {
            *byte = self.transport.read_byte()?;
        }

        debug!("Fetched frame {:02x?}", frame);
        Ok(frame)
    }

    /// Mandatory settling wait; always elapses fully, no early wake.
    fn settle(&self) {
        thread::sleep(Duration::from_micros(self.settle_micros));
    }
}
