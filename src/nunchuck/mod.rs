//! Wii Nunchuck controller support
//!
//! This module provides the Nunchuck protocol driver:
//! - Initialization handshakes (encrypted and plain)
//! - Timed frame fetch over the bus transport
//! - Bit-level decode (and optional decrypt) into typed readings

pub mod constants;
pub mod frame;
pub mod reader;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use frame::*;
pub use reader::*;
pub use types::*;
