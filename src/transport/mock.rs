//! Mock bus transport for testing.
//!
//! This transport records every write and serves reads from a scripted
//! byte queue instead of touching real hardware. Useful for exercising
//! the reader's handshake and read cycle without a controller attached.

use crate::transport::{BusTransport, TransportError};
use log::debug;
use std::collections::VecDeque;

/// A single write observed by the mock, as `(register, value)`.
/// Raw byte writes carry no register.
pub type RecordedWrite = (Option<u8>, u8);

/// Mock bus transport that replays scripted bytes and records writes.
#[derive(Debug, Default)]
pub struct MockTransport {
    reads: VecDeque<u8>,
    writes: Vec<RecordedWrite>,
    fail_read_at: Option<usize>,
    fail_write_at: Option<usize>,
    reads_served: usize,
    writes_served: usize,
}

impl MockTransport {
    /// Create a new mock transport with an empty read script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by upcoming reads, in order.
    pub fn queue_bytes(&mut self, bytes: &[u8]) {
        self.reads.extend(bytes.iter().copied());
    }

    /// Queue a full 6-byte device frame.
    pub fn queue_frame(&mut self, frame: [u8; 6]) {
        self.queue_bytes(&frame);
    }

    /// Every write seen so far, oldest first.
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    /// Number of reads served so far.
    pub fn reads_served(&self) -> usize {
        self.reads_served
    }

    /// Make the `n`-th read (0-based) fail with a transport error.
    /// The injection fires once; later reads proceed from the script.
    pub fn fail_read_at(&mut self, n: usize) {
        self.fail_read_at = Some(n);
    }

    /// Make the `n`-th write (0-based) fail with a transport error.
    /// The injection fires once; later writes proceed normally.
    pub fn fail_write_at(&mut self, n: usize) {
        self.fail_write_at = Some(n);
    }
}

impl BusTransport for MockTransport {
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError> {
        if self.fail_write_at == Some(self.writes_served) {
            self.fail_write_at = None;
            return Err(TransportError::Write(format!(
                "injected failure at write {}",
                self.writes_served
            )));
        }
        debug!(
            "[MOCK BUS] Register write: 0x{:02x} <- 0x{:02x}",
            register, value
        );
        self.writes.push((Some(register), value));
        self.writes_served += 1;
        Ok(())
    }

    fn write_byte(&mut self, value: u8) -> Result<(), TransportError> {
        if self.fail_write_at == Some(self.writes_served) {
            self.fail_write_at = None;
            return Err(TransportError::Write(format!(
                "injected failure at write {}",
                self.writes_served
            )));
        }
        debug!("[MOCK BUS] Byte write: 0x{:02x}", value);
        self.writes.push((None, value));
        self.writes_served += 1;
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, TransportError> {
        if self.fail_read_at == Some(self.reads_served) {
            self.fail_read_at = None;
            return Err(TransportError::Read(format!(
                "injected failure at read {}",
                self.reads_served
            )));
        }
        let byte = self
            .reads
            .pop_front()
            .ok_or_else(|| TransportError::Read("read script exhausted".to_string()))?;
        debug!("[MOCK BUS] Byte read: 0x{:02x}", byte);
        self.reads_served += 1;
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::MockTransport;
    use crate::transport::{BusTransport, TransportError};

    #[test]
    fn scripted_reads_come_back_in_order() {
        let mut bus = MockTransport::new();
        bus.queue_bytes(&[0x11, 0x22, 0x33]);

        assert_eq!(bus.read_byte().unwrap(), 0x11);
        assert_eq!(bus.read_byte().unwrap(), 0x22);
        assert_eq!(bus.read_byte().unwrap(), 0x33);
        assert_eq!(bus.reads_served(), 3);
    }

    #[test]
    fn exhausted_script_is_a_read_error() {
        let mut bus = MockTransport::new();
        assert!(matches!(bus.read_byte(), Err(TransportError::Read(_))));
    }

    #[test]
    fn writes_are_recorded_with_register() {
        let mut bus = MockTransport::new();
        bus.write_register(0x40, 0x00).unwrap();
        bus.write_byte(0x00).unwrap();

        assert_eq!(bus.writes(), &[(Some(0x40), 0x00), (None, 0x00)]);
    }

    #[test]
    fn injected_failures_fire_at_the_requested_index() {
        let mut bus = MockTransport::new();
        bus.queue_bytes(&[0xAA, 0xBB]);
        bus.fail_read_at(1);

        assert_eq!(bus.read_byte().unwrap(), 0xAA);
        assert!(matches!(bus.read_byte(), Err(TransportError::Read(_))));
        // One-shot injection: the script resumes afterwards
        assert_eq!(bus.read_byte().unwrap(), 0xBB);

        let mut bus = MockTransport::new();
        bus.fail_write_at(0);
        assert!(matches!(
            bus.write_byte(0x00),
            Err(TransportError::Write(_))
        ));
    }
}
