//! Line Buffer - bounded accumulation of one serial record
//!
//! One byte in, one event out. The buffer owns a fixed 64-byte backing store
//! and never allocates; a record that outgrows it is discarded wholesale
//! rather than split, since a truncated number list would parse to garbage.

use heapless::Vec;

/// Capacity of one record, terminator included.
pub const LINE_CAPACITY: usize = 64;

/// Record terminator: carriage return, what a serial terminal sends on Enter.
pub const TERMINATOR: u8 = 13;

/// Outcome of feeding one byte to the line buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// Byte stored, record still open.
    Pending,
    /// Terminator seen; the record is complete and readable via `record()`.
    Terminated,
    /// Capacity reached with no terminator; the partial record was discarded.
    Overflow,
}

/// Fixed-capacity line accumulator.
pub struct LineBuffer {
    buf: Vec<u8, LINE_CAPACITY>,
    terminated: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        LineBuffer {
            buf: Vec::new(),
            terminated: false,
        }
    }

    /// Feed one byte, advancing the record state machine.
    ///
    /// A completed record stays readable until the next call, which resets
    /// the buffer before storing anything. Overflow resets immediately:
    /// there is nothing worth keeping.
    pub fn accept(&mut self, byte: u8) -> LineEvent {
        if self.terminated {
            self.buf.clear();
            self.terminated = false;
        }

        if byte == TERMINATOR {
            self.terminated = true;
            return LineEvent::Terminated;
        }

        // Cannot fail: overflow below clears the buffer, so there is always
        // room for at least one more byte here.
        let _ = self.buf.push(byte);

        if self.buf.is_full() {
            self.buf.clear();
            return LineEvent::Overflow;
        }

        LineEvent::Pending
    }

    /// The accumulated record, terminator excluded.
    pub fn record(&self) -> &[u8] {
        &self.buf
    }

    /// Current write position.
    pub fn cursor(&self) -> usize {
        self.buf.len()
    }

    /// Discard any accumulated bytes.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.terminated = false;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
