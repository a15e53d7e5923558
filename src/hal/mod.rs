//! Hardware Abstraction Seams
//!
//! The core never touches registers; a board port supplies these two traits.
//! Both are polled, never awaited: absence of input or a stalled transmit
//! FIFO is the port's problem, the core just keeps ticking.

/// Non-blocking serial transport.
///
/// `read_byte` may only be called when `bytes_available` reported at least
/// one pending byte; the core honors that ordering.
pub trait Transport {
    /// Number of bytes currently waiting in the receive FIFO.
    fn bytes_available(&self) -> usize;

    /// Take the next pending byte off the receive FIFO.
    fn read_byte(&mut self) -> u8;

    /// Queue bytes for transmission.
    fn write(&mut self, bytes: &[u8]);
}

/// Free-running microsecond clock.
///
/// The counter wraps at `u32::MAX`; consumers must difference readings with
/// `wrapping_sub`, never subtraction. Reading the clock never blocks.
pub trait Clock {
    /// Current counter value in microseconds.
    fn micros(&self) -> u32;
}
