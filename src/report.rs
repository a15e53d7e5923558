//! Diagnostics and Operator Reporting
//!
//! Pure observer over the transport: formats records, predictions, and
//! timings as human-readable text. Formatting goes through a fixed-size
//! scratch string; the 8-slot record cap bounds every line we can emit, and
//! anything that would still not fit is truncated rather than grown.

use core::fmt::{self, Write};

use heapless::String;

use crate::hal::Transport;

/// Bound for one formatted diagnostic line. Eight i32s at worst-case width
/// plus the surrounding decoration stays under this.
const FMT_CAPACITY: usize = 128;

/// Console writer over the serial transport.
///
/// Lines go out with CRLF endings so raw terminals render them correctly.
pub struct Console<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> Write for Console<'a, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.transport.write(s.as_bytes());
        Ok(())
    }
}

impl<'a, T: Transport> Console<'a, T> {
    pub fn new(transport: &'a mut T) -> Self {
        Console { transport }
    }

    /// Emit a string as-is, no line ending.
    pub fn text(&mut self, s: &str) {
        self.transport.write(s.as_bytes());
    }

    /// Emit raw bytes as-is; used to echo the operator's own record back.
    pub fn raw(&mut self, bytes: &[u8]) {
        self.transport.write(bytes);
    }

    /// Emit a string followed by CRLF.
    pub fn line(&mut self, s: &str) {
        self.transport.write(s.as_bytes());
        self.transport.write(b"\r\n");
    }

    /// Emit formatted arguments followed by CRLF, via the bounded scratch
    /// buffer. Overlong output is truncated, never an error.
    pub fn fmt_line(&mut self, args: fmt::Arguments) {
        let mut out: String<FMT_CAPACITY> = String::new();
        let _ = out.write_fmt(args);
        self.line(&out);
    }

    /// Format an integer record as `Integers: [1, 2, ]`.
    pub fn int_array(&mut self, ints: &[i32]) {
        let mut out: String<FMT_CAPACITY> = String::new();
        let _ = out.push_str("Integers: [");
        for n in ints {
            let _ = write!(out, "{}, ", n);
        }
        let _ = out.push_str("]");
        self.line(&out);
    }
}
