//! Serial Input Handling
//!
//! Turns the unbounded byte stream into discrete, bounded records: the line
//! buffer accumulates bytes up to a carriage return, the record module splits
//! a terminated line into integers and checks the count.

pub mod line;
pub mod record;

pub use line::{LineBuffer, LineEvent, LINE_CAPACITY, TERMINATOR};
pub use record::{parse, validate, IntRecord, WrongArity, ARITY, MAX_TOKENS};
