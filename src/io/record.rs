//! Record Parser and Validator
//!
//! Splits a terminated line on commas into a bounded integer array and checks
//! the count against the model's input arity. Tokenizing follows `strtok`
//! semantics (runs of delimiters collapse, no empty tokens) and number
//! conversion follows `atoi` (best-effort, a token with no leading numeral
//! reads as zero). Both quirks are load-bearing for terminal input, where
//! stray spaces and double commas are routine.

use heapless::Vec;

/// Most tokens kept from one record; extras are silently dropped.
pub const MAX_TOKENS: usize = 8;

/// Exact number of integers the predictor's input tensor expects.
pub const ARITY: usize = 7;

/// Parsed integers from one record.
pub type IntRecord = Vec<i32, MAX_TOKENS>;

/// Per-record validation failure: token count does not match [`ARITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrongArity {
    pub count: usize,
}

/// Split a record on commas and convert each token, capped at
/// [`MAX_TOKENS`] entries.
///
/// Pure function of its input; the caller keeps ownership of the bytes.
pub fn parse(record: &[u8]) -> IntRecord {
    let mut ints = IntRecord::new();

    for token in record.split(|&b| b == b',') {
        if token.is_empty() {
            continue;
        }
        if ints.push(ascii_to_int(token)).is_err() {
            break;
        }
    }

    ints
}

/// Accept a record only when it carries exactly [`ARITY`] integers.
pub fn validate(count: usize) -> Result<(), WrongArity> {
    if count == ARITY {
        Ok(())
    } else {
        Err(WrongArity { count })
    }
}

/// `atoi`-style conversion: skip leading whitespace, take an optional sign,
/// consume digits until the first non-digit. No digits means zero; overflow
/// wraps rather than saturating.
fn ascii_to_int(token: &[u8]) -> i32 {
    let mut i = 0;
    while i < token.len() && matches!(token[i], b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) {
        i += 1;
    }

    let mut negative = false;
    if i < token.len() && (token[i] == b'+' || token[i] == b'-') {
        negative = token[i] == b'-';
        i += 1;
    }

    let mut value: i32 = 0;
    while i < token.len() && token[i].is_ascii_digit() {
        value = value
            .wrapping_mul(10)
            .wrapping_add((token[i] - b'0') as i32);
        i += 1;
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
