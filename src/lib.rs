//! ╔═══════════════════════════════════════════════════════════════════════════╗
//! ║                     SINE-MICRO - LIBRARY ROOT                             ║
//! ║            Serial Front End for the Sine Predictor Engine                 ║
//! ╚═══════════════════════════════════════════════════════════════════════════╝
//!
//! A resident embedded loop: bytes arrive on the serial transport one at a
//! time, accumulate into bounded line records, parse into a fixed-size integer
//! array, and drive exactly one fixed-point inference step per valid record.
//! Everything runs on a single logical thread with no heap allocation; the
//! transport, clock, and inference engine are collaborators reached through
//! the trait seams in [`hal`] and [`nn::engine`].
//!
//! The binary entry point is platform-specific and lives outside this crate;
//! a board port constructs a [`runtime::Context`] over its UART and timer and
//! calls [`runtime::Context::tick`] from its idle loop.

#![no_std]

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC MODULES
// ═══════════════════════════════════════════════════════════════════════════════

pub mod hal;
pub mod io;
pub mod nn;
pub mod pipeline;
pub mod report;
pub mod runtime;
