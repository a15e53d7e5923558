//! Fixed-Point Inference
//!
//! The core drives inference through the [`engine::Engine`] trait and never
//! looks inside the graph. [`micro`] is the resident engine: a saturating
//! int8 feed-forward pass over the bundled [`model`] weights, enough to keep
//! the board self-contained without a vendored runtime.

pub mod engine;
pub mod micro;
pub mod model;

pub use engine::{Engine, FatalError, InvokeError};
pub use micro::MicroEngine;
