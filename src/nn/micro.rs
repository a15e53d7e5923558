//! MicroEngine - resident int8 feed-forward engine
//!
//! A deterministic, saturating fixed-point forward pass over a bundled
//! [`Model`]. All activation storage lives in a fixed arena sized at compile
//! time; `allocate_buffers` only checks the model fits and zeroes the
//! tensors, it never touches a heap.

use super::engine::{Engine, FatalError, InvokeError};
use super::model::{Model, MODEL_HIDDEN, MODEL_INPUTS, MODEL_OUTPUTS, SCHEMA_VERSION};

/// Fixed activation arena, in bytes. A model whose activations exceed this
/// is rejected at `allocate_buffers` time.
pub const TENSOR_ARENA_SIZE: usize = 2 * 1024;

/// Reference engine implementation over static weights.
pub struct MicroEngine {
    model: &'static Model,
    input: [i8; MODEL_INPUTS],
    hidden: [i8; MODEL_HIDDEN],
    output: [i8; MODEL_OUTPUTS],
    allocated: bool,
}

impl MicroEngine {
    /// Map a model and check its header. A schema mismatch is fatal: the
    /// weight layout cannot be trusted, so no engine is returned.
    pub fn load(model: &'static Model) -> Result<Self, FatalError> {
        if model.schema_version != SCHEMA_VERSION {
            return Err(FatalError::SchemaMismatch {
                found: model.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        Ok(MicroEngine {
            model,
            input: [0; MODEL_INPUTS],
            hidden: [0; MODEL_HIDDEN],
            output: [0; MODEL_OUTPUTS],
            allocated: false,
        })
    }
}

/// Saturate an i32 accumulator into int8 range.
fn sat8(acc: i32) -> i8 {
    if acc > i8::MAX as i32 {
        i8::MAX
    } else if acc < i8::MIN as i32 {
        i8::MIN
    } else {
        acc as i8
    }
}

impl Engine for MicroEngine {
    fn allocate_buffers(&mut self) -> Result<(), FatalError> {
        if self.model.activation_bytes() > TENSOR_ARENA_SIZE {
            return Err(FatalError::TensorAllocation);
        }

        self.input = [0; MODEL_INPUTS];
        self.hidden = [0; MODEL_HIDDEN];
        self.output = [0; MODEL_OUTPUTS];
        self.allocated = true;
        Ok(())
    }

    fn input_tensor(&mut self) -> &mut [i8] {
        &mut self.input
    }

    fn output_tensor(&self) -> &[i8] {
        &self.output
    }

    fn invoke(&mut self) -> Result<(), InvokeError> {
        if !self.allocated {
            return Err(InvokeError::BuffersNotAllocated);
        }

        // Dense 7 -> 8, ReLU.
        for (unit, row) in self.model.w1.iter().enumerate() {
            let mut acc = self.model.b1[unit];
            for (i, &w) in row.iter().enumerate() {
                acc += w as i32 * self.input[i] as i32;
            }
            acc >>= self.model.shift;
            self.hidden[unit] = if acc < 0 { 0 } else { sat8(acc) };
        }

        // Dense 8 -> 1.
        for (unit, row) in self.model.w2.iter().enumerate() {
            let mut acc = self.model.b2[unit];
            for (i, &w) in row.iter().enumerate() {
                acc += w as i32 * self.hidden[i] as i32;
            }
            acc >>= self.model.shift;
            self.output[unit] = sat8(acc);
        }

        Ok(())
    }
}
