//! Inference Pipeline
//!
//! One bounded computational step per validated record: quantize the seven
//! integers into the engine's int8 input tensor, invoke the graph exactly
//! once, read back the scalar prediction, and measure how long the operator
//! notice and the inference itself took.

use crate::hal::{Clock, Transport};
use crate::io::record::{IntRecord, ARITY};
use crate::nn::engine::{Engine, InvokeError};
use crate::report::Console;

/// Result of one successful inference step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prediction {
    /// Scalar output of the model.
    pub value: i8,
    /// Time spent emitting the "starting" notice, in microseconds.
    pub print_us: u32,
    /// Time spent quantizing, invoking, and reading back, in microseconds.
    pub infer_us: u32,
}

/// Run one inference step over a validated record.
///
/// Timestamps bracket the operator notice (t0..t1) and the inference proper
/// (t1..t2); both durations are differenced with `wrapping_sub` so a timer
/// wrap mid-record still yields the true forward-elapsed time.
///
/// On invocation failure the record is abandoned and the output tensor is
/// never read.
pub fn run<E, C, T>(
    engine: &mut E,
    clock: &C,
    console: &mut Console<'_, T>,
    record: &IntRecord,
) -> Result<Prediction, InvokeError>
where
    E: Engine,
    C: Clock,
    T: Transport,
{
    debug_assert_eq!(record.len(), ARITY);

    let t0 = clock.micros();
    console.line("Starting inference...");
    let t1 = clock.micros();

    // Truncating cast into the engine's int8 representation. Values outside
    // [-128, 127] wrap two's-complement; operators feeding raw sensor units
    // are expected to pre-scale.
    for (slot, &n) in engine.input_tensor().iter_mut().zip(record.iter()) {
        *slot = n as i8;
    }

    engine.invoke()?;

    let value = engine.output_tensor()[0];
    let t2 = clock.micros();

    Ok(Prediction {
        value,
        print_us: t1.wrapping_sub(t0),
        infer_us: t2.wrapping_sub(t1),
    })
}
