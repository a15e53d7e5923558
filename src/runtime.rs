//! Runtime Context and Tick Loop
//!
//! The single thread of control. A `Context` owns the transport, clock,
//! engine, and line buffer; `tick` drains whatever bytes are pending and
//! advances the record state machine synchronously. There are no globals and
//! no locks: one task, one owner.
//!
//! Initialization failures are fail-stop: the context enters [`State::Halted`]
//! and never reads another byte. Per-record failures (wrong arity, a failed
//! invoke) are reported and forgotten.

use crate::hal::{Clock, Transport};
use crate::io::line::{LineBuffer, LineEvent};
use crate::io::record::{self, ARITY};
use crate::nn::engine::{Engine, FatalError};
use crate::pipeline;
use crate::report::Console;

/// Observable run state. `Halted` is terminal: only constructing a fresh
/// context leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// Everything the resident loop owns, reused record-to-record with no
/// steady-state allocation.
pub struct Context<T, C, E>
where
    T: Transport,
    C: Clock,
    E: Engine,
{
    transport: T,
    clock: C,
    engine: E,
    line: LineBuffer,
    state: State,
}

impl<T, C, E> Context<T, C, E>
where
    T: Transport,
    C: Clock,
    E: Engine,
{
    pub fn new(transport: T, clock: C, engine: E) -> Self {
        Context {
            transport,
            clock,
            engine,
            line: LineBuffer::new(),
            state: State::Running,
        }
    }

    /// One-time startup: announce, allocate tensor buffers, and check the
    /// model's input arity. Any failure here is unrecoverable configuration
    /// error; the context halts and `tick` becomes a no-op.
    pub fn init(&mut self) {
        let mut console = Console::new(&mut self.transport);
        console.line("Sine predictor waking up");

        if let Err(err) = self.engine.allocate_buffers() {
            match err {
                FatalError::SchemaMismatch { .. } => {
                    console.line("Model schema version mismatch!");
                }
                FatalError::TensorAllocation => {
                    console.line("AllocateTensors() failed");
                }
            }
            console.line("System halted.");
            self.state = State::Halted;
            return;
        }

        if self.engine.input_tensor().len() != ARITY {
            console.line("Model input arity mismatch!");
            console.line("System halted.");
            self.state = State::Halted;
        }
    }

    /// One cooperative tick: consume every byte currently available, echo it,
    /// and process any record it completes. Returns immediately when the
    /// transport is idle; never waits for more input.
    pub fn tick(&mut self) {
        if self.state == State::Halted {
            return;
        }

        while self.transport.bytes_available() > 0 {
            let byte = self.transport.read_byte();
            self.transport.write(&[byte]);

            match self.line.accept(byte) {
                LineEvent::Pending => {}
                // Partial record discarded; nothing to tell the operator.
                LineEvent::Overflow => {}
                LineEvent::Terminated => self.process_record(),
            }
        }
    }

    /// Parse, validate, and (when valid) run inference on the just-terminated
    /// record, reporting each stage to the operator.
    fn process_record(&mut self) {
        let Context {
            transport,
            clock,
            engine,
            line,
            ..
        } = self;
        let mut console = Console::new(transport);

        console.text("About to process line: ");
        console.raw(line.record());
        console.line("");

        let ints = record::parse(line.record());
        console.int_array(&ints);

        match record::validate(ints.len()) {
            Err(_) => {
                console.line("Warning: Please enter exactly 7 integers for the sine predictor.");
            }
            Ok(()) => match pipeline::run(engine, clock, &mut console, &ints) {
                Err(_) => {
                    console.line("Error during inference.");
                }
                Ok(prediction) => {
                    console.fmt_line(format_args!("Prediction: {}", prediction.value));
                    console.fmt_line(format_args!(
                        "Printing time = {} us. Inference time = {} us.",
                        prediction.print_us, prediction.infer_us
                    ));
                }
            },
        }
    }

    /// Current run state; `Halted` is observable rather than a spin trap.
    pub fn state(&self) -> State {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
