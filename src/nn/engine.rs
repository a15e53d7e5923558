//! Engine Trait Seam
//!
//! The narrow contract the pipeline depends on. The model holds exactly one
//! input tensor (arity 7) and one output tensor (arity >= 1), so the
//! accessors are index-free. Loading and schema checking belong to the
//! concrete engine's constructor; by the time a value implements this trait
//! the model bytes are already mapped.

/// Unrecoverable initialization failure. The runtime answers any of these by
/// entering the permanent halted state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FatalError {
    /// Model was built against a different schema than this engine speaks.
    SchemaMismatch { found: u32, expected: u32 },
    /// Tensor buffers do not fit in the fixed arena.
    TensorAllocation,
}

/// Recoverable per-record invocation failure; the record is dropped and
/// polling resumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvokeError {
    /// `invoke` called before `allocate_buffers` succeeded.
    BuffersNotAllocated,
    /// The graph execution itself reported failure.
    Execution,
}

/// Fixed-point inference engine.
///
/// Tensor buffers are owned by the engine for its lifetime: allocated once,
/// never reallocated. The core writes the input tensor, invokes, and reads
/// the output tensor, in that order, one record at a time.
pub trait Engine {
    /// Carve the input/output tensors out of the engine's fixed arena.
    fn allocate_buffers(&mut self) -> Result<(), FatalError>;

    /// Mutable view of the int8 input tensor.
    fn input_tensor(&mut self) -> &mut [i8];

    /// Read-only view of the int8 output tensor.
    fn output_tensor(&self) -> &[i8];

    /// Run the graph once, synchronously, no retry.
    fn invoke(&mut self) -> Result<(), InvokeError>;
}
