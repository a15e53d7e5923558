//! Bundled Sine-Predictor Model
//!
//! Weights for a two-layer int8 dense network: 7 inputs (a window of recent
//! samples), 8 hidden units with ReLU, 1 output. Biases are pre-scaled i32
//! accumulator values; `shift` is the right-shift applied to each
//! accumulator before saturating back to int8.

/// Schema revision these weight tables were exported against.
pub const SCHEMA_VERSION: u32 = 3;

/// Inputs per inference.
pub const MODEL_INPUTS: usize = 7;

/// Hidden units in the single dense layer.
pub const MODEL_HIDDEN: usize = 8;

/// Scalar outputs.
pub const MODEL_OUTPUTS: usize = 1;

/// A fully materialized model: header plus weight tables. Static data only,
/// nothing here is mutated at runtime.
pub struct Model {
    pub schema_version: u32,
    /// Input -> hidden weights, one row per hidden unit.
    pub w1: [[i8; MODEL_INPUTS]; MODEL_HIDDEN],
    /// Hidden biases, accumulator scale.
    pub b1: [i32; MODEL_HIDDEN],
    /// Hidden -> output weights, one row per output.
    pub w2: [[i8; MODEL_HIDDEN]; MODEL_OUTPUTS],
    /// Output biases, accumulator scale.
    pub b2: [i32; MODEL_OUTPUTS],
    /// Accumulator right-shift back to int8 range.
    pub shift: u32,
}

impl Model {
    /// Bytes of activation storage this model needs from the engine arena.
    pub const fn activation_bytes(&self) -> usize {
        MODEL_INPUTS + MODEL_HIDDEN + MODEL_OUTPUTS
    }
}

/// The resident sine-predictor weights.
pub static SINE_MODEL: Model = Model {
    schema_version: SCHEMA_VERSION,
    w1: [
        [34, -12, 7, 22, -5, 18, -27],
        [-9, 41, -16, 3, 29, -21, 12],
        [15, -33, 26, -8, 11, 37, -14],
        [-24, 6, 19, -31, 42, -3, 25],
        [8, 17, -38, 13, -22, 9, 30],
        [-19, 28, 4, -11, 35, -26, 16],
        [23, -7, 32, 20, -15, 5, -36],
        [-13, 21, -2, 39, -28, 14, 10],
    ],
    b1: [120, -45, 210, 75, -160, 30, 95, -80],
    w2: [[27, -19, 33, 12, -25, 8, 21, -15]],
    b2: [64],
    shift: 7,
};
