use thiserror::Error;

/// Errors surfaced by the network, the trainer, and the dataset loader.
///
/// `DimensionMismatch` is the only recoverable variant: the caller can
/// re-supply a correctly sized input. The rest indicate a broken dataset
/// or a numerically unstable configuration and are meant to be fatal to
/// the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input vector length disagrees with the expected width.
    #[error("input length mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// MAE derivative evaluated where the prediction equals the target.
    #[error("division by zero in MAE derivative: prediction equals target ({value})")]
    DivisionByZero { value: f64 },

    /// A gradient became NaN. Points at the learning rate or the
    /// activation/loss pairing, not a transient fault.
    #[error("NaN gradient at layer {layer}, neuron {neuron}; check the learning rate and the activation/loss pairing")]
    NumericInstability { layer: usize, neuron: usize },

    /// Dataset file could not be opened.
    #[error("dataset not found: {path}")]
    FileNotFound { path: String },

    /// Dataset file opened but did not parse as delimited numbers.
    #[error("error parsing dataset {path} at line {line}: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
