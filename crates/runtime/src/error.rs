//! Simulation errors

use thiserror::Error;

use crate::types::SignalId;

/// Simulation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Simulation errors
///
/// All variants are fatal. Evaluation never substitutes a default for
/// a missing signal or value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("signal not defined: {0}")]
    SignalNotDefined(SignalId),

    #[error("function not defined: {0}")]
    FunctionNotDefined(String),

    #[error("argument count mismatch for {function}: expected {expected}, got {got}")]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("trace for {signal} has {actual} values, expected {expected}")]
    TraceLengthMismatch {
        signal: SignalId,
        expected: usize,
        actual: usize,
    },

    #[error("trace for {signal} is empty")]
    EmptyTrace { signal: SignalId },

    #[error("circuit has no input traces to drive the simulation")]
    NoInputTraces,

    #[error("trace for {signal} has no value at cycle {cycle}")]
    TraceUnderrun { signal: SignalId, cycle: usize },
}
