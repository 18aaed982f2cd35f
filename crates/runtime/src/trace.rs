//! Recorded signal traces
//!
//! A trace is one signal's value at every cycle of a simulation run.
//! Rendering follows the .simulate notation: the bit row first, then
//! the signal name, e.g. `0101 Out`.

use std::fmt;

use crate::types::SignalId;

/// One signal's values over the whole simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub signal: SignalId,
    pub values: Vec<bool>,
}

impl Trace {
    pub fn new(signal: SignalId, values: Vec<bool>) -> Self {
        Trace { signal, values }
    }

    /// An all-false trace with room for `len` cycles.
    pub fn sized(signal: SignalId, len: usize) -> Self {
        Trace {
            signal,
            values: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values as a row of `0`s and `1`s.
    pub fn bits(&self) -> String {
        self.values
            .iter()
            .map(|&v| if v { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.bits(), self.signal)
    }
}
