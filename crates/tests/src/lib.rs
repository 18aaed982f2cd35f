//! Integration test harness for gatework.
//!
//! This crate provides utilities for end-to-end testing of the full
//! simulation pipeline: Parse → Validate → Build → Run → Verify.

use gatework_dsl::{parse, validate};
use gatework_runtime::{Circuit, Trace};

/// Test harness for running circuit simulations from .hw source.
pub struct TestHarness {
    circuit: Circuit,
}

impl TestHarness {
    /// Create a new test harness from circuit source.
    ///
    /// # Panics
    ///
    /// Panics if parsing, validation, or circuit construction fails.
    pub fn from_source(source: &str) -> Self {
        let def = match parse(source) {
            Ok(def) => def,
            Err(e) => panic!("Parse failed: {e}"),
        };

        let problems = validate(&def);
        if !problems.is_empty() {
            panic!("Validation failed: {problems:?}");
        }

        let circuit = Circuit::new(def).expect("Circuit construction failed");
        Self { circuit }
    }

    /// Run the whole simulation.
    ///
    /// # Panics
    ///
    /// Panics if simulation fails.
    pub fn run(&mut self) {
        self.circuit.run().expect("Simulation failed");
    }

    /// Run the whole simulation, surfacing any failure.
    pub fn try_run(&mut self) -> gatework_runtime::Result<()> {
        self.circuit.run().map(|_| ())
    }

    /// Get a recorded trace by signal name.
    ///
    /// # Panics
    ///
    /// Panics if no trace was recorded for the signal.
    pub fn trace(&self, name: &str) -> &Trace {
        self.circuit
            .simoutputs()
            .iter()
            .find(|t| t.signal.as_str() == name)
            .unwrap_or_else(|| panic!("no trace recorded for {name}"))
    }

    /// Get a recorded trace as a row of bits.
    pub fn output_bits(&self, name: &str) -> String {
        self.trace(name).bits()
    }

    /// All recorded traces, inputs first.
    pub fn traces(&self) -> &[Trace] {
        self.circuit.simoutputs()
    }

    /// Number of simulated cycles.
    pub fn simlength(&self) -> usize {
        self.circuit.simlength()
    }
}
