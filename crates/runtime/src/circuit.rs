//! Circuit simulation
//!
//! A [`Circuit`] is the executable form of a parsed definition. It
//! owns the declared signal lists, function table, update sequence
//! and input traces, and drives the cycle loop:
//!
//! - cycle 0: bind the first input values, force every latch output
//!   to false, run the updates in declared order, record.
//! - cycle i: bind inputs for cycle i, copy each latch input into its
//!   primed output, run the updates, record.
//!
//! The latch copy happens before any update runs, so during a cycle a
//! primed signal always carries the previous cycle's value.

use tracing::{debug, info, instrument};

use gatework_dsl::ast::{CircuitDef, Definition, Update};

use crate::env::Environment;
use crate::error::{Error, Result};
use crate::eval::apply_update;
use crate::trace::Trace;
use crate::types::SignalId;

/// Executable circuit with its simulation inputs.
#[derive(Debug)]
pub struct Circuit {
    name: String,
    inputs: Vec<SignalId>,
    outputs: Vec<SignalId>,
    latches: Vec<SignalId>,
    definitions: Vec<Definition>,
    updates: Vec<Update>,
    siminputs: Vec<Trace>,
    simlength: usize,
    simoutputs: Vec<Trace>,
}

impl Circuit {
    /// Build a circuit from a parsed definition.
    ///
    /// Fails if there are no input traces, if any trace is empty, or
    /// if the traces disagree on length. The common length becomes
    /// the simulation length.
    pub fn new(def: CircuitDef) -> Result<Self> {
        let siminputs: Vec<Trace> = def
            .siminputs
            .into_iter()
            .map(|t| Trace::new(SignalId::from(t.signal), t.bits))
            .collect();
        let simlength = check_trace_lengths(&siminputs)?;

        Ok(Circuit {
            name: def.name,
            inputs: def.inputs.into_iter().map(SignalId::from).collect(),
            outputs: def.outputs.into_iter().map(SignalId::from).collect(),
            latches: def.latches.into_iter().map(SignalId::from).collect(),
            definitions: def.definitions,
            updates: def.updates,
            siminputs,
            simlength,
            simoutputs: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cycles the simulation will run.
    pub fn simlength(&self) -> usize {
        self.simlength
    }

    /// Recorded traces, inputs first, then outputs in declared order.
    /// Populated by a successful [`Circuit::run`]; a failed run leaves
    /// no partial traces behind.
    pub fn simoutputs(&self) -> &[Trace] {
        &self.simoutputs
    }

    /// Force every latch output to false.
    pub fn latches_init(&self, env: &mut Environment) {
        for latch in &self.latches {
            env.set(latch.primed(), false);
        }
    }

    /// Copy each latch input into its primed output.
    ///
    /// Reads complete before any write, so every copy sees the values
    /// as they stood at the end of the previous cycle.
    pub fn latches_update(&self, env: &mut Environment) -> Result<()> {
        let mut staged = Vec::with_capacity(self.latches.len());
        for latch in &self.latches {
            staged.push(env.get(latch.as_str())?);
        }
        for (latch, value) in self.latches.iter().zip(staged) {
            env.set(latch.primed(), value);
        }
        Ok(())
    }

    /// Run cycle 0: allocate the output traces, bind the first input
    /// values, reset the latches, evaluate, record.
    pub fn initialize(&mut self, env: &mut Environment) -> Result<()> {
        self.simoutputs = self
            .inputs
            .iter()
            .chain(&self.outputs)
            .map(|id| Trace::sized(id.clone(), self.simlength))
            .collect();

        self.bind_inputs(env, 0)?;
        self.latches_init(env);
        self.apply_updates(env)?;
        self.record(env, 0)
    }

    /// Run one subsequent cycle.
    pub fn next_cycle(&mut self, env: &mut Environment, cycle: usize) -> Result<()> {
        self.bind_inputs(env, cycle)?;
        self.latches_update(env)?;
        self.apply_updates(env)?;
        self.record(env, cycle)
    }

    /// Run the whole simulation and return the recorded traces.
    ///
    /// Any failure aborts the run and discards whatever was recorded,
    /// so there is no partial-output mode.
    #[instrument(skip(self), fields(circuit = %self.name))]
    pub fn run(&mut self) -> Result<&[Trace]> {
        let mut env = Environment::with_definitions(self.definitions.iter().cloned());

        info!(cycles = self.simlength, "simulation starting");
        if let Err(e) = self.run_cycles(&mut env) {
            self.simoutputs.clear();
            return Err(e);
        }

        info!("simulation complete");
        Ok(&self.simoutputs)
    }

    fn run_cycles(&mut self, env: &mut Environment) -> Result<()> {
        self.initialize(env)?;
        debug!(cycle = 0, "cycle complete\n{env}");

        for cycle in 1..self.simlength {
            self.next_cycle(env, cycle)?;
            debug!(cycle, "cycle complete\n{env}");
        }
        Ok(())
    }

    fn bind_inputs(&self, env: &mut Environment, cycle: usize) -> Result<()> {
        for trace in &self.siminputs {
            let value = *trace.values.get(cycle).ok_or(Error::TraceUnderrun {
                signal: trace.signal.clone(),
                cycle,
            })?;
            env.set(trace.signal.clone(), value);
        }
        Ok(())
    }

    fn apply_updates(&self, env: &mut Environment) -> Result<()> {
        for update in &self.updates {
            apply_update(update, env)?;
        }
        Ok(())
    }

    fn record(&mut self, env: &Environment, cycle: usize) -> Result<()> {
        for trace in &mut self.simoutputs {
            trace.values[cycle] = env.get(trace.signal.as_str())?;
        }
        Ok(())
    }
}

/// The common length of the input traces.
fn check_trace_lengths(traces: &[Trace]) -> Result<usize> {
    let first = traces.first().ok_or(Error::NoInputTraces)?;
    if first.is_empty() {
        return Err(Error::EmptyTrace {
            signal: first.signal.clone(),
        });
    }
    let expected = first.len();
    for trace in &traces[1..] {
        if trace.is_empty() {
            return Err(Error::EmptyTrace {
                signal: trace.signal.clone(),
            });
        }
        if trace.len() != expected {
            return Err(Error::TraceLengthMismatch {
                signal: trace.signal.clone(),
                expected,
                actual: trace.len(),
            });
        }
    }
    Ok(expected)
}
