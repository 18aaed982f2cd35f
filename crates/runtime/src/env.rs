//! Signal environment
//!
//! Holds the current boolean value of every bound signal, plus the
//! function definition table shared across call scopes.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use gatework_dsl::ast::Definition;

use crate::error::{Error, Result};
use crate::types::SignalId;

/// Mutable signal bindings for one simulation, in insertion order.
///
/// The definition table is reference-counted so that a call scope can
/// share it without cloning every function body per call.
#[derive(Debug, Default)]
pub struct Environment {
    values: IndexMap<SignalId, bool>,
    definitions: Rc<IndexMap<String, Definition>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(definitions: impl IntoIterator<Item = Definition>) -> Self {
        let table = definitions
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Environment {
            values: IndexMap::new(),
            definitions: Rc::new(table),
        }
    }

    /// Look up a signal, failing if it has not been assigned yet.
    pub fn get(&self, name: &str) -> Result<bool> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| Error::SignalNotDefined(SignalId::from(name)))
    }

    /// Bind a signal, overwriting any previous value.
    pub fn set(&mut self, id: SignalId, value: bool) {
        self.values.insert(id, value);
    }

    pub fn definition(&self, name: &str) -> Result<&Definition> {
        self.definitions
            .get(name)
            .ok_or_else(|| Error::FunctionNotDefined(name.to_string()))
    }

    /// Fresh scope for a function call: no signal bindings, same
    /// definition table.
    pub fn call_scope(&self) -> Environment {
        Environment {
            values: IndexMap::new(),
            definitions: Rc::clone(&self.definitions),
        }
    }

    /// All bound signals in binding order.
    pub fn signals(&self) -> impl Iterator<Item = (&SignalId, bool)> {
        self.values.iter().map(|(id, value)| (id, *value))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, value) in &self.values {
            writeln!(f, "{} = {}", id, u8::from(*value))?;
        }
        Ok(())
    }
}
