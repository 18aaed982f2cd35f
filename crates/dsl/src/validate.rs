//! Validation pass for circuit descriptions
//!
//! Performs name-level checks after parsing, including:
//! - duplicate signal declarations across .inputs, .outputs and .latches
//! - updates that assign to inputs or to primed names
//! - primed reads of signals that are not declared latches
//! - .simulate rows that do not line up with the declared inputs
//!
//! Anything that depends on evaluation order (reading a signal before
//! it is assigned, calling an unknown function) is reported by the
//! runtime at the point of use instead.

use std::collections::HashSet;

use crate::ast::{CircuitDef, Expr};

/// Validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed circuit definition
pub fn validate(def: &CircuitDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut declared: HashSet<&str> = HashSet::new();
    for name in def
        .inputs
        .iter()
        .chain(&def.outputs)
        .chain(&def.latches)
    {
        if !declared.insert(name) {
            errors.push(ValidationError {
                message: format!("signal '{name}' is declared more than once"),
            });
        }
        if name.ends_with('\'') {
            errors.push(ValidationError {
                message: format!(
                    "signal '{name}' must not be declared with a prime; the primed form is produced by the latch"
                ),
            });
        }
    }

    let inputs: HashSet<&str> = def.inputs.iter().map(String::as_str).collect();
    let latches: HashSet<&str> = def.latches.iter().map(String::as_str).collect();

    for update in &def.updates {
        if inputs.contains(update.target.as_str()) {
            errors.push(ValidationError {
                message: format!(
                    "update assigns to input '{}'; inputs are driven by .simulate rows",
                    update.target
                ),
            });
        }
        if update.target.ends_with('\'') {
            errors.push(ValidationError {
                message: format!(
                    "update assigns to primed signal '{}'; only the latch step writes primed signals",
                    update.target
                ),
            });
        }

        let mut read = Vec::new();
        signal_names(&update.expr, &mut read);
        for name in read {
            if let Some(base) = name.strip_suffix('\'') {
                if !latches.contains(base) {
                    errors.push(ValidationError {
                        message: format!(
                            "'{name}' is read but '{base}' is not a declared latch"
                        ),
                    });
                }
            }
        }
    }

    let mut def_names: HashSet<&str> = HashSet::new();
    for definition in &def.definitions {
        if !def_names.insert(&definition.name) {
            errors.push(ValidationError {
                message: format!("function '{}' is defined more than once", definition.name),
            });
        }
        if definition.name.ends_with('\'') {
            errors.push(ValidationError {
                message: format!("function name '{}' must not be primed", definition.name),
            });
        }
        let mut params: HashSet<&str> = HashSet::new();
        for param in &definition.params {
            if !params.insert(param) {
                errors.push(ValidationError {
                    message: format!(
                        "function '{}' declares parameter '{}' more than once",
                        definition.name, param
                    ),
                });
            }
            if param.ends_with('\'') {
                errors.push(ValidationError {
                    message: format!(
                        "function '{}' declares primed parameter '{}'",
                        definition.name, param
                    ),
                });
            }
        }
    }

    let mut traced: HashSet<&str> = HashSet::new();
    for trace in &def.siminputs {
        if !inputs.contains(trace.signal.as_str()) {
            errors.push(ValidationError {
                message: format!(
                    "'{}' has a .simulate row but is not a declared input",
                    trace.signal
                ),
            });
        }
        if !traced.insert(&trace.signal) {
            errors.push(ValidationError {
                message: format!("'{}' has more than one .simulate row", trace.signal),
            });
        }
    }
    for input in &def.inputs {
        if !traced.contains(input.as_str()) {
            errors.push(ValidationError {
                message: format!("input '{input}' has no .simulate row"),
            });
        }
    }

    errors
}

/// Collect every signal name an expression reads
fn signal_names<'a>(expr: &'a Expr, out: &mut Vec<&'a str>) {
    match expr {
        Expr::Signal(name) => out.push(name),
        Expr::Conjunction(left, right) | Expr::Disjunction(left, right) => {
            signal_names(left, out);
            signal_names(right, out);
        }
        Expr::Negation(inner) => signal_names(inner, out),
        Expr::Call { args, .. } => {
            for arg in args {
                signal_names(arg, out);
            }
        }
    }
}
