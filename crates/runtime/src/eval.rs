//! Expression evaluation
//!
//! Walks an expression tree against an [`Environment`]. Conjunction
//! and disjunction short-circuit, so the right operand of a settled
//! gate is never inspected. Function calls evaluate their arguments
//! in the caller's scope, then run the body in a fresh scope that
//! holds only the parameter bindings.

use tracing::trace;

use gatework_dsl::ast::{Expr, Update};

use crate::env::Environment;
use crate::error::{Error, Result};
use crate::types::SignalId;

/// Evaluate an expression to a single boolean.
pub fn eval(expr: &Expr, env: &Environment) -> Result<bool> {
    match expr {
        Expr::Signal(name) => env.get(name),
        Expr::Conjunction(left, right) => Ok(eval(left, env)? && eval(right, env)?),
        Expr::Disjunction(left, right) => Ok(eval(left, env)? || eval(right, env)?),
        Expr::Negation(inner) => Ok(!eval(inner, env)?),
        Expr::Call { name, args } => eval_call(name, args, env),
    }
}

fn eval_call(name: &str, args: &[Expr], env: &Environment) -> Result<bool> {
    let definition = env.definition(name)?;
    if definition.params.len() != args.len() {
        return Err(Error::ArityMismatch {
            function: name.to_string(),
            expected: definition.params.len(),
            got: args.len(),
        });
    }

    // Arguments see the caller's bindings, left to right.
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(eval(arg, env)?);
    }

    let mut scope = env.call_scope();
    for (param, value) in definition.params.iter().zip(values) {
        scope.set(SignalId::from(param.as_str()), value);
    }

    eval(&definition.body, &scope)
}

/// Evaluate an update's expression and bind the result to its target.
pub fn apply_update(update: &Update, env: &mut Environment) -> Result<()> {
    let value = eval(&update.expr, env)?;
    trace!(signal = %update.target, value, "update applied");
    env.set(SignalId::from(update.target.clone()), value);
    Ok(())
}
