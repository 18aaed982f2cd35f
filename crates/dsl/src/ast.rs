//! Abstract syntax tree for circuit descriptions
//!
//! These types represent the parsed structure of .hw files. The runtime
//! evaluates them directly; there is no separate lowering step.

// =============================================================================
// Expressions
// =============================================================================

/// A boolean expression over signals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A signal reference, e.g. `A`, or a latch output, e.g. `Q'`
    Signal(String),
    /// Logical AND, written `a * b`
    Conjunction(Box<Expr>, Box<Expr>),
    /// Logical OR, written `a + b`
    Disjunction(Box<Expr>, Box<Expr>),
    /// Logical NOT, written `/a`
    Negation(Box<Expr>),
    /// Application of a user-defined function, e.g. `xor(A, B)`
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn signal(name: impl Into<String>) -> Self {
        Expr::Signal(name.into())
    }

    pub fn and(a: Expr, b: Expr) -> Self {
        Expr::Conjunction(Box::new(a), Box::new(b))
    }

    pub fn or(a: Expr, b: Expr) -> Self {
        Expr::Disjunction(Box::new(a), Box::new(b))
    }

    pub fn not(a: Expr) -> Self {
        Expr::Negation(Box::new(a))
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// A named boolean function, declared with `.def`.
///
/// Arity is fixed by the parameter list. The body may reference the
/// parameters and other definitions, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub params: Vec<String>,
    pub body: Expr,
}

/// One update equation `signal = expr`, applied once per cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: String,
    pub expr: Expr,
}

/// One `.simulate` line: the input waveform for a signal, one bit per cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceDef {
    pub signal: String,
    pub bits: Vec<bool>,
}

/// A complete parsed .hw file.
///
/// Update order is the order the equations appear in the source; the
/// simulator applies them exactly in that order every cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitDef {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub latches: Vec<String>,
    pub definitions: Vec<Definition>,
    pub updates: Vec<Update>,
    pub siminputs: Vec<TraceDef>,
}
