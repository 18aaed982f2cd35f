//! Gatework Runtime
//!
//! Executes parsed circuits cycle by cycle and records signal traces.

pub mod circuit;
pub mod env;
pub mod error;
pub mod eval;
pub mod trace;
pub mod types;

pub use circuit::Circuit;
pub use env::Environment;
pub use error::{Error, Result};
pub use eval::{apply_update, eval};
pub use trace::Trace;
pub use types::*;
