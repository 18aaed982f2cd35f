//! Circuit description language
//!
//! Compiler front end for .hw files. Lexes and parses a circuit
//! description into a plain definition tree and checks it for
//! name-level mistakes before simulation.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod validate;

pub use ast::*;
pub use lexer::{lex, LexError, Token};
pub use parser::{parse, ParseError, ParseErrorKind};
pub use validate::{validate, ValidationError};
