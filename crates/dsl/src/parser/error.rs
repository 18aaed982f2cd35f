//! Parse error types.

use std::fmt;
use std::ops::Range;

use crate::lexer::Token;

/// Parse error with source location and context.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// Byte range in the source where the error occurred
    pub span: Range<usize>,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A different token was found where a specific token was expected.
    UnexpectedToken,
    /// The source ended while a construct was incomplete.
    UnexpectedEof,
    /// Tokens are present but violate the grammar, including source that
    /// failed to lex at all.
    InvalidSyntax,
}

impl ParseError {
    /// Create an "expected token" error.
    pub fn expected_token(expected: &Token, found: Option<&Token>, span: Range<usize>) -> Self {
        let message = match found {
            Some(token) => format!("expected {:?}, found {:?}", expected, token),
            None => format!("expected {:?}, found end of input", expected),
        };
        Self {
            kind: if found.is_none() {
                ParseErrorKind::UnexpectedEof
            } else {
                ParseErrorKind::UnexpectedToken
            },
            span,
            message,
        }
    }

    /// Create an "unexpected token" error.
    pub fn unexpected_token(found: Option<&Token>, context: &str, span: Range<usize>) -> Self {
        let message = match found {
            Some(token) => format!("unexpected {:?} {}", token, context),
            None => format!("unexpected end of input {}", context),
        };
        Self {
            kind: if found.is_none() {
                ParseErrorKind::UnexpectedEof
            } else {
                ParseErrorKind::UnexpectedToken
            },
            span,
            message,
        }
    }

    /// Create an "invalid syntax" error.
    pub fn invalid_syntax(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind: ParseErrorKind::InvalidSyntax,
            span,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
