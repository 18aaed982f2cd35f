//! Token stream wrapper for the hand-written parser.

use std::ops::Range;

use crate::lexer::{Spanned, Token};

use super::ParseError;

/// Token stream with lookahead and position tracking.
///
/// Each token carries its byte span from the source, so error messages
/// can point at the offending location.
pub struct TokenStream<'src> {
    tokens: &'src [Spanned<Token<'src>>],
    pos: usize,
}

impl<'src> TokenStream<'src> {
    /// Create a new token stream.
    pub fn new(tokens: &'src [Spanned<Token<'src>>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<&'src Token<'src>> {
        self.tokens.get(self.pos).map(|spanned| &spanned.token)
    }

    /// Advance to the next token and return the current one.
    pub fn advance(&mut self) -> Option<&'src Token<'src>> {
        let token = self.tokens.get(self.pos).map(|spanned| &spanned.token);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token matches the expected token kind.
    pub fn check(&self, expected: &Token) -> bool {
        matches!(self.peek(), Some(t) if std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    /// Expect a specific token and advance past it.
    ///
    /// Returns an error if the token doesn't match.
    pub fn expect(&mut self, expected: Token) -> Result<Range<usize>, ParseError> {
        if self.check(&expected) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::expected_token(
                &expected,
                self.peek(),
                self.current_span(),
            ))
        }
    }

    /// Check if we've reached the end of the token stream.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte range of the current token, or of the end of input at EOF.
    pub fn current_span(&self) -> Range<usize> {
        if let Some(spanned) = self.tokens.get(self.pos) {
            spanned.span.clone()
        } else {
            match self.tokens.last() {
                Some(spanned) => spanned.span.end..spanned.span.end,
                None => 0..0,
            }
        }
    }
}
