//! Lexer for circuit descriptions (.hw files)
//!
//! Uses Logos for fast, compile-time optimized tokenization.
//!
//! Line comments start with `#`. C-style `//` comments are not supported
//! because `/` is the negation operator and `//x` must lex as a double
//! negation.

use logos::{Logos, Span};

/// Token type for the circuit description language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    // === Comments ===
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    // === Section keywords ===
    #[token(".hardware")]
    Hardware,
    #[token(".inputs")]
    Inputs,
    #[token(".outputs")]
    Outputs,
    #[token(".latches")]
    Latches,
    #[token(".def")]
    Def,
    #[token(".update")]
    Update,
    #[token(".simulate")]
    Simulate,

    // === Operators ===
    #[token("=")]
    Equals,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,

    // === Punctuation ===
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(",")]
    Comma,

    // === Literals ===
    /// A bit row in a `.simulate` line, e.g. `0101`
    #[regex(r"[01]+", |lex| lex.slice())]
    Bits(&'src str),

    /// A signal, latch, or function name. Latch outputs carry a prime
    /// suffix (`Q'`).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*'?", |lex| lex.slice())]
    Ident(&'src str),
}

/// A token paired with its byte span in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub token: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(token: T, span: Span) -> Self {
        Self { token, span }
    }
}

/// Tokenize source code into a vector of spanned tokens
pub fn lex(source: &str) -> Result<Vec<Spanned<Token<'_>>>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                // Skip the Comment variant (it's handled by logos::skip but
                // the variant still exists)
                if !matches!(token, Token::Comment) {
                    tokens.push(Spanned::new(token, lexer.span()));
                }
            }
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    slice: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

/// Error during lexing
#[derive(Debug, Clone)]
pub struct LexError {
    pub span: Span,
    pub slice: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected character(s) '{}' at {:?}",
            self.slice, self.span
        )
    }
}

impl std::error::Error for LexError {}
