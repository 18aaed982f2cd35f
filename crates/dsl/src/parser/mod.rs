//! Hand-written recursive descent parser for .hw circuit descriptions.
//!
//! The grammar is section-oriented: `.hardware`, `.inputs`, `.outputs`,
//! an optional `.latches`, any number of `.def` lines, then `.update`
//! and `.simulate`. Lines are not terminated; a section ends where the
//! next section keyword begins, and an update ends where the next
//! `name =` entry begins.

mod error;
mod expr;
mod stream;

pub use error::{ParseError, ParseErrorKind};
pub use stream::TokenStream;

use crate::ast::{CircuitDef, Definition, TraceDef, Update};
use crate::lexer::{lex, Token};

/// Parse a complete .hw source file.
pub fn parse(source: &str) -> Result<CircuitDef, ParseError> {
    let tokens = lex(source).map_err(|e| {
        ParseError::invalid_syntax(format!("unexpected character(s) '{}'", e.slice), e.span)
    })?;
    let mut stream = TokenStream::new(&tokens);

    let circuit = parse_circuit(&mut stream)?;

    if !stream.at_end() {
        return Err(ParseError::unexpected_token(
            stream.peek(),
            "after the .simulate section",
            stream.current_span(),
        ));
    }

    Ok(circuit)
}

fn parse_circuit(stream: &mut TokenStream) -> Result<CircuitDef, ParseError> {
    stream.expect(Token::Hardware)?;
    let name = ident(stream)?;

    stream.expect(Token::Inputs)?;
    let inputs = ident_list(stream);

    stream.expect(Token::Outputs)?;
    let outputs = ident_list(stream);

    let latches = if stream.check(&Token::Latches) {
        stream.advance();
        ident_list(stream)
    } else {
        Vec::new()
    };

    let mut definitions = Vec::new();
    while stream.check(&Token::Def) {
        stream.advance();
        definitions.push(parse_definition(stream)?);
    }

    stream.expect(Token::Update)?;
    let updates = parse_updates(stream)?;

    stream.expect(Token::Simulate)?;
    let siminputs = parse_simulate(stream)?;

    Ok(CircuitDef {
        name,
        inputs,
        outputs,
        latches,
        definitions,
        updates,
        siminputs,
    })
}

/// `.def name(params) = expr`
fn parse_definition(stream: &mut TokenStream) -> Result<Definition, ParseError> {
    let name = ident(stream)?;

    stream.expect(Token::ParenOpen)?;
    let mut params = Vec::new();
    if !stream.check(&Token::ParenClose) {
        loop {
            params.push(ident(stream)?);
            if stream.check(&Token::Comma) {
                stream.advance();
            } else {
                break;
            }
        }
    }
    stream.expect(Token::ParenClose)?;

    stream.expect(Token::Equals)?;
    let body = expr::parse_expr(stream)?;

    Ok(Definition { name, params, body })
}

/// Update lines, one `target = expr` per entry, until the next section.
fn parse_updates(stream: &mut TokenStream) -> Result<Vec<Update>, ParseError> {
    let mut updates = Vec::new();
    while matches!(stream.peek(), Some(Token::Ident(_))) {
        let target = ident(stream)?;
        stream.expect(Token::Equals)?;
        let expr = expr::parse_expr(stream)?;
        updates.push(Update { target, expr });
    }
    Ok(updates)
}

/// Simulate lines, one `signal = bits` per entry.
fn parse_simulate(stream: &mut TokenStream) -> Result<Vec<TraceDef>, ParseError> {
    let mut traces = Vec::new();
    while matches!(stream.peek(), Some(Token::Ident(_))) {
        let signal = ident(stream)?;
        stream.expect(Token::Equals)?;

        let span = stream.current_span();
        let bits = match stream.advance() {
            Some(Token::Bits(row)) => row.chars().map(|c| c == '1').collect(),
            other => {
                return Err(ParseError::unexpected_token(
                    other,
                    "in .simulate line (expected a row of 0s and 1s)",
                    span,
                ));
            }
        };

        traces.push(TraceDef { signal, bits });
    }
    Ok(traces)
}

/// Consume an identifier token.
fn ident(stream: &mut TokenStream) -> Result<String, ParseError> {
    let span = stream.current_span();
    match stream.advance() {
        Some(Token::Ident(name)) => Ok((*name).to_string()),
        other => Err(ParseError::unexpected_token(
            other,
            "where a name was expected",
            span,
        )),
    }
}

/// Consume zero or more identifiers.
fn ident_list(stream: &mut TokenStream) -> Vec<String> {
    let mut names = Vec::new();
    while let Some(Token::Ident(name)) = stream.peek() {
        names.push((*name).to_string());
        stream.advance();
    }
    names
}
