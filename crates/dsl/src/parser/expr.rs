//! Expression parsing - precedence climbing over the boolean operators.

use crate::ast::Expr;
use crate::lexer::Token;

use super::{ParseError, TokenStream};

/// Binary operator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Or,
    And,
}

/// Get binary operator metadata (precedence and operator).
///
/// Higher precedence = tighter binding, so `*` binds tighter than `+`.
/// Both operators associate left.
fn binary_op_info(token: &Token) -> Option<(u8, BinOp)> {
    match token {
        Token::Plus => Some((10, BinOp::Or)),
        Token::Star => Some((20, BinOp::And)),
        _ => None,
    }
}

/// Parse a full expression.
pub(super) fn parse_expr(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    parse_pratt(stream, 0)
}

/// Pratt parser - handles binary operators with precedence climbing.
fn parse_pratt(stream: &mut TokenStream, min_prec: u8) -> Result<Expr, ParseError> {
    let mut left = parse_prefix(stream)?;

    while let Some(token) = stream.peek() {
        let Some((prec, op)) = binary_op_info(token) else {
            break;
        };
        if prec < min_prec {
            break;
        }
        stream.advance();

        let right = parse_pratt(stream, prec + 1)?;
        left = match op {
            BinOp::Or => Expr::or(left, right),
            BinOp::And => Expr::and(left, right),
        };
    }

    Ok(left)
}

/// Parse prefix expressions (negation, then atoms).
fn parse_prefix(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    if stream.check(&Token::Slash) {
        stream.advance();
        let operand = parse_prefix(stream)?;
        Ok(Expr::not(operand))
    } else {
        parse_atom(stream)
    }
}

/// Parse an atom: a signal reference, a function call, or a
/// parenthesized expression.
fn parse_atom(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let span = stream.current_span();
    match stream.advance() {
        Some(Token::Ident(name)) => {
            if stream.check(&Token::ParenOpen) {
                let args = parse_call_args(stream)?;
                Ok(Expr::call(*name, args))
            } else {
                Ok(Expr::signal(*name))
            }
        }
        Some(Token::ParenOpen) => {
            let inner = parse_expr(stream)?;
            stream.expect(Token::ParenClose)?;
            Ok(inner)
        }
        other => Err(ParseError::unexpected_token(other, "in expression", span)),
    }
}

/// Parse function call arguments, including the parentheses.
fn parse_call_args(stream: &mut TokenStream) -> Result<Vec<Expr>, ParseError> {
    stream.expect(Token::ParenOpen)?;

    let mut args = Vec::new();
    if !stream.check(&Token::ParenClose) {
        loop {
            args.push(parse_expr(stream)?);
            if stream.check(&Token::Comma) {
                stream.advance();
            } else {
                break;
            }
        }
    }

    stream.expect(Token::ParenClose)?;
    Ok(args)
}
