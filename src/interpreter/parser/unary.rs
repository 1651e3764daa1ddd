use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            core::{MAX_DEPTH, ParseResult, describe},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
/// - `!`  (logical not)
/// - `*`  (pointer dereference)
///
/// Unary operators are right-associative and stack, so an input like `!-x`
/// is parsed as `!( -x )`.
///
/// Each prefix operator, parenthesized group and right-hand operand nests one
/// level deeper; beyond [`MAX_DEPTH`] levels parsing stops with
/// `ParseError::TooDeep`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!" | "*") unary
///            | atom
/// ```
pub(crate) fn parse_unary<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH });
    }

    let op = match tokens.peek().map(|token| &token.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Plus) => UnaryOperator::Identity,
        Some(TokenKind::Not) => UnaryOperator::Not,
        Some(TokenKind::Asterisk) => UnaryOperator::Deref,
        _ => return parse_atom(tokens, depth),
    };

    tokens.next();
    let operand = parse_unary(tokens, depth + 1)?;

    Ok(Expr::unary(op, operand))
}

/// Parses an atom, the bottom of the precedence cascade.
///
/// Grammar:
/// ```text
///     atom := "(" expression ")"
///           | symbol ("." symbol)?
///           | string
///           | integer
/// ```
///
/// # Errors
/// - `ParseError::UnexpectedToken` if the current token starts no atom.
/// - `ParseError::ExpectedClosingParen` if a parenthesized expression is not
///   closed.
/// - `ParseError::Lex` if the current token is an error token.
pub(crate) fn parse_atom<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedToken { found: describe(None) });
    };

    match token.kind {
        TokenKind::LeftParen => parse_grouping(tokens, depth + 1),
        TokenKind::Symbol => parse_symbol(tokens, token.text),
        TokenKind::String => Ok(Expr::String { value: strip_backticks(token.text).to_string() }),
        TokenKind::Integer => Ok(Expr::integer(token.text)),
        TokenKind::Error(error) => Err(error.into()),
        _ => Err(ParseError::UnexpectedToken { found: token.to_string() }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let expr = parse_logical_or(tokens, depth)?;

    match tokens.next() {
        Some(Token { kind: TokenKind::RightParen,
                     .. }) => Ok(expr),
        Some(Token { kind: TokenKind::Error(error),
                     .. }) => Err(error.into()),
        other => Err(ParseError::ExpectedClosingParen { found: describe(other.as_ref()) }),
    }
}

/// Parses a symbol that has already been consumed, with an optional member
/// selector.
///
/// `true` and `false` become boolean literals; every other name, including
/// `nil` and the placeholder `?`, is a symbol reference.
fn parse_symbol<'src, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    match name {
        "true" => return Ok(Expr::Bool { value: true }),
        "false" => return Ok(Expr::Bool { value: false }),
        _ => {},
    }

    if !matches!(tokens.peek(), Some(Token { kind: TokenKind::Period, .. })) {
        return Ok(Expr::symbol(name));
    }
    tokens.next();

    match tokens.next() {
        Some(Token { kind: TokenKind::Symbol,
                     text, }) => Ok(Expr::Selector { object: name.to_string(),
                                                     member: text.to_string(), }),
        Some(Token { kind: TokenKind::Error(error),
                     .. }) => Err(error.into()),
        other => Err(ParseError::ExpectedMember { found: describe(other.as_ref()) }),
    }
}

/// Removes the delimiters from a string literal's source text.
fn strip_backticks(text: &str) -> &str {
    text.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(text)
}
