use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// A parsing function for one precedence level, given the current nesting
/// depth.
type Level<I> = fn(&mut Peekable<I>, usize) -> ParseResult<Expr>;

/// Parses one right-associative precedence level.
///
/// Parses an operand at the next-higher level; if the current token is one of
/// this level's operators, consumes it and parses the right-hand side by
/// recursing into this level again. `a - b - c` therefore groups as
/// `a - (b - c)`. Every right-hand side is one level deeper than its left.
///
/// The rule is: `level := operand (op level)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
/// - `operand`: Parser for the next-higher precedence level.
/// - `level`: Parser for this level, used for the right-hand side.
/// - `accepts`: Which binary operators belong to this level.
fn parse_right_assoc<'src, I>(tokens: &mut Peekable<I>,
                              depth: usize,
                              operand: Level<I>,
                              level: Level<I>,
                              accepts: fn(BinaryOperator) -> bool)
                              -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    let left = operand(tokens, depth)?;

    let Some(op) = tokens.peek()
                         .and_then(|token| token_to_binary_operator(&token.kind))
                         .filter(|&op| accepts(op))
    else {
        return Ok(left);
    };

    tokens.next();
    let right = level(tokens, depth + 1)?;

    Ok(Expr::binary(left, op, right))
}

/// Parses logical OR expressions.
///
/// Lowest precedence level of the grammar.
///
/// Grammar: `or := and ("||" or)?`
pub fn parse_logical_or<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_right_assoc(tokens, depth, parse_logical_and, parse_logical_or, |op| {
        matches!(op, BinaryOperator::Or)
    })
}

/// Parses logical AND expressions.
///
/// Grammar: `and := comparison ("&&" and)?`
pub fn parse_logical_and<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_right_assoc(tokens, depth, parse_comparison, parse_logical_and, |op| {
        matches!(op, BinaryOperator::And)
    })
}

/// Parses relational and equality operators.
///
/// All six comparison operators share one level; at most one of them can
/// match the current token.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// comparison)?`
pub fn parse_comparison<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_right_assoc(tokens, depth, parse_additive, parse_comparison, |op| {
        matches!(op,
                 BinaryOperator::Equal
                 | BinaryOperator::NotEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition-level expressions: `+`, `-` and bitwise `|`.
///
/// Grammar: `additive := multiplicative (("+" | "-" | "|") additive)?`
pub fn parse_additive<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_right_assoc(tokens, depth, parse_multiplicative, parse_additive, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::BitOr)
    })
}

/// Parses multiplication-level expressions: `*`, `/`, bitwise `&` and the
/// shifts `<<` and `>>`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "&" | "<<" | ">>")
/// multiplicative)?`
pub fn parse_multiplicative<'src, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_right_assoc(tokens, depth, parse_unary, parse_multiplicative, |op| {
        matches!(op,
                 BinaryOperator::Mul
                 | BinaryOperator::Div
                 | BinaryOperator::BitAnd
                 | BinaryOperator::ShiftLeft
                 | BinaryOperator::ShiftRight)
    })
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator.
///
/// # Example
/// ```
/// use refine::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::Not), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::LogicalOr => Some(BinaryOperator::Or),
        TokenKind::LogicalAnd => Some(BinaryOperator::And),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::BitOr => Some(BinaryOperator::BitOr),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::BitAnd => Some(BinaryOperator::BitAnd),
        TokenKind::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(BinaryOperator::ShiftRight),
        _ => None,
    }
}
