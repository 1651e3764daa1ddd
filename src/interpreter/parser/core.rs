use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_logical_or,
    },
};

/// Deepest nesting of groups, prefix operators and right-hand operands the
/// parser accepts.
pub const MAX_DEPTH: usize = 128;

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete predicate from a token stream.
///
/// The stream is consumed through its terminal token. A predicate must cover
/// the entire input: tokens left over after a complete expression are
/// reported together as `ParseError::TrailingTokens`. An error token anywhere
/// in the stream surfaces as `ParseError::Lex`.
///
/// # Parameters
/// - `tokens`: Any source of tokens, such as [`Tokens`] or the vector
///   returned by [`tokenize`].
///
/// # Returns
/// The root of the predicate tree.
///
/// # Example
/// ```
/// use refine::interpreter::{lexer::Tokens, parser::core::parse};
///
/// let expr = parse(Tokens::new("doc", "2 + 3 * 4")).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse(Tokens::new("doc", "2 3")).is_err());
/// ```
///
/// [`Tokens`]: crate::interpreter::lexer::Tokens
/// [`tokenize`]: crate::interpreter::lexer::tokenize
pub fn parse<'src, I>(tokens: I) -> ParseResult<Expr>
    where I: IntoIterator<Item = Token<'src>>
{
    let mut tokens = tokens.into_iter().peekable();
    let expr = parse_expression(&mut tokens)?;
    expect_end(&mut tokens)?;

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point of the precedence cascade. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through
/// the levels above it.
///
/// Grammar: `expression := logical_or`
///
/// # Errors
/// Besides grammar violations, returns `ParseError::TooDeep` when the input
/// nests deeper than [`MAX_DEPTH`].
pub fn parse_expression<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token<'src>>
{
    parse_logical_or(tokens, 0)
}

/// Drains the rest of the stream, collecting anything before `Eof`.
fn expect_end<'src, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = Token<'src>>
{
    let mut trailing = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Error(error) => return Err(error.into()),
            _ => trailing.push(token.text.to_string()),
        }
    }

    if trailing.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TrailingTokens { tokens: trailing })
    }
}

/// Describes a token for an error message, or `end of input` when the stream
/// has run dry.
pub(in crate::interpreter::parser) fn describe(token: Option<&Token<'_>>) -> String {
    token.map_or_else(|| "end of input".to_string(), ToString::to_string)
}
