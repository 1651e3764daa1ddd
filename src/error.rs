/// Lexing errors.
///
/// Raised while splitting predicate text into tokens: unterminated string
/// literals, a lone `=`, or characters that begin no token at all.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all errors that can occur while building a syntax tree from the
/// token stream: atoms that match no production, a missing closing
/// parenthesis, tokens left over after a complete predicate, and lexing
/// errors surfaced through the token stream.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all errors that can be raised while walking a syntax tree against
/// a symbol table: unknown symbols, operand kind mismatches, operators applied
/// to unsupported kinds, arithmetic faults and non-boolean verdicts.
pub mod eval_error;
/// Validation errors.
///
/// Wraps any failure of a field predicate together with the structure, field
/// and predicate it belongs to.
pub mod check_error;

pub use check_error::{Cause, CheckError};
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure on the way from predicate text to a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The predicate text could not be split into tokens.
    #[error("could not be lexed: {0}")]
    Lex(LexError),
    /// The token stream did not form a predicate.
    #[error("could not be parsed: {0}")]
    Parse(ParseError),
    /// The syntax tree could not be evaluated.
    #[error("could not be evaluated: {0}")]
    Eval(#[from] EvalError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(error) => Self::Lex(error),
            other => Self::Parse(other),
        }
    }
}
