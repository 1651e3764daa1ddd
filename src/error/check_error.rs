use crate::error::{Error, EvalError, LexError, ParseError};

/// The reason a field predicate did not hold.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Cause {
    /// The predicate text could not be tokenized.
    #[error("could not be lexed: {0}")]
    Lex(LexError),
    /// The predicate text is not a valid predicate.
    #[error("could not be parsed: {0}")]
    Parse(ParseError),
    /// The predicate could not be evaluated, or did not produce a boolean.
    #[error("could not be evaluated: {0}")]
    Eval(EvalError),
    /// The predicate evaluated to `false`.
    #[error("not met")]
    Unsatisfied,
}

impl From<Error> for Cause {
    fn from(error: Error) -> Self {
        match error {
            Error::Lex(error) => Self::Lex(error),
            Error::Parse(error) => Self::Parse(error),
            Error::Eval(error) => Self::Eval(error),
        }
    }
}

impl From<EvalError> for Cause {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

/// A failed field check.
///
/// Identifies the structure type, the field, the field's value at the time of
/// the check, the predicate text, and why the predicate failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{type_name}.{field} = {value}, {predicate:?} {cause}")]
pub struct CheckError {
    /// Name of the checked type.
    pub type_name: String,
    /// Name of the field whose predicate failed.
    pub field:     String,
    /// The field's value, rendered for diagnostics.
    pub value:     String,
    /// The predicate text.
    pub predicate: String,
    /// Why the predicate failed.
    #[source]
    pub cause:     Cause,
}

impl CheckError {
    /// Returns `true` when the predicate evaluated cleanly to `false`.
    #[must_use]
    pub const fn is_unsatisfied(&self) -> bool {
        matches!(self.cause, Cause::Unsatisfied)
    }
}
