use crate::error::LexError;

/// Represents all errors that can occur while parsing a predicate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token stream ended in an error token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The current token begins no atom (parenthesized expression, symbol,
    /// string or integer literal).
    #[error("could not parse expression at {found}")]
    UnexpectedToken {
        /// Source text of the token found instead, or `end of input`.
        found: String,
    },
    /// A parenthesized expression was not closed.
    #[error("expected ')' but found {found}")]
    ExpectedClosingParen {
        /// Source text of the token found instead, or `end of input`.
        found: String,
    },
    /// A `.` was not followed by a member name.
    #[error("expected member name after '.' but found {found}")]
    ExpectedMember {
        /// Source text of the token found instead, or `end of input`.
        found: String,
    },
    /// Groups, prefix operators or operator chains nest too deeply.
    #[error("expression nests deeper than {limit} levels")]
    TooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// The predicate was complete but tokens remained.
    #[error("unparsed trailing tokens: {}", tokens.join(" "))]
    TrailingTokens {
        /// Source text of each remaining token, in order.
        tokens: Vec<String>,
    },
}
