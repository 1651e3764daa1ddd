/// Represents all errors that can occur while tokenizing a predicate.
///
/// The lexer stops at the first error; the error token that carries it is the
/// last token of the stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// A backtick string literal without its closing backtick.
    #[error("reached end of input while reading string")]
    UnterminatedString,
    /// A token that is incomplete on its own, such as a lone `=` or a base
    /// prefix like `0b` without digits.
    #[error("expected '{0}'")]
    Expected(&'static str),
    /// Placeholder produced by the generated lexer before the offending
    /// character is known.
    #[default]
    #[error("unrecognized input")]
    Unrecognized,
}
