use std::iter::FusedIterator;

use logos::Logos;

use crate::error::LexError;

/// Raw lexemes recognized by the generated lexer.
///
/// This is the vocabulary the `logos` state machine matches. It is mapped onto
/// [`TokenKind`] by [`Tokens`], which also appends the terminal `Eof` or
/// `Error` token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\x0B]+")]
enum Lexeme {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `.`
    #[token(".")]
    Period,
    /// `,`
    #[token(",")]
    Comma,
    /// `||`
    #[token("||")]
    LogicalOr,
    /// `&&`
    #[token("&&")]
    LogicalAnd,
    /// `==`
    #[token("==")]
    Equal,
    /// A lone `=`; always rejected.
    #[token("=", lone_equals)]
    Assign,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `!`
    #[token("!")]
    Not,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `|`
    #[token("|")]
    BitOr,
    /// `&`
    #[token("&")]
    BitAnd,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// Integer literals: decimal `1_000`, binary `0b1010`, hex `0hFF`, octal
    /// `0o17` or `017`.
    #[regex(r"[1-9](_?[0-9])*")]
    #[regex(r"0_?[0-7](_?[0-7])*")]
    #[token("0")]
    #[token("0b", prefixed_digits)]
    #[token("0B", prefixed_digits)]
    #[token("0h", prefixed_digits)]
    #[token("0H", prefixed_digits)]
    #[token("0o", prefixed_digits)]
    #[token("0O", prefixed_digits)]
    Integer,
    /// Backtick string literals; there are no escape sequences.
    #[token("`", string_body)]
    String,
    /// Symbols: a letter followed by letters and digits.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*")]
    Symbol,
    /// `?`, the placeholder for the value under test.
    #[token("?")]
    Placeholder,
}

/// Consumes a string literal after its opening backtick.
///
/// # Errors
/// Returns `LexError::UnterminatedString` when the input ends first; the
/// remainder of the input becomes part of the error token.
fn string_body(lex: &mut logos::Lexer<'_, Lexeme>) -> Result<(), LexError> {
    if let Some(end) = lex.remainder().find('`') {
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.bump(lex.remainder().len());
        Err(LexError::UnterminatedString)
    }
}

/// Consumes the digits of an integer literal after its base prefix.
///
/// Digits may be separated by single underscores, and one underscore may
/// follow the prefix.
///
/// # Errors
/// Returns `LexError::Expected` naming the digit kind when the prefix is not
/// followed by a digit of its base.
fn prefixed_digits(lex: &mut logos::Lexer<'_, Lexeme>) -> Result<(), LexError> {
    let (radix, expected) = match lex.slice().chars().nth(1) {
        Some('b' | 'B') => (2, "binary digit"),
        Some('h' | 'H') => (16, "hexadecimal digit"),
        _ => (8, "octal digit"),
    };

    match digits_len(lex.remainder(), radix) {
        0 => Err(LexError::Expected(expected)),
        len => {
            lex.bump(len);
            Ok(())
        },
    }
}

/// Length of the leading `_?digit(_?digit)*` run of `text` in `radix`.
fn digits_len(text: &str, radix: u32) -> usize {
    let bytes = text.as_bytes();
    let mut index = 0;
    let mut len = 0;

    loop {
        if bytes.get(index) == Some(&b'_') {
            index += 1;
        }
        match bytes.get(index) {
            Some(&byte) if char::from(byte).is_digit(radix) => {
                index += 1;
                len = index;
            },
            _ => return len,
        }
    }
}

/// Rejects a single `=`; only `==` is an operator.
fn lone_equals(_: &mut logos::Lexer<'_, Lexeme>) -> Result<(), LexError> {
    Err(LexError::Expected("=="))
}

/// The kind of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `|`
    BitOr,
    /// `&`
    BitAnd,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// An integer literal; the token text holds the digits as written.
    Integer,
    /// A string literal; the token text includes both backticks.
    String,
    /// A symbol, including the `?` placeholder.
    Symbol,
    /// End of input. Always the last token of a successful stream.
    Eof,
    /// A lexing error. Always the last token of a failed stream.
    Error(LexError),
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::LeftParen => Self::LeftParen,
            Lexeme::RightParen => Self::RightParen,
            Lexeme::Period => Self::Period,
            Lexeme::Comma => Self::Comma,
            Lexeme::LogicalOr => Self::LogicalOr,
            Lexeme::LogicalAnd => Self::LogicalAnd,
            Lexeme::Equal => Self::Equal,
            Lexeme::Assign => Self::Error(LexError::Expected("==")),
            Lexeme::NotEqual => Self::NotEqual,
            Lexeme::Less => Self::Less,
            Lexeme::LessEqual => Self::LessEqual,
            Lexeme::Greater => Self::Greater,
            Lexeme::GreaterEqual => Self::GreaterEqual,
            Lexeme::Not => Self::Not,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Asterisk => Self::Asterisk,
            Lexeme::Slash => Self::Slash,
            Lexeme::BitOr => Self::BitOr,
            Lexeme::BitAnd => Self::BitAnd,
            Lexeme::ShiftLeft => Self::ShiftLeft,
            Lexeme::ShiftRight => Self::ShiftRight,
            Lexeme::Integer => Self::Integer,
            Lexeme::String => Self::String,
            Lexeme::Symbol | Lexeme::Placeholder => Self::Symbol,
        }
    }
}

/// A lexical token: its kind plus the exact source text it was lexed from.
///
/// For `Eof` the text is empty; for `Error` it is the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind: TokenKind,
    /// The source slice the token covers.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// Returns `true` for the `Eof` and `Error` tokens that end a stream.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error(_))
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// A pull-based token stream over one predicate.
///
/// Each call to `next` lexes exactly one token, so at most one token is ever
/// in flight between the lexer and its consumer. The stream ends with exactly
/// one `Eof` or `Error` token and is fused afterwards. Dropping it early is
/// always safe.
///
/// # Example
/// ```
/// use refine::interpreter::lexer::{TokenKind, Tokens};
///
/// let kinds: Vec<_> = Tokens::new("doc", "a >= 0").map(|token| token.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Symbol, TokenKind::GreaterEqual, TokenKind::Integer, TokenKind::Eof]);
/// ```
pub struct Tokens<'src> {
    name:     &'src str,
    lexer:    logos::Lexer<'src, Lexeme>,
    finished: bool,
}

impl<'src> Tokens<'src> {
    /// Starts lexing `source`. `name` only labels diagnostics.
    #[must_use]
    pub fn new(name: &'src str, source: &'src str) -> Self {
        Self { name,
               lexer: Lexeme::lexer(source),
               finished: false }
    }

    /// The diagnostic name given at construction.
    #[must_use]
    pub const fn name(&self) -> &'src str {
        self.name
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = match self.lexer.next() {
            None => Token::new(TokenKind::Eof, ""),
            Some(Ok(lexeme)) => Token::new(lexeme.into(), self.lexer.slice()),
            Some(Err(error)) => {
                let text = self.lexer.slice();
                let error = match error {
                    LexError::Unrecognized => text.chars()
                                                  .next()
                                                  .map_or(LexError::Unrecognized,
                                                          LexError::UnexpectedCharacter),
                    other => other,
                };
                Token::new(TokenKind::Error(error), text)
            },
        };

        self.finished = token.is_terminal();
        tracing::trace!(lexer = self.name, kind = ?token.kind, text = token.text, "token");
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenizes a whole predicate eagerly.
///
/// The returned vector always ends with exactly one `Eof` or `Error` token.
///
/// # Example
/// ```
/// use refine::{error::LexError, interpreter::lexer::{TokenKind, tokenize}};
///
/// let tokens = tokenize("doc", "`abc");
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Error(LexError::UnterminatedString));
/// ```
#[must_use]
pub fn tokenize<'src>(name: &'src str, source: &'src str) -> Vec<Token<'src>> {
    Tokens::new(name, source).collect()
}
