/// The evaluator module walks syntax trees and computes values.
///
/// The evaluator resolves symbols against a symbol table, applies operators
/// through the per-kind operation tables, and reports the first error it
/// meets. It holds no state beyond the symbol table it was given.
///
/// # Responsibilities
/// - Evaluates every node kind of the syntax tree, eagerly and left to right.
/// - Enforces the same-kind rule for binary operators after nil coercion.
/// - Reports evaluation errors such as unknown symbols or kind mismatches.
pub mod evaluator;
/// The lexer module tokenizes predicate text.
///
/// The lexer reads the raw predicate and produces a stream of tokens, each
/// carrying its kind and the exact source text it covers. The stream always
/// ends with one end-of-input or one error token.
///
/// # Responsibilities
/// - Recognizes operators, punctuation, symbols and literals.
/// - Skips whitespace between tokens.
/// - Reports lexical errors as a terminal error token.
pub mod lexer;
/// The parser module builds syntax trees from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// pulls tokens one at a time and requires the predicate to cover the entire
/// input.
pub mod parser;
/// Compiled predicates.
///
/// Couples predicate text with its syntax tree so it can be evaluated against
/// many symbol tables.
pub mod predicate;
/// The value module defines the runtime data model.
///
/// Declares the kind-tagged `Value` union, the coercion rule for the nil
/// constant, and the mapping from Rust types onto value kinds.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Kind` tag.
/// - Renders values for diagnostics.
/// - Converts host data into values through `IntoValue`.
pub mod value;
