//! # refine
//!
//! refine validates data against boolean predicates written as short
//! expression strings. A predicate such as `low <= high && low >= 0` is
//! tokenized, parsed into a syntax tree with a precedence-based
//! recursive-descent parser, and evaluated against a symbol table of
//! dynamically kinded values.
//!
//! Structures declared with [`refined!`] carry one predicate per field and are
//! validated with [`check`]; single values are validated with
//! [`check_value`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed predicates.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// a predicate as a tree. The tree is built by the parser and read by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Renders trees in a fully parenthesized form.
pub mod ast;
/// Provides the error types of every stage.
///
/// This module defines the errors raised while lexing, parsing or evaluating
/// a predicate, and the error returned when a field check fails.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Wraps stage errors with the structure, field and predicate they belong
///   to.
pub mod error;
/// Orchestrates the predicate engine.
///
/// This module ties together lexing, parsing, evaluation and the value model
/// to turn predicate text into a value.
pub mod interpreter;
/// Validation of structures and single values.
///
/// Builds symbol tables from Rust data and checks predicates against them,
/// failing fast on the first predicate that does not hold.
pub mod refine;
/// Shared utilities.
pub mod util;

pub use crate::{
    error::{Cause, CheckError, Error},
    interpreter::{
        evaluator::symbols::SymbolTable,
        predicate::Predicate,
        value::{
            convert::IntoValue,
            core::{Kind, Record, Value},
        },
    },
    refine::{Field, Refine, check, check_value},
};

/// Lexes, parses and evaluates a predicate in one call.
///
/// # Parameters
/// - `name`: Diagnostic name for the predicate.
/// - `source`: The predicate text.
/// - `symbols`: The symbol table to evaluate against.
///
/// # Returns
/// The value the predicate evaluates to. It need not be a boolean.
///
/// # Example
/// ```
/// use refine::{SymbolTable, Value, evaluate};
///
/// let symbols = SymbolTable::new().with("x", 3_i64);
///
/// assert_eq!(evaluate("doc", "2 + x * 4", &symbols).unwrap(), Value::Int(14));
/// assert_eq!(evaluate("doc", "10 - 3 - 2", &symbols).unwrap(), Value::Int(9));
/// assert!(evaluate("doc", "foo", &symbols).is_err());
/// ```
pub fn evaluate(name: &str, source: &str, symbols: &SymbolTable) -> Result<Value, Error> {
    let predicate = Predicate::compile(name, source)?;
    Ok(predicate.evaluate(symbols)?)
}
