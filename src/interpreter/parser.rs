/// Core parsing entry points.
///
/// Provides [`core::parse`], which turns a whole token stream into one
/// predicate tree, and [`core::parse_expression`], the start of the
/// precedence cascade.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical or down to
/// multiplicative operators. Every level is right-associative.
pub mod binary;

/// Unary operator and atom parsing.
///
/// Handles prefix operators and the atoms at the bottom of the cascade:
/// parenthesized expressions, symbols and member selectors, and literals.
pub mod unary;
