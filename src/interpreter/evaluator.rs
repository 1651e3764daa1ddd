/// Core evaluation logic.
///
/// Contains the evaluation context, the walk over syntax trees, symbol and
/// member resolution, and literal decoding.
pub mod core;

/// The symbol table evaluations run against.
pub mod symbols;

/// Unary operator evaluation.
///
/// Implements negation, identity, logical not and pointer dereference.
pub mod unary;

/// Binary operator evaluation.
///
/// Applies the nil-constant coercion and the same-kind rule, then dispatches
/// to the arithmetic, comparison, logical and bitwise operation tables.
pub mod binary;
