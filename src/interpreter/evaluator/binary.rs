/// Coercion, kind checking and dispatch for binary operators.
pub mod core;

/// Arithmetic on numbers, and string concatenation.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Logical `&&` and `||`.
pub mod logic;

/// Bitwise `&`, `|` and the shifts `<<`, `>>`.
pub mod bitwise;
