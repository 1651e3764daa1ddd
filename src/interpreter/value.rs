/// Runtime values and their kinds.
///
/// Defines the `Value` enum, the `Kind` tag operators dispatch on, the
/// `Record` payload of struct values, and the nil-constant coercion applied
/// before every binary operation.
pub mod core;
/// Conversion of host data into values.
///
/// Defines the `IntoValue` trait, which maps Rust field types onto value
/// kinds when a symbol table is built from a structure.
pub mod convert;
