/// Numeric conversion helpers.
///
/// This module decodes integer literal text into native integers and performs
/// the checked conversions the evaluator needs (such as shift counts), so that
/// no conversion silently truncates or wraps.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range.
pub mod num;
