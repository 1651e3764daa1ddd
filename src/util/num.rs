use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Width in bits of the integer kinds; shift counts must stay below it.
pub const INTEGER_BITS: u32 = 64;

/// Splits an integer literal into its radix and its digits.
///
/// Recognized forms are `0b`/`0B` (binary), `0h`/`0H` (hexadecimal), `0o`/`0O`
/// or a bare leading `0` (octal), and decimal otherwise. Underscores are left
/// in place.
///
/// ## Example
/// ```
/// use refine::util::num::split_radix;
///
/// assert_eq!(split_radix("0hFF"), (16, "FF"));
/// assert_eq!(split_radix("017"), (8, "17"));
/// assert_eq!(split_radix("0"), (10, "0"));
/// assert_eq!(split_radix("1_000"), (10, "1_000"));
/// ```
#[must_use]
pub fn split_radix(text: &str) -> (u32, &str) {
    let Some(rest) = text.strip_prefix('0') else {
        return (10, text);
    };

    match rest.as_bytes().first() {
        None => (10, text),
        Some(b'b' | b'B') => (2, &rest[1..]),
        Some(b'h' | b'H') => (16, &rest[1..]),
        Some(b'o' | b'O') => (8, &rest[1..]),
        Some(_) => (8, rest),
    }
}

/// Decodes an integer literal into a signed 64-bit integer.
///
/// The text must be lexically valid, which the lexer guarantees for every
/// integer token. Values that do not fit an `i64` are rejected.
///
/// ## Errors
/// Returns `EvalError::LiteralTooLarge` when the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use refine::{error::EvalError, util::num::parse_integer_literal};
///
/// assert_eq!(parse_integer_literal("1_000_000").unwrap(), 1_000_000);
/// assert_eq!(parse_integer_literal("0b1010").unwrap(), 10);
/// assert_eq!(parse_integer_literal("0h_ff").unwrap(), 255);
/// assert_eq!(parse_integer_literal("0o17").unwrap(), 15);
/// assert!(matches!(parse_integer_literal("9223372036854775808"),
///                  Err(EvalError::LiteralTooLarge { .. })));
/// ```
pub fn parse_integer_literal(text: &str) -> EvalResult<i64> {
    let (radix, digits) = split_radix(text);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    i64::from_str_radix(&digits, radix).map_err(|_| EvalError::LiteralTooLarge { text:
                                                                                     text.to_string() })
}

/// Converts a signed shift count to `u32` if it is a valid shift amount.
///
/// ## Errors
/// Returns `EvalError::ShiftOutOfRange` for negative counts and counts of
/// [`INTEGER_BITS`] or more.
pub fn i64_to_shift_count(count: i64) -> EvalResult<u32> {
    u32::try_from(count).ok()
                        .filter(|&count| count < INTEGER_BITS)
                        .ok_or_else(|| EvalError::ShiftOutOfRange { count: count.to_string() })
}

/// Converts an unsigned shift count to `u32` if it is a valid shift amount.
///
/// ## Errors
/// Returns `EvalError::ShiftOutOfRange` for counts of [`INTEGER_BITS`] or more.
pub fn u64_to_shift_count(count: u64) -> EvalResult<u32> {
    u32::try_from(count).ok()
                        .filter(|&count| count < INTEGER_BITS)
                        .ok_or_else(|| EvalError::ShiftOutOfRange { count: count.to_string() })
}

/// Converts an `isize` to `i64`, saturating on targets wider than 64 bits.
///
/// ## Example
/// ```
/// use refine::util::num::isize_to_i64;
///
/// assert_eq!(isize_to_i64(-3), -3);
/// assert_eq!(isize_to_i64(isize::MIN), i64::MIN);
/// ```
#[must_use]
pub fn isize_to_i64(n: isize) -> i64 {
    i64::try_from(n).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX })
}

/// Converts a `usize` to `u64`, saturating on targets wider than 64 bits.
///
/// ## Example
/// ```
/// use refine::util::num::usize_to_u64;
///
/// assert_eq!(usize_to_u64(7), 7);
/// ```
#[must_use]
pub fn usize_to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}
