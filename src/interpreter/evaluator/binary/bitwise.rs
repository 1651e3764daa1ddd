use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{i64_to_shift_count, u64_to_shift_count},
};

impl Context<'_> {
    /// Evaluates a bitwise operation on two integers of one kind.
    ///
    /// `&` and `|` combine bits. `<<` and `>>` shift the left operand by the
    /// right one; a signed right shift is arithmetic, so the sign is kept.
    /// The shift count must lie in `0..64`.
    ///
    /// # Errors
    /// - `EvalError::ShiftOutOfRange` for a negative or too large shift count.
    /// - `EvalError::InvalidType` if the operands are not integers.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let shifted = Context::eval_bitwise(BinaryOperator::ShiftLeft, &Value::Int(11), &Value::Int(2));
    /// assert_eq!(shifted.unwrap(), Value::Int(44));
    ///
    /// let masked = Context::eval_bitwise(BinaryOperator::BitAnd, &Value::Uint(0b1100), &Value::Uint(0b1010));
    /// assert_eq!(masked.unwrap(), Value::Uint(0b1000));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => {
                let result = match op {
                    BinaryOperator::BitAnd => a & b,
                    BinaryOperator::BitOr => a | b,
                    BinaryOperator::ShiftLeft => a << i64_to_shift_count(*b)?,
                    BinaryOperator::ShiftRight => a >> i64_to_shift_count(*b)?,
                    _ => unreachable!("eval_bitwise used with non bitwise operator"),
                };
                Ok(Value::Int(result))
            },
            (Value::Uint(a), Value::Uint(b)) => {
                let result = match op {
                    BinaryOperator::BitAnd => a & b,
                    BinaryOperator::BitOr => a | b,
                    BinaryOperator::ShiftLeft => a << u64_to_shift_count(*b)?,
                    BinaryOperator::ShiftRight => a >> u64_to_shift_count(*b)?,
                    _ => unreachable!("eval_bitwise used with non bitwise operator"),
                };
                Ok(Value::Uint(result))
            },
            _ => Err(EvalError::InvalidType { op:   op.as_str(),
                                              kind: left.kind(), }),
        }
    }
}
