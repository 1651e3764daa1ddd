use std::ops::{Add, Div, Mul, Sub};

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation on two values of one kind.
    ///
    /// Signed and unsigned integers use checked arithmetic: overflow is
    /// `EvalError::Overflow` and division by zero is
    /// `EvalError::DivisionByZero`. Integer division truncates toward zero.
    /// Floats follow IEEE semantics. `+` also concatenates strings. The
    /// operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand, of the same kind.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &Value::Int(-7), &Value::Int(2));
    /// assert_eq!(result.unwrap(), Value::Int(-3));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Add,
    ///                                      &Value::from("foo"),
    ///                                      &Value::from("bar"));
    /// assert_eq!(result.unwrap(), Value::from("foobar"));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value)
                          -> EvalResult<Value> {
        use Value::{Float32, Float64, Int, String, Uint};

        match (left, right) {
            (Int(a), Int(b)) => Ok(Int(int_op(op, *a, *b)?)),
            (Uint(a), Uint(b)) => Ok(Uint(uint_op(op, *a, *b)?)),
            (Float32(a), Float32(b)) => Ok(Float32(float_op(op, *a, *b))),
            (Float64(a), Float64(b)) => Ok(Float64(float_op(op, *a, *b))),
            (String(a), String(b)) if op == BinaryOperator::Add => Ok(String(format!("{a}{b}"))),
            _ => Err(EvalError::InvalidType { op:   op.as_str(),
                                              kind: left.kind(), }),
        }
    }
}

/// Checked signed arithmetic.
fn int_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.checked_div(b)
        },
        _ => unreachable!("int_op used with non arithmetic operator"),
    };

    result.ok_or(EvalError::Overflow { op: op.as_str() })
}

/// Checked unsigned arithmetic.
fn uint_op(op: BinaryOperator, a: u64, b: u64) -> EvalResult<u64> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.checked_div(b)
        },
        _ => unreachable!("uint_op used with non arithmetic operator"),
    };

    result.ok_or(EvalError::Overflow { op: op.as_str() })
}

/// IEEE arithmetic for either float width.
fn float_op<F>(op: BinaryOperator, a: F, b: F) -> F
    where F: Add<Output = F> + Sub<Output = F> + Mul<Output = F> + Div<Output = F>
{
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        _ => unreachable!("float_op used with non arithmetic operator"),
    }
}
