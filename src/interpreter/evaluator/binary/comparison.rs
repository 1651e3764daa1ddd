use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps an equality operator and an equality result to the final boolean.
///
/// Inverts the result for `NotEqual`.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

/// Reference identity of two optional payloads; two nils are identical.
fn same_payload<T>(left: Option<&Rc<T>>, right: Option<&Rc<T>>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => Rc::ptr_eq(left, right),
        _ => false,
    }
}

impl Context<'_> {
    /// Evaluates `==` or `!=` on two values of one kind.
    ///
    /// Scalars (booleans, integers, floats, strings) compare by value, and two
    /// nil constants are equal. Sequences, maps, pointers and structs compare
    /// by reference: two values are equal only if they share one payload, or
    /// are both nil.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let p = Value::pointer(1_i64);
    /// let q = Value::pointer(1_i64);
    ///
    /// let same = Context::eval_equality(BinaryOperator::Equal, &p, &p.clone()).unwrap();
    /// let other = Context::eval_equality(BinaryOperator::Equal, &p, &q).unwrap();
    ///
    /// assert_eq!(same, Value::Bool(true));
    /// assert_eq!(other, Value::Bool(false));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_equality(op: BinaryOperator,
                         left: &Value,
                         right: &Value)
                         -> EvalResult<Value> {
        use Value::{
            Bool, Float32, Float64, Int, Map, Nil, Pointer, Sequence, String, Struct, Uint,
        };

        let is_equal = match (left, right) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Uint(a), Uint(b)) => a == b,
            (Float32(a), Float32(b)) => a == b,
            (Float64(a), Float64(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Sequence(a), Sequence(b)) => same_payload(a.as_ref(), b.as_ref()),
            (Map(a), Map(b)) => same_payload(a.as_ref(), b.as_ref()),
            (Pointer(a), Pointer(b)) => same_payload(a.as_ref(), b.as_ref()),
            (Struct(a), Struct(b)) => Rc::ptr_eq(a, b),
            _ => {
                return Err(EvalError::InvalidType { op:   op.as_str(),
                                                    kind: left.kind(), });
            },
        };

        Ok(Value::Bool(equality_op_result(op, is_equal)))
    }

    /// Evaluates `<`, `<=`, `>` or `>=` on two values of one kind.
    ///
    /// Strings compare lexicographically; integers and floats numerically.
    /// Any other kind is `EvalError::InvalidType`.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_ordering(BinaryOperator::Less,
    ///                                     &Value::from("abc"),
    ///                                     &Value::from("abd"));
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_ordering(op: BinaryOperator,
                         left: &Value,
                         right: &Value)
                         -> EvalResult<Value> {
        use Value::{Float32, Float64, Int, String, Uint};

        let ordered = match (left, right) {
            (String(a), String(b)) => compare(op, a, b),
            (Int(a), Int(b)) => compare(op, a, b),
            (Uint(a), Uint(b)) => compare(op, a, b),
            (Float32(a), Float32(b)) => compare(op, a, b),
            (Float64(a), Float64(b)) => compare(op, a, b),
            _ => {
                return Err(EvalError::InvalidType { op:   op.as_str(),
                                                    kind: left.kind(), });
            },
        };

        Ok(Value::Bool(ordered))
    }
}

/// Applies an ordering operator to two comparable operands.
fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, left: &T, right: &T) -> bool {
    match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::GreaterEqual => left >= right,
        _ => unreachable!("compare used with non ordering operator"),
    }
}
