use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`, `Identity`: signed integers and both float widths.
    ///   Negating `i64::MIN` overflows.
    /// - `Not`: booleans.
    /// - `Deref`: pointers; yields the value pointed to.
    ///
    /// Any other kind produces `EvalError::InvalidType` naming the operator
    /// and the kind.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int(5)).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false)).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Deref, &Value::pointer(7_i64)).unwrap();
    /// assert_eq!(v, Value::Int(7));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Uint(1)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Int(n)) => {
                n.checked_neg()
                 .map(Value::Int)
                 .ok_or(EvalError::Overflow { op: op.as_str() })
            },
            (UnaryOperator::Negate, Value::Float32(r)) => Ok(Value::Float32(-r)),
            (UnaryOperator::Negate, Value::Float64(r)) => Ok(Value::Float64(-r)),
            (UnaryOperator::Identity, Value::Int(_) | Value::Float32(_) | Value::Float64(_)) => {
                Ok(value.clone())
            },
            (UnaryOperator::Not, _) => Ok(Value::Bool(!value.as_bool(op.as_str())?)),
            (UnaryOperator::Deref, Value::Pointer(Some(target))) => Ok((**target).clone()),
            (UnaryOperator::Deref, Value::Pointer(None)) => Err(EvalError::NilDereference),
            _ => Err(EvalError::InvalidType { op:   op.as_str(),
                                              kind: value.kind(), }),
        }
    }
}
