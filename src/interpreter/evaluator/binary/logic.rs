use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `&&` or `||`.
    ///
    /// Both operands have already been evaluated, so there is no
    /// short-circuiting: an error on the right still surfaces when the left
    /// side alone would decide the result. Both operands must be booleans.
    ///
    /// # Errors
    /// Returns `EvalError::InvalidType` if an operand is not a boolean.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &Value::Bool(false), &Value::Bool(true));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// assert!(Context::eval_logic(BinaryOperator::And, &Value::Int(1), &Value::Int(1)).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let left = left.as_bool(op.as_str())?;
        let right = right.as_bool(op.as_str())?;

        let result = match op {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            _ => unreachable!("eval_logic used with non logical operator"),
        };

        Ok(Value::Bool(result))
    }
}
