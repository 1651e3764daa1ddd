use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// The nil constant is first coerced to the kind of a nilable partner
    /// (see [`Value::coerce_nil`]). The operands must then share one kind,
    /// otherwise the result is `EvalError::TypeMismatch` citing both kinds.
    /// The operation is routed by operator family:
    /// arithmetic to `eval_scalar_op`, `==`/`!=` to `eval_equality`, ordering
    /// to `eval_ordering`, `&&`/`||` to `eval_logic` and bitwise operators to
    /// `eval_bitwise`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::BinaryOperator,
    ///     error::EvalError,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::core::{Kind, Value},
    ///     },
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, Value::Int(3), Value::Int(4));
    /// assert_eq!(result.unwrap(), Value::Int(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Equal, Value::Int(1), Value::Bool(true));
    /// assert_eq!(result.unwrap_err(),
    ///            EvalError::TypeMismatch { op:    "==",
    ///                                      left:  Kind::Int,
    ///                                      right: Kind::Bool, });
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul,
            NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        let (left, right) = Value::coerce_nil(left, right);
        if left.kind() != right.kind() {
            return Err(EvalError::TypeMismatch { op:    op.as_str(),
                                                 left:  left.kind(),
                                                 right: right.kind(), });
        }

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, &left, &right),
            Equal | NotEqual => Self::eval_equality(op, &left, &right),
            Less | LessEqual | Greater | GreaterEqual => Self::eval_ordering(op, &left, &right),
            And | Or => Self::eval_logic(op, &left, &right),
            BitAnd | BitOr | ShiftLeft | ShiftRight => Self::eval_bitwise(op, &left, &right),
        }
    }
}
