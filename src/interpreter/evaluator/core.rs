use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::symbols::SymbolTable, value::core::Value},
    util::num::parse_integer_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the first failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Name of the builtin untyped nil constant.
pub const NIL: &str = "nil";

/// Stores the evaluation context.
///
/// The context only holds the symbol table it was given. It has no other
/// state, so independent contexts never affect each other.
///
/// ## Usage
///
/// Create one context per symbol table and call [`Context::eval`] for every
/// tree that should be evaluated against it.
#[derive(Debug, Clone, Copy)]
pub struct Context<'s> {
    symbols: &'s SymbolTable,
}

impl<'s> Context<'s> {
    /// Creates an evaluation context over `symbols`.
    #[must_use]
    pub const fn new(symbols: &'s SymbolTable) -> Self {
        Self { symbols }
    }

    /// The symbol table this context resolves symbols in.
    #[must_use]
    pub const fn symbols(&self) -> &'s SymbolTable {
        self.symbols
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Evaluation is eager and left to right: a binary node's left operand is
    /// evaluated completely before its right operand, and the first error
    /// aborts the walk.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use refine::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{
    ///         evaluator::{core::Context, symbols::SymbolTable},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let symbols = SymbolTable::new().with("x", 40_i64);
    /// let expr = Expr::binary(Expr::symbol("x"), BinaryOperator::Add, Expr::integer("2"));
    ///
    /// assert_eq!(Context::new(&symbols).eval(&expr).unwrap(), Value::Int(42));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Integer { text } => Ok(Value::Int(parse_integer_literal(text)?)),
            Expr::String { value } => Ok(Value::String(value.clone())),
            Expr::Bool { value } => Ok(Value::Bool(*value)),
            Expr::Symbol { name } => self.eval_symbol(name),
            Expr::Selector { object, member } => self.eval_selector(object, member),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value)
            },
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }

    /// Resolves a symbol.
    ///
    /// The symbol table is consulted first; `nil` falls back to the untyped
    /// nil constant when the table does not bind it.
    ///
    /// # Errors
    /// Returns `EvalError::SymbolNotFound` when the name is unbound.
    pub fn eval_symbol(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.symbols.get(name) {
            return Ok(value.clone());
        }

        match name {
            NIL => Ok(Value::Nil),
            _ => Err(EvalError::SymbolNotFound { name: name.to_string() }),
        }
    }

    /// Resolves a member selector `object.member`.
    ///
    /// Struct values yield the named field and map values the entry whose key
    /// is the string `member`. Pointers are followed first.
    ///
    /// # Errors
    /// - `EvalError::SymbolNotFound` if `object` is unbound.
    /// - `EvalError::MemberNotFound` if there is no such field or key.
    /// - `EvalError::NilDereference` if a nil pointer is followed.
    /// - `EvalError::InvalidType` if the value has no members.
    pub fn eval_selector(&self, object: &str, member: &str) -> EvalResult<Value> {
        let value = self.eval_symbol(object)?;
        select_member(object, &value, member)
    }
}

/// Looks up `member` in `value`, following pointers.
fn select_member(object: &str, value: &Value, member: &str) -> EvalResult<Value> {
    let found = match value {
        Value::Pointer(Some(target)) => return select_member(object, target, member),
        Value::Pointer(None) => return Err(EvalError::NilDereference),
        Value::Struct(record) => record.field(member).cloned(),
        Value::Map(entries) => entries.iter()
                                      .flat_map(|entries| entries.iter())
                                      .find(|(key, _)| {
                                          matches!(key, Value::String(key) if key == member)
                                      })
                                      .map(|(_, value)| value.clone()),
        _ => {
            return Err(EvalError::InvalidType { op:   ".",
                                                kind: value.kind(), });
        },
    };

    found.ok_or_else(|| EvalError::MemberNotFound { object: object.to_string(),
                                                    member: member.to_string(), })
}
