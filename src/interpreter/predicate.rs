use crate::{
    ast::Expr,
    error::{Error, EvalError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            symbols::SymbolTable,
        },
        lexer::Tokens,
        parser::core::parse,
        value::core::Value,
    },
};

/// A compiled predicate: its source text together with its syntax tree.
///
/// Compiling once and evaluating many times avoids lexing and parsing the
/// same text for every symbol table.
///
/// # Example
/// ```
/// use refine::interpreter::{evaluator::symbols::SymbolTable, predicate::Predicate};
///
/// let predicate = Predicate::compile("limit", "n >= 0 && n < 10").unwrap();
///
/// assert!(predicate.test(&SymbolTable::new().with("n", 3_i64)).unwrap());
/// assert!(!predicate.test(&SymbolTable::new().with("n", 12_i64)).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    name:   String,
    source: String,
    expr:   Expr,
}

impl Predicate {
    /// Lexes and parses `source`.
    ///
    /// # Parameters
    /// - `name`: Diagnostic name, usually the field the predicate belongs to.
    /// - `source`: The predicate text.
    ///
    /// # Errors
    /// Returns `Error::Lex` or `Error::Parse` for malformed text.
    pub fn compile(name: &str, source: &str) -> Result<Self, Error> {
        let expr = parse(Tokens::new(name, source))?;
        tracing::debug!(predicate = name, source, tree = %expr, "compiled predicate");

        Ok(Self { name: name.to_string(),
                  source: source.to_string(),
                  expr })
    }

    /// The diagnostic name given at compile time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The predicate text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The syntax tree.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates the predicate against `symbols` and returns whatever value
    /// it produces.
    pub fn evaluate(&self, symbols: &SymbolTable) -> EvalResult<Value> {
        Context::new(symbols).eval(&self.expr)
    }

    /// Evaluates the predicate against `symbols` and requires a boolean.
    ///
    /// # Errors
    /// Any evaluation error, or `EvalError::NotBoolean` when the result has
    /// another kind.
    pub fn test(&self, symbols: &SymbolTable) -> EvalResult<bool> {
        match self.evaluate(symbols)? {
            Value::Bool(verdict) => Ok(verdict),
            other => Err(EvalError::NotBoolean { kind: other.kind() }),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
