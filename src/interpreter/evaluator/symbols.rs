use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A mapping from symbol names to values.
///
/// The table is built before evaluation begins and is only read while a
/// predicate is evaluated against it.
///
/// # Example
/// ```
/// use refine::interpreter::{evaluator::symbols::SymbolTable, value::core::Value};
///
/// let symbols: SymbolTable = [("a", 2_i64), ("b", 1_i64)].into_iter().collect();
///
/// assert_eq!(symbols.get("a"), Some(&Value::Int(2)));
/// assert_eq!(symbols.get("c"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Value>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the value it replaces.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.symbols.insert(name.into(), value.into())
    }

    /// Binds `name` to `value`, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a symbol.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// The number of bound symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no symbol is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for SymbolTable {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
