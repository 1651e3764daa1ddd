use std::rc::Rc;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// The kind tag of a [`Value`].
///
/// Operators dispatch on kinds, and binary operators require both operands
/// to share one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The untyped `nil` constant.
    Nil,
    /// `true` or `false`.
    Bool,
    /// Signed 64-bit integers.
    Int,
    /// Unsigned 64-bit integers.
    Uint,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
    /// UTF-8 strings.
    String,
    /// Sequences of values.
    Sequence,
    /// Associative maps.
    Map,
    /// Pointers to a value.
    Pointer,
    /// Structures with named fields.
    Struct,
}

impl Kind {
    /// Returns `true` for kinds whose payload may be absent, and which the nil
    /// constant coerces to.
    #[must_use]
    pub const fn is_nilable(self) -> bool {
        matches!(self, Self::Sequence | Self::Map | Self::Pointer)
    }

    /// Returns `true` for integer and float kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float32 | Self::Float64)
    }

    /// The nil value of a nilable kind.
    #[must_use]
    pub fn nil_value(self) -> Option<Value> {
        match self {
            Self::Sequence => Some(Value::Sequence(None)),
            Self::Map => Some(Value::Map(None)),
            Self::Pointer => Some(Value::Pointer(None)),
            _ => None,
        }
    }

    /// The identifier used for this kind in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Sequence => "slice",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Struct => "struct",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a struct value: a type name and its fields in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Name of the structure type.
    pub name:   String,
    /// Field names and values.
    pub fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record for the named type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:   name.into(),
               fields: Vec::new(), }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }
}

/// Represents a runtime value.
///
/// Every operation produces a fresh value; nothing is mutated in place.
/// Sequence, map and pointer payloads are optional and reference counted:
/// `None` is their nil, and the predicate operators `==`/`!=` compare these
/// kinds by reference, not by contents. The derived `PartialEq` is
/// structural and only meant for inspecting results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The untyped nil constant, before coercion to a nilable kind.
    Nil,
    /// A boolean value.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A 32-bit float.
    Float32(f32),
    /// A 64-bit float.
    Float64(f64),
    /// A string.
    String(String),
    /// A sequence, or a nil sequence.
    Sequence(Option<Rc<Vec<Self>>>),
    /// An associative map as key/value entries, or a nil map.
    Map(Option<Rc<Vec<(Self, Self)>>>),
    /// A pointer to a value, or a nil pointer.
    Pointer(Option<Rc<Self>>),
    /// A structure.
    Struct(Rc<Record>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(Some(Rc::new(v)))
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Struct(Rc::new(v))
    }
}

impl Value {
    /// The kind tag of this value.
    ///
    /// # Example
    /// ```
    /// use refine::interpreter::value::core::{Kind, Value};
    ///
    /// assert_eq!(Value::Int(3).kind(), Kind::Int);
    /// assert_eq!(Value::Pointer(None).kind(), Kind::Pointer);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float32(_) => Kind::Float32,
            Self::Float64(_) => Kind::Float64,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
            Self::Pointer(_) => Kind::Pointer,
            Self::Struct(_) => Kind::Struct,
        }
    }

    /// Creates a non-nil pointer to `value`.
    #[must_use]
    pub fn pointer(value: impl Into<Self>) -> Self {
        Self::Pointer(Some(Rc::new(value.into())))
    }

    /// Creates a non-nil map from key/value entries.
    #[must_use]
    pub fn map(entries: Vec<(Self, Self)>) -> Self {
        Self::Map(Some(Rc::new(entries)))
    }

    /// Converts the value to `bool`, or returns an error naming `op` if it is
    /// not a boolean.
    ///
    /// # Parameters
    /// - `op`: The operator requesting the boolean, for error reporting.
    pub const fn as_bool(&self, op: &'static str) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::InvalidType { op,
                                              kind: self.kind() }),
        }
    }

    /// Applies the nil-constant coercion to a pair of operands.
    ///
    /// If one operand is the untyped nil constant and the other has a nilable
    /// kind (sequence, map or pointer), the nil constant becomes the nil value
    /// of that kind. The rule is symmetric; any other pair is returned as is.
    ///
    /// # Example
    /// ```
    /// use refine::interpreter::value::core::Value;
    ///
    /// let (left, _) = Value::coerce_nil(Value::Nil, Value::pointer(1_i64));
    /// assert_eq!(left, Value::Pointer(None));
    ///
    /// let (_, right) = Value::coerce_nil(Value::Int(1), Value::Nil);
    /// assert_eq!(right, Value::Nil);
    /// ```
    #[must_use]
    pub fn coerce_nil(left: Self, right: Self) -> (Self, Self) {
        if matches!(left, Self::Nil)
           && let Some(nil) = right.kind().nil_value()
        {
            return (nil, right);
        }
        if matches!(right, Self::Nil)
           && let Some(nil) = left.kind().nil_value()
        {
            return (left, nil);
        }

        (left, right)
    }
}

/// Writes `items` separated by `, `.
fn write_list<T>(f: &mut std::fmt::Formatter<'_>,
                 items: impl IntoIterator<Item = T>,
                 mut write_item: impl FnMut(&mut std::fmt::Formatter<'_>, T) -> std::fmt::Result)
                 -> std::fmt::Result {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil
            | Self::Sequence(None)
            | Self::Map(None)
            | Self::Pointer(None) => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float32(r) => write!(f, "{r}"),
            Self::Float64(r) => write!(f, "{r}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Sequence(Some(items)) => {
                write!(f, "[")?;
                write_list(f, items.iter(), |f, value| write!(f, "{value}"))?;
                write!(f, "]")
            },
            Self::Map(Some(entries)) => {
                write!(f, "map[")?;
                write_list(f, entries.iter(), |f, (key, value)| write!(f, "{key}: {value}"))?;
                write!(f, "]")
            },
            Self::Pointer(Some(target)) => write!(f, "&{target}"),
            Self::Struct(record) => {
                write!(f, "{}{{", record.name)?;
                write_list(f, record.fields.iter(), |f, (name, value)| {
                    write!(f, "{name}: {value}")
                })?;
                write!(f, "}}")
            },
        }
    }
}
