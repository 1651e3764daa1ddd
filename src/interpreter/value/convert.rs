use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    rc::Rc,
};

use crate::{
    interpreter::value::core::Value,
    util::num::{isize_to_i64, usize_to_u64},
};

/// Maps a host field type onto a value kind.
///
/// This is the capability table used when a symbol table is built from a
/// structure:
///
/// | Rust type                          | Kind      |
/// |------------------------------------|-----------|
/// | `bool`                             | `bool`    |
/// | `i8`, `i16`, `i32`, `i64`, `isize` | `int`     |
/// | `u8`, `u16`, `u32`, `u64`, `usize` | `uint`    |
/// | `f32`                              | `float32` |
/// | `f64`                              | `float64` |
/// | `String`, `str`                    | `string`  |
/// | `Vec<T>`, `[T]`                    | `slice`   |
/// | `HashMap<K, V>`, `BTreeMap<K, V>`  | `map`     |
/// | `Option<T>`                        | `pointer` (`None` is a nil pointer) |
/// | `Box<T>`                           | `pointer` |
///
/// Types declared with [`refined!`](crate::refined) map to `struct`.
pub trait IntoValue {
    /// Converts `self` into a fresh value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_into_value_from {
    ($($ty:ty => $target:ty),* $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn to_value(&self) -> Value {
                    <$target>::from(*self).into()
                }
            }
        )*
    };
}

impl_into_value_from! {
    bool => bool,
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i64,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u64,
    f32 => f32,
    f64 => f64,
}

impl IntoValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(isize_to_i64(*self))
    }
}

impl IntoValue for usize {
    fn to_value(&self) -> Value {
        Value::Uint(usize_to_u64(*self))
    }
}

impl IntoValue for str {
    fn to_value(&self) -> Value {
        self.into()
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value {
        self.as_str().into()
    }
}

impl IntoValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue> IntoValue for [T] {
    fn to_value(&self) -> Value {
        self.iter().map(IntoValue::to_value).collect::<Vec<_>>().into()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<K: IntoValue, V: IntoValue, S: BuildHasher> IntoValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::map(self.iter()
                       .map(|(key, value)| (key.to_value(), value.to_value()))
                       .collect())
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map(self.iter()
                       .map(|(key, value)| (key.to_value(), value.to_value()))
                       .collect())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn to_value(&self) -> Value {
        Value::Pointer(self.as_ref().map(|target| Rc::new(target.to_value())))
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    fn to_value(&self) -> Value {
        Value::pointer((**self).to_value())
    }
}
