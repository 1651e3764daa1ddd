use crate::{
    error::{Cause, CheckError},
    interpreter::{
        evaluator::symbols::SymbolTable,
        predicate::Predicate,
        value::{convert::IntoValue, core::Value},
    },
};

/// Name of the placeholder symbol bound by [`check_value`].
pub const PLACEHOLDER: &str = "?";

/// One field of a refined structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, which is also its symbol name.
    pub name:      &'static str,
    /// The field's current value.
    pub value:     Value,
    /// The predicate the field must satisfy, if any.
    pub predicate: Option<&'static str>,
}

/// A structure whose fields carry predicates.
///
/// Usually implemented through the [`refined!`](crate::refined) macro.
pub trait Refine {
    /// The name of the structure type, used in error messages.
    fn type_name(&self) -> &'static str;

    /// All fields in declaration order.
    fn fields(&self) -> Vec<Field>;
}

/// Checks every field predicate of a structure.
///
/// The symbol table is built from all fields first, so a predicate may refer
/// to any field of the structure. Predicates are then checked in field order
/// and the first failure is returned. Fields without a predicate are bound but
/// never checked.
///
/// # Errors
/// Returns a [`CheckError`] naming the first field whose predicate failed to
/// lex, parse or evaluate, or evaluated to `false`.
///
/// # Example
/// ```
/// use refine::{check, refined};
///
/// refined! {
///     struct Range {
///         low: i64 => "low <= high",
///         high: i64,
///     }
/// }
///
/// assert!(check(&Range { low: 1, high: 2 }).is_ok());
///
/// let error = check(&Range { low: 3, high: 2 }).unwrap_err();
/// assert_eq!(error.to_string(), r#"Range.low = 3, "low <= high" not met"#);
/// ```
pub fn check<T: Refine + ?Sized>(value: &T) -> Result<(), CheckError> {
    let type_name = value.type_name();
    let fields = value.fields();
    let symbols: SymbolTable = fields.iter()
                                     .map(|field| (field.name, field.value.clone()))
                                     .collect();

    for field in &fields {
        if let Some(predicate) = field.predicate {
            check_field(type_name, field.name, &field.value, predicate, &symbols)?;
        }
    }

    Ok(())
}

/// Checks a single value against an ad-hoc predicate.
///
/// The value is bound to the placeholder symbol `?`.
///
/// # Errors
/// Returns a [`CheckError`] whose type name is the Rust type of the value and
/// whose field is `?`.
///
/// # Example
/// ```
/// use refine::check_value;
///
/// assert!(check_value(&5_i32, "? >= 0").is_ok());
/// assert!(check_value(&vec![1, 2], "? != nil").is_ok());
/// assert!(check_value(&String::from("abc"), "? == `xyz`").unwrap_err().is_unsatisfied());
/// ```
pub fn check_value<T: IntoValue + ?Sized>(value: &T, predicate: &str) -> Result<(), CheckError> {
    let value = value.to_value();
    let symbols = SymbolTable::new().with(PLACEHOLDER, value.clone());

    check_field(std::any::type_name::<T>(), PLACEHOLDER, &value, predicate, &symbols)
}

/// Compiles and tests one predicate, wrapping any failure with its context.
fn check_field(type_name: &str,
               field: &str,
               value: &Value,
               predicate: &str,
               symbols: &SymbolTable)
               -> Result<(), CheckError> {
    let verdict = Predicate::compile(field, predicate).map_err(Cause::from)
                                                       .and_then(|compiled| {
                                                           compiled.test(symbols)
                                                                   .map_err(Cause::from)
                                                       });

    let cause = match verdict {
        Ok(true) => {
            tracing::debug!(type_name, field, predicate, "predicate met");
            return Ok(());
        },
        Ok(false) => Cause::Unsatisfied,
        Err(cause) => cause,
    };

    tracing::debug!(type_name, field, predicate, %cause, "predicate failed");

    Err(CheckError { type_name: type_name.to_string(),
                     field: field.to_string(),
                     value: value.to_string(),
                     predicate: predicate.to_string(),
                     cause })
}

/// Declares a structure whose fields carry predicates.
///
/// Each field may be followed by `=> "predicate"`. The macro emits the struct
/// unchanged and implements [`Refine`] and
/// [`IntoValue`](crate::interpreter::value::convert::IntoValue) for it; the
/// latter maps the structure onto a struct value, so refined structures can be
/// nested and reached with member selectors.
///
/// # Example
/// ```
/// use refine::{check, refined};
///
/// refined! {
///     #[derive(Debug)]
///     pub struct Account {
///         pub owner: String => "owner != ``",
///         pub balance: i64 => "balance >= limit",
///         limit: i64,
///     }
/// }
///
/// let account = Account { owner: "ada".into(), balance: -5, limit: -10 };
/// assert!(check(&account).is_ok());
/// ```
#[macro_export]
macro_rules! refined {
    (@predicate) => {
        ::core::option::Option::None
    };
    (@predicate $predicate:literal) => {
        ::core::option::Option::Some($predicate)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $predicate:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::refine::Refine for $name {
            fn type_name(&self) -> &'static str {
                ::core::stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::refine::Field> {
                ::std::vec![
                    $(
                        $crate::refine::Field {
                            name:      ::core::stringify!($field),
                            value:     $crate::interpreter::value::convert::IntoValue::to_value(&self.$field),
                            predicate: $crate::refined!(@predicate $($predicate)?),
                        },
                    )*
                ]
            }
        }

        impl $crate::interpreter::value::convert::IntoValue for $name {
            fn to_value(&self) -> $crate::interpreter::value::core::Value {
                let record = $crate::refine::Refine::fields(self).into_iter().fold(
                    $crate::interpreter::value::core::Record::new(::core::stringify!($name)),
                    |record, field| record.with_field(field.name, field.value),
                );
                $crate::interpreter::value::core::Value::from(record)
            }
        }
    };
}
