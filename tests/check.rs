use std::collections::HashMap;

use refine::{
    Cause, IntoValue, Refine, Value, check, check_value,
    error::{EvalError, LexError, ParseError},
    refined,
};

refined! {
    #[derive(Debug, Clone)]
    struct Pair {
        a: i64 => "a > b",
        b: i64 => "b >= 0",
    }
}

refined! {
    struct Limits {
        value: u32 => "value <= max",
        max: u32,
    }
}

refined! {
    struct Everything {
        flag: bool => "flag",
        small: i8 => "small < 0",
        size: usize => "size == size",
        ratio: f64 => "ratio > ratio - ratio",
        name: String => "name != ``",
        items: Vec<i32> => "items != nil",
        empty: Vec<i32> => "empty != nil",
        lookup: HashMap<String, i64> => "lookup.limit > 0",
        missing: Option<i64> => "missing == nil",
        present: Option<i64> => "*present == 3",
        boxed: Box<i64> => "*boxed == 7",
    }
}

refined! {
    #[derive(Debug)]
    pub struct Inner {
        pub x: i64 => "x > 0",
    }
}

refined! {
    struct Outer {
        inner: Inner => "inner.x < limit",
        link: Option<Inner> => "link.x <= inner.x",
        limit: i64,
    }
}

#[test]
fn satisfied_structure_passes() {
    assert!(check(&Pair { a: 2, b: 1 }).is_ok());
}

#[test]
fn unsatisfied_field_is_reported() {
    let error = check(&Pair { a: 2, b: 2 }).unwrap_err();

    assert_eq!(error.type_name, "Pair");
    assert_eq!(error.field, "a");
    assert_eq!(error.value, "2");
    assert_eq!(error.predicate, "a > b");
    assert_eq!(error.cause, Cause::Unsatisfied);
    assert!(error.is_unsatisfied());
    assert_eq!(error.to_string(), r#"Pair.a = 2, "a > b" not met"#);
}

#[test]
fn fields_are_checked_in_order() {
    let error = check(&Pair { a: 0, b: -1 }).unwrap_err();
    assert_eq!(error.field, "b");

    let error = check(&Pair { a: -5, b: -1 }).unwrap_err();
    assert_eq!(error.field, "a");
}

#[test]
fn fields_without_predicates_are_bound() {
    assert!(check(&Limits { value: 3, max: 5 }).is_ok());
    assert_eq!(check(&Limits { value: 6, max: 5 }).unwrap_err().field, "value");
}

#[test]
fn field_types_map_to_kinds() {
    let everything = Everything { flag:    true,
                                  small:   -1,
                                  size:    4,
                                  ratio:   0.25,
                                  name:    "x".to_string(),
                                  items:   vec![1, 2, 3],
                                  empty:   Vec::new(),
                                  lookup:  HashMap::from([("limit".to_string(), 3)]),
                                  missing: None,
                                  present: Some(3),
                                  boxed:   Box::new(7), };

    if let Err(e) = check(&everything) {
        panic!("check failed: {e}");
    }

    let fields = everything.fields();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[1].value, Value::Int(-1));
    assert_eq!(fields[2].value, Value::Uint(4));
    assert_eq!(fields[8].value, Value::Pointer(None));
    assert_eq!(fields[8].predicate, Some("missing == nil"));
}

#[test]
fn pointer_sized_integers_keep_their_value() {
    assert_eq!(isize::MIN.to_value(), Value::Int(i64::try_from(isize::MIN).unwrap()));
    assert_eq!((-7_isize).to_value(), Value::Int(-7));
    assert_eq!(usize::MAX.to_value(), Value::Uint(u64::try_from(usize::MAX).unwrap()));
    assert!(check_value(&3_usize, "? > ? - ?").is_ok());
}

#[test]
fn nested_structures_support_selectors() {
    let outer = Outer { inner: Inner { x: 2 },
                        link:  Some(Inner { x: 1 }),
                        limit: 3, };
    assert!(check(&outer).is_ok());

    let outer = Outer { inner: Inner { x: 5 },
                        link:  Some(Inner { x: 1 }),
                        limit: 3, };
    let error = check(&outer).unwrap_err();
    assert_eq!(error.field, "inner");
    assert_eq!(error.value, "Inner{x: 5}");

    let outer = Outer { inner: Inner { x: 2 },
                        link:  None,
                        limit: 3, };
    let error = check(&outer).unwrap_err();
    assert_eq!(error.field, "link");
    assert_eq!(error.value, "nil");
    assert_eq!(error.cause, Cause::Eval(EvalError::NilDereference));
}

#[test]
fn malformed_predicates_are_reported() {
    refined! {
        struct Unparsable {
            a: i64 => "a >",
        }
    }
    refined! {
        struct Unlexable {
            a: i64 => "a = 1",
        }
    }

    let error = check(&Unparsable { a: 1 }).unwrap_err();
    assert_eq!(error.cause,
               Cause::Parse(ParseError::UnexpectedToken { found: "end of input".to_string() }));
    assert_eq!(error.to_string(),
               r#"Unparsable.a = 1, "a >" could not be parsed: could not parse expression at end of input"#);

    let error = check(&Unlexable { a: 1 }).unwrap_err();
    assert_eq!(error.cause, Cause::Lex(LexError::Expected("==")));
}

#[test]
fn evaluation_failures_are_reported() {
    refined! {
        struct NotBool {
            a: i64 => "a + 1",
        }
    }
    refined! {
        struct Unknown {
            a: i64 => "missing > 0",
        }
    }

    let error = check(&NotBool { a: 1 }).unwrap_err();
    assert_eq!(error.cause,
               Cause::Eval(EvalError::NotBoolean { kind: refine::Kind::Int }));
    assert_eq!(error.to_string(),
               r#"NotBool.a = 1, "a + 1" could not be evaluated: result is int, not bool"#);

    let error = check(&Unknown { a: 1 }).unwrap_err();
    assert_eq!(error.cause,
               Cause::Eval(EvalError::SymbolNotFound { name: "missing".to_string() }));
}

#[test]
fn single_values_use_the_placeholder() {
    assert!(check_value(&5_i32, "? >= 0").is_ok());
    assert!(check_value("abc", "? == `abc`").is_ok());
    assert!(check_value(&None::<i64>, "? == nil").is_ok());
    assert!(check_value(&vec![1, 2], "? != nil").is_ok());

    let error = check_value(&-1_i64, "? >= 0").unwrap_err();
    assert_eq!(error.type_name, "i64");
    assert_eq!(error.field, "?");
    assert_eq!(error.value, "-1");
    assert!(error.is_unsatisfied());
}

#[test]
fn check_errors_expose_their_cause() {
    use std::error::Error as _;

    let error = check(&Pair { a: 2, b: 2 }).unwrap_err();

    assert_eq!(error.source().map(ToString::to_string), Some("not met".to_string()));
}
