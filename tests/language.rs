use std::fs;

use refine::{
    Error, Kind, Predicate, Record, SymbolTable, Value,
    ast::{BinaryOperator, UnaryOperator},
    error::{EvalError, LexError, ParseError},
    evaluate,
    interpreter::evaluator::core::Context,
};

fn eval(source: &str, symbols: &SymbolTable) -> Result<Value, Error> {
    evaluate("test", source, symbols)
}

fn assert_value(source: &str, symbols: &SymbolTable, expected: Value) {
    match eval(source, symbols) {
        Ok(value) => assert_eq!(value, expected, "evaluating {source}"),
        Err(e) => panic!("{source} failed: {e}"),
    }
}

fn assert_holds(source: &str, symbols: &SymbolTable) {
    assert_value(source, symbols, Value::Bool(true));
}

fn eval_error(source: &str, symbols: &SymbolTable) -> EvalError {
    match eval(source, symbols) {
        Err(Error::Eval(e)) => e,
        other => panic!("{source} was expected to fail evaluation, got {other:?}"),
    }
}

fn sample_symbols() -> SymbolTable {
    let point = Record::new("Point").with_field("x", 3_i64).with_field("y", 4_i64);

    SymbolTable::new().with("a", 2_i64)
                      .with("b", 1_i64)
                      .with("u", 5_u64)
                      .with("zero", 0_u64)
                      .with("f", 1.5_f64)
                      .with("g", 0.5_f64)
                      .with("h", 2.5_f32)
                      .with("s", "needle")
                      .with("p", Value::Pointer(None))
                      .with("q", Value::pointer(5_i64))
                      .with("seq", Value::Sequence(None))
                      .with("m", Value::Map(None))
                      .with("point", point.clone())
                      .with("ptr", Value::pointer(point))
                      .with("dict", Value::map(vec![(Value::from("limit"), Value::from(10_i64))]))
}

#[test]
fn arithmetic_precedence() {
    let symbols = SymbolTable::new();

    assert_value("2 + 3 * 4", &symbols, Value::Int(14));
    assert_value("(2 + 3) * 4", &symbols, Value::Int(20));
    assert_value("7 / 2", &symbols, Value::Int(3));
    assert_value("-7 / 2", &symbols, Value::Int(-3));
}

#[test]
fn arithmetic_is_right_associative() {
    let symbols = SymbolTable::new();

    assert_value("10 - 3 - 2", &symbols, Value::Int(9));
    assert_value("8 / 4 / 2", &symbols, Value::Int(4));
    assert_value("(10 - 3) - 2", &symbols, Value::Int(5));
}

#[test]
fn integer_literal_bases() {
    assert_value("0b1010 + 0h_ff + 0o17 + 017 + 1_000_000",
                 &SymbolTable::new(),
                 Value::Int(1_000_295));
}

#[test]
fn integer_literals_equal_themselves() {
    for literal in ["0", "7", "42", "1_000", "0b11", "0hFF", "0o7", "017", "9223372036854775807"] {
        assert_holds(&format!("{literal} == {literal}"), &SymbolTable::new());
    }
}

#[test]
fn bitwise_and_shifts() {
    let symbols = sample_symbols();

    assert_value("11 << 2", &symbols, Value::Int(44));
    assert_value("11 >> 2", &symbols, Value::Int(2));
    assert_value("-8 >> 1", &symbols, Value::Int(-4));
    assert_value("6 & 3", &symbols, Value::Int(2));
    assert_value("6 | 3", &symbols, Value::Int(7));
    assert_value("u << u", &symbols, Value::Uint(160));
    assert_eq!(eval_error("1 << 64", &symbols),
               EvalError::ShiftOutOfRange { count: "64".to_string() });
    assert_eq!(eval_error("1 << -1", &symbols),
               EvalError::ShiftOutOfRange { count: "-1".to_string() });
}

#[test]
fn integer_faults_are_errors() {
    let symbols = sample_symbols();

    assert_eq!(eval_error("1 / 0", &symbols), EvalError::DivisionByZero);
    assert_eq!(eval_error("u / zero", &symbols), EvalError::DivisionByZero);
    assert_eq!(eval_error("9223372036854775807 + 1", &symbols),
               EvalError::Overflow { op: "+" });
    assert_eq!(eval_error("zero - u", &symbols), EvalError::Overflow { op: "-" });
    assert_eq!(eval_error("-9223372036854775808", &symbols),
               EvalError::LiteralTooLarge { text: "9223372036854775808".to_string() });
}

#[test]
fn floats() {
    let symbols = sample_symbols();

    assert_value("f + g", &symbols, Value::Float64(2.0));
    assert_value("-f", &symbols, Value::Float64(-1.5));
    assert_value("h * h", &symbols, Value::Float32(6.25));
    assert_holds("f > g && f == f && g != f", &symbols);
    assert_holds("f / (g - g) > f", &symbols);
}

#[test]
fn strings() {
    let symbols = sample_symbols();

    assert_holds("`foo` + `bar` == `foobar`", &symbols);
    assert_holds("`abc` < `abd`", &symbols);
    assert_holds("s >= `m` && s != ``", &symbols);
    assert_eq!(eval_error("s - s", &symbols),
               EvalError::InvalidType { op:   "-",
                                        kind: Kind::String, });
}

#[test]
fn mismatched_kinds_are_rejected() {
    let symbols = sample_symbols();
    let error = eval_error("1 == true", &symbols);

    assert_eq!(error,
               EvalError::TypeMismatch { op:    "==",
                                         left:  Kind::Int,
                                         right: Kind::Bool, });
    assert_eq!(error.to_string(), "type mismatch: int == bool");
    assert_eq!(eval_error("u == 1", &symbols),
               EvalError::TypeMismatch { op:    "==",
                                         left:  Kind::Uint,
                                         right: Kind::Int, });
    assert_eq!(eval_error("nil == 1", &symbols),
               EvalError::TypeMismatch { op:    "==",
                                         left:  Kind::Nil,
                                         right: Kind::Int, });
}

#[test]
fn unknown_symbol_is_error() {
    let error = eval_error("foo", &SymbolTable::new());

    assert_eq!(error, EvalError::SymbolNotFound { name: "foo".to_string() });
    assert_eq!(error.to_string(), "could not find value for symbol foo");
}

#[test]
fn left_operand_fails_first() {
    assert_eq!(eval_error("foo + bar", &SymbolTable::new()),
               EvalError::SymbolNotFound { name: "foo".to_string() });
}

#[test]
fn nil_coerces_to_nilable_kinds() {
    let symbols = sample_symbols();

    for name in ["p", "seq", "m"] {
        assert_holds(&format!("{name} == nil"), &symbols);
        assert_holds(&format!("nil == {name}"), &symbols);
    }
    assert_holds("q != nil && nil != q", &symbols);
    assert_holds("nil == nil", &symbols);
}

#[test]
fn nilable_kinds_compare_by_identity() {
    let shared = Value::from(vec![Value::Int(1), Value::Int(2)]);
    let symbols = SymbolTable::new().with("a", shared.clone())
                                    .with("b", vec![Value::Int(1), Value::Int(2)])
                                    .with("c", shared);

    assert_holds("a == a", &symbols);
    assert_holds("a == c", &symbols);
    assert_holds("a != b", &symbols);
}

#[test]
fn logical_operators() {
    let symbols = sample_symbols();

    assert_holds("true && !false", &symbols);
    assert_holds("false || true", &symbols);
    assert_holds("a > b && b >= 0", &symbols);
    assert_eq!(eval_error("1 && 2", &symbols),
               EvalError::InvalidType { op:   "&&",
                                        kind: Kind::Int, });
    assert_eq!(eval_error("!1", &symbols),
               EvalError::InvalidType { op:   "!",
                                        kind: Kind::Int, });
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_eq!(eval_error("true || foo", &SymbolTable::new()),
               EvalError::SymbolNotFound { name: "foo".to_string() });
}

#[test]
fn unary_operators() {
    let symbols = sample_symbols();

    assert_value("-a", &symbols, Value::Int(-2));
    assert_value("+a", &symbols, Value::Int(2));
    assert_value("*q + 1", &symbols, Value::Int(6));
    assert_eq!(eval_error("-`s`", &symbols),
               EvalError::InvalidType { op:   "-",
                                        kind: Kind::String, });
    assert_eq!(eval_error("-u", &symbols),
               EvalError::InvalidType { op:   "-",
                                        kind: Kind::Uint, });
    assert_eq!(eval_error("*p", &symbols), EvalError::NilDereference);
    assert_eq!(eval_error("*a", &symbols),
               EvalError::InvalidType { op:   "*",
                                        kind: Kind::Int, });
}

#[test]
fn member_selectors() {
    let symbols = sample_symbols();

    assert_holds("point.x + point.y == 7", &symbols);
    assert_holds("ptr.y == 4", &symbols);
    assert_holds("dict.limit == 10", &symbols);
    assert_eq!(eval_error("point.z", &symbols),
               EvalError::MemberNotFound { object: "point".to_string(),
                                           member: "z".to_string(), });
    assert_eq!(eval_error("dict.missing", &symbols),
               EvalError::MemberNotFound { object: "dict".to_string(),
                                           member: "missing".to_string(), });
    assert_eq!(eval_error("p.x", &symbols), EvalError::NilDereference);
    assert_eq!(eval_error("a.x", &symbols),
               EvalError::InvalidType { op:   ".",
                                        kind: Kind::Int, });
}

#[test]
fn symbol_table_may_shadow_nil() {
    assert_holds("nil == 1", &SymbolTable::new().with("nil", 1_i64));
}

#[test]
fn errors_are_sorted_by_stage() {
    let symbols = SymbolTable::new();

    assert_eq!(eval("`abc", &symbols), Err(Error::Lex(LexError::UnterminatedString)));
    assert_eq!(eval("1 == 0b", &symbols),
               Err(Error::Lex(LexError::Expected("binary digit"))));
    assert_eq!(eval("1 +", &symbols),
               Err(Error::Parse(ParseError::UnexpectedToken { found: "end of input".to_string() })));
    assert!(matches!(eval("foo", &symbols), Err(Error::Eval(_))));
}

#[test]
fn predicates_must_produce_booleans() {
    let predicate = Predicate::compile("test", "1 + 1").unwrap();

    assert_eq!(predicate.source(), "1 + 1");
    assert_eq!(predicate.evaluate(&SymbolTable::new()), Ok(Value::Int(2)));
    assert_eq!(predicate.test(&SymbolTable::new()),
               Err(EvalError::NotBoolean { kind: Kind::Int }));
}

#[test]
fn symbol_tables_and_predicates_expose_their_parts() {
    let mut symbols = SymbolTable::new();
    assert!(symbols.is_empty());

    symbols.insert("a", 2_i64);
    symbols.extend([("b", 1_i64)]);
    assert_eq!(symbols.len(), 2);
    assert!(symbols.contains("a") && !symbols.contains("c"));

    let mut names: Vec<_> = symbols.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b"]);

    let context = Context::new(&symbols);
    assert_eq!(context.symbols().get("b"), Some(&Value::Int(1)));

    let predicate = Predicate::compile("limit", "a > b").unwrap();
    assert_eq!(predicate.name(), "limit");
    assert_eq!(predicate.to_string(), "a > b");
    assert_eq!(context.eval(predicate.expr()), Ok(Value::Bool(true)));
}

#[test]
fn operations_on_values() {
    assert!(Kind::Map.is_nilable() && !Kind::Struct.is_nilable());
    assert!(Kind::Uint.is_numeric() && !Kind::String.is_numeric());
    assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Bool(true)),
               Ok(Value::Bool(false)));
    assert_eq!(Context::eval_binary(BinaryOperator::Equal, Value::Nil, Value::Map(None)),
               Ok(Value::Bool(true)));
    assert_eq!(Context::eval_binary(BinaryOperator::Add, Value::from("a"), Value::Int(1)),
               Err(EvalError::TypeMismatch { op:    "+",
                                             left:  Kind::String,
                                             right: Kind::Int, }));
}

#[test]
fn predicate_file() {
    let source = fs::read_to_string("tests/predicates.txt").expect("missing file");
    let symbols = sample_symbols();
    let mut count = 0;

    for line in source.lines()
                      .map(str::trim)
                      .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        count += 1;
        assert_holds(line, &symbols);
    }

    assert!(count > 0, "no predicates found in tests/predicates.txt");
}
