use refine::{
    ast::Expr,
    error::{LexError, ParseError},
    interpreter::{
        lexer::{TokenKind, Tokens, tokenize},
        parser::core::{MAX_DEPTH, parse, parse_expression},
    },
};

fn tree(source: &str) -> String {
    parse(Tokens::new("test", source)).unwrap_or_else(|e| panic!("{source}: {e}"))
                                      .to_string()
}

fn parse_error(source: &str) -> ParseError {
    match parse(Tokens::new("test", source)) {
        Ok(expr) => panic!("{source} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(tree("2 + 3 * 4"), "(2 + (3 * 4))");
    assert_eq!(tree("2 * 3 + 4"), "((2 * 3) + 4)");
}

#[test]
fn binary_levels_are_right_associative() {
    assert_eq!(tree("10 - 3 - 2"), "(10 - (3 - 2))");
    assert_eq!(tree("8 / 4 / 2"), "(8 / (4 / 2))");
    assert_eq!(tree("a || b || c"), "(a || (b || c))");
    assert_eq!(tree("a < b == c"), "(a < (b == c))");
}

#[test]
fn parentheses_override_grouping() {
    assert_eq!(tree("(10 - 3) - 2"), "((10 - 3) - 2)");
    assert_eq!(tree("((x))"), "x");
}

#[test]
fn logical_operators_bind_loosest() {
    assert_eq!(tree("a > b && b >= 0 || c"), "(((a > b) && (b >= 0)) || c)");
}

#[test]
fn bitwise_operators_share_arithmetic_levels() {
    assert_eq!(tree("a | b & c << 2"), "(a | (b & (c << 2)))");
    assert_eq!(tree("x >> 1 + 1"), "((x >> 1) + 1)");
}

#[test]
fn unary_operators_stack() {
    assert_eq!(tree("!-x"), "(!(-x))");
    assert_eq!(tree("-*p"), "(-(*p))");
    assert_eq!(tree("+1"), "(+1)");
    assert_eq!(tree("-2 * 3"), "((-2) * 3)");
}

#[test]
fn atoms() {
    let parsed = |source: &str| parse(tokenize("test", source)).unwrap();

    assert_eq!(parsed("true"), Expr::Bool { value: true });
    assert_eq!(parsed("false"), Expr::Bool { value: false });
    assert_eq!(parsed("nil"), Expr::symbol("nil"));
    assert_eq!(parsed("?"), Expr::symbol("?"));
    assert_eq!(parsed("0h_FF"), Expr::integer("0h_FF"));
    assert_eq!(parsed("`a b`"), Expr::String { value: "a b".to_string() });
    assert_eq!(parsed("``"), Expr::String { value: String::new() });
    assert_eq!(parsed("p.x"),
               Expr::Selector { object: "p".to_string(),
                                member: "x".to_string(), });
    assert_eq!(tree("p.x + 1"), "(p.x + 1)");
}

#[test]
fn missing_operand_is_error() {
    assert_eq!(parse_error("2 +"),
               ParseError::UnexpectedToken { found: "end of input".to_string() });
    assert_eq!(parse_error(")"), ParseError::UnexpectedToken { found: "')'".to_string() });
    assert_eq!(parse_error(""), ParseError::UnexpectedToken { found: "end of input".to_string() });
    assert_eq!(parse_error("2 +").to_string(),
               "could not parse expression at end of input");
}

#[test]
fn missing_closing_paren_is_error() {
    assert_eq!(parse_error("(1 + 2"),
               ParseError::ExpectedClosingParen { found: "end of input".to_string() });
    assert_eq!(parse_error("(1 + 2 3"),
               ParseError::ExpectedClosingParen { found: "'3'".to_string() });
}

#[test]
fn missing_member_is_error() {
    assert_eq!(parse_error("p."),
               ParseError::ExpectedMember { found: "end of input".to_string() });
    assert_eq!(parse_error("p.1"), ParseError::ExpectedMember { found: "'1'".to_string() });
}

#[test]
fn trailing_tokens_are_reported() {
    let error = parse_error("2 3 4");

    assert_eq!(error,
               ParseError::TrailingTokens { tokens: vec!["3".to_string(), "4".to_string()] });
    assert_eq!(error.to_string(), "unparsed trailing tokens: 3 4");
    assert!(matches!(parse_error("a b)"), ParseError::TrailingTokens { .. }));
}

#[test]
fn lex_errors_pass_through() {
    assert_eq!(parse_error("1 + `abc"), ParseError::Lex(LexError::UnterminatedString));
    assert_eq!(parse_error("1 2 $"), ParseError::Lex(LexError::UnexpectedCharacter('$')));
    assert_eq!(parse_error("a = 1"), ParseError::Lex(LexError::Expected("==")));
    assert_eq!(parse_error("(a $"), ParseError::Lex(LexError::UnexpectedCharacter('$')));
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn moderate_nesting_is_accepted() {
    assert_eq!(tree(&nested(100)), "1");
    assert!(parse(Tokens::new("test", &format!("{}1", "-".repeat(100)))).is_ok());
    assert!(parse(Tokens::new("test", &vec!["1"; 100].join(" + "))).is_ok());
}

#[test]
fn deep_nesting_is_rejected() {
    let too_deep = ParseError::TooDeep { limit: MAX_DEPTH };

    assert_eq!(parse_error(&nested(MAX_DEPTH + 1)), too_deep);
    assert_eq!(parse_error(&nested(10_000)), too_deep);
    assert_eq!(parse_error(&format!("{}1", "!".repeat(10_000))), too_deep);
    assert_eq!(parse_error(&vec!["1"; 10_000].join(" + ")), too_deep);
    assert_eq!(too_deep.to_string(), "expression nests deeper than 128 levels");
}

#[test]
fn expression_parsing_stops_at_the_first_foreign_token() {
    let mut tokens = Tokens::new("test", "1 + 2 ) rest").peekable();
    let expr = parse_expression(&mut tokens).unwrap();

    assert_eq!(expr.to_string(), "(1 + 2)");
    assert_eq!(tokens.next().map(|token| token.kind), Some(TokenKind::RightParen));
}
