use mathpipe::eval::Evaluator;
use mathpipe::expr::{Expr, Func};
use mathpipe::{Environment, MathError, parse_expr, pretty, rational};

fn parse(input: &str) -> Expr {
    parse_expr(input).unwrap_or_else(|e| panic!("failed to parse {input}: {e}"))
}

fn expect_round_trip(input: &str, expected: &str) {
    let actual = pretty(&parse(input));
    assert_eq!(actual, expected, "pretty-print mismatch for {input}");
}

#[test]
fn nesting_limit_is_reported() {
    let nested = format!("{}x{}", "(".repeat(70), ")".repeat(70));
    match parse_expr(&nested) {
        Err(MathError::Normalization(msg)) => assert!(msg.contains("nests deeper"), "{msg}"),
        other => panic!("expected a nesting error, got {other:?}"),
    }
    let exponents = vec!["x"; 80].join("**");
    assert!(parse_expr(&exponents).is_err());
    assert!(parse_expr(&format!("{}x{}", "(".repeat(60), ")".repeat(60))).is_ok());
}

#[test]
fn long_flat_sums_parse_and_evaluate() {
    let sum = vec!["x"; 1500].join("+");
    let evaluator = Evaluator::new(parse(&sum), Environment::default()).unwrap();
    assert_eq!(evaluator.eval(1.0).unwrap(), 1500.0);
}

#[test]
fn oversized_source_is_rejected() {
    let sum = vec!["x"; 3000].join("+");
    assert!(matches!(parse_expr(&sum), Err(MathError::Normalization(_))));
}

#[test]
fn both_power_spellings_parse_alike() {
    assert_eq!(parse("x**2"), parse("x^2"));
}

#[test]
fn unary_minus_binds_looser_than_power() {
    let expected = Expr::Neg(Expr::Pow(Expr::var("x").boxed(), Expr::integer(2).boxed()).boxed());
    assert_eq!(parse("-x**2"), expected);
}

#[test]
fn power_is_right_associative() {
    let expected = Expr::Pow(
        Expr::integer(2).boxed(),
        Expr::Pow(Expr::integer(3).boxed(), Expr::integer(2).boxed()).boxed(),
    );
    assert_eq!(parse("2**3**2"), expected);
}

#[test]
fn decimals_are_exact() {
    assert_eq!(parse("2.5"), Expr::Constant(rational(5, 2)));
}

#[test]
fn whitelisted_calls_parse() {
    assert_eq!(
        parse("sin(x)"),
        Expr::Func(Func::Sin, Expr::var("x").boxed())
    );
    assert_eq!(parse("ln(x)"), parse("log(x)"));
}

#[test]
fn pretty_printing_keeps_needed_parentheses() {
    let cases = [
        ("(x**2-4)-(0)", "x^2 - 4 - 0"),
        ("x - (x - 1)", "x - (x - 1)"),
        ("(x + 1)*(x - 1)", "(x + 1)*(x - 1)"),
        ("2*x**2 + 3", "2*x^2 + 3"),
        ("(x + 1)**2", "(x + 1)^2"),
        ("sqrt(x + 1)", "sqrt(x + 1)"),
    ];
    for (input, expected) in cases {
        expect_round_trip(input, expected);
    }
}

#[test]
fn unknown_functions_are_not_callable() {
    let err = parse_expr("__import__(x)").unwrap_err();
    assert!(matches!(err, MathError::Normalization(_)));
    assert!(parse_expr("system(1)").is_err());
}

#[test]
fn malformed_input_reports_position() {
    let err = parse_expr("x + * 2").unwrap_err();
    match err {
        MathError::Normalization(msg) => assert!(msg.contains("position"), "{msg}"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn trailing_operator_is_rejected() {
    assert!(parse_expr("x +").is_err());
    assert!(parse_expr("").is_err());
}
