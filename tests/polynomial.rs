use mathpipe::polynomial::RationalFunction;
use mathpipe::{Poly, Rational, parse_expr};
use num_traits::Zero;

fn poly(input: &str) -> Poly {
    let expr = parse_expr(input).expect("parse polynomial");
    let function = RationalFunction::from_expr(&expr, "x").expect("build polynomial");
    assert!(function.den.is_one(), "{input} is not a polynomial");
    function.num
}

fn ratio(num: i64, den: i64) -> Rational {
    Rational::new(num.into(), den.into())
}

#[test]
fn polynomial_division_exact() {
    let dividend = poly("x^3 - 1");
    let divisor = poly("x - 1");
    let (quotient, remainder) = dividend.div_rem(&divisor);
    assert!(remainder.is_zero());
    assert_eq!(quotient, poly("x^2 + x + 1"));
}

#[test]
fn polynomial_division_remainder() {
    let dividend = poly("x^3 + x + 1");
    let divisor = poly("x^2 + 1");
    let (quotient, remainder) = dividend.div_rem(&divisor);
    assert_eq!(quotient, poly("x"));
    assert_eq!(remainder, poly("1"));
}

#[test]
fn polynomial_division_non_exact() {
    assert!(poly("x^2 + 1").div_exact(&poly("x + 1")).is_none());
}

#[test]
fn polynomial_gcd_is_monic() {
    let gcd = Poly::gcd(&poly("x^2 - 1"), &poly("x^2 - x"));
    assert_eq!(gcd, poly("x - 1"));
}

#[test]
fn polynomial_content_sign_normalizes_leading_coeff() {
    let polynomial = poly("-2*x^2 - 4*x");
    let (content, primitive) = polynomial.content_and_primitive_part();
    assert_eq!(content, Rational::from_integer((-2).into()));
    assert_eq!(primitive, poly("x^2 + 2*x"));
    assert_eq!(primitive.scale(&content), polynomial);
}

#[test]
fn polynomial_content_of_fractional_coefficients() {
    let polynomial = poly("2/3*x^2 + 4/3*x + 2/3");
    let (content, primitive) = polynomial.content_and_primitive_part();
    assert_eq!(content, ratio(2, 3));
    assert_eq!(primitive, poly("x^2 + 2*x + 1"));
}

#[test]
fn square_free_part_drops_repeated_factors() {
    let repeated = poly("(x - 1)^2 * (x + 2)");
    assert_eq!(repeated.square_free_part().monic(), poly("(x - 1)*(x + 2)"));
}

#[test]
fn rational_roots_are_ascending_and_distinct() {
    let roots = poly("2*x^3 - 3*x^2 - 2*x").rational_roots().expect("searchable");
    assert_eq!(roots, vec![ratio(-1, 2), Rational::zero(), ratio(2, 1)]);
}

#[test]
fn rational_roots_skip_irrational_ones() {
    let roots = poly("x^2 - 2").rational_roots().expect("searchable");
    assert!(roots.is_empty());
}

#[test]
fn rational_roots_give_up_on_too_many_candidates() {
    assert!(poly("963761198400*x^3 + x + 963761198400").rational_roots().is_none());
    let roots = poly("720*x^3 - 1").rational_roots().expect("searchable");
    assert!(roots.is_empty());
}

#[test]
fn from_coeffs_matches_parsed_polynomial() {
    assert_eq!(Poly::from_coeffs(&[-4, 0, 1]), poly("x^2 - 4"));
}

#[test]
fn horner_evaluation_is_exact() {
    assert_eq!(poly("x^2 - 4").evaluate(&ratio(1, 2)), ratio(-15, 4));
}

#[test]
fn rational_function_cancels_common_factors() {
    let expr = parse_expr("(x^2 - 1)/(x - 1)").expect("parse");
    let reduced = RationalFunction::from_expr(&expr, "x").expect("rational").reduce();
    assert!(reduced.den.is_one());
    assert_eq!(reduced.num, poly("x + 1"));
}

#[test]
fn negative_powers_move_to_the_denominator() {
    let expr = parse_expr("x^-2").expect("parse");
    let function = RationalFunction::from_expr(&expr, "x").expect("rational");
    assert!(function.num.is_one());
    assert_eq!(function.den, poly("x^2"));
}

#[test]
fn non_polynomial_terms_are_rejected() {
    for input in ["sin(x)", "x^(1/2)", "x + y", "2^x"] {
        let expr = parse_expr(input).expect("parse");
        assert!(
            RationalFunction::from_expr(&expr, "x").is_none(),
            "{input} should not convert"
        );
    }
}
