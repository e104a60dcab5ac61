//! Parser for the canonical algebraic syntax.
//!
//! Only numbers, identifiers, `+ - * /`, `**` (or `^`) and calls to the
//! whitelisted functions in [`Func`] are accepted.

use crate::error::{MathError, Result};
use crate::expr::{Expr, Func, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_opt, map_res, opt, recognize};
use nom::error::{VerboseError, VerboseErrorKind};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use num_bigint::{BigInt, ParseBigIntError};
use num_traits::Num;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Deepest nesting of parentheses, signs and exponents accepted.
pub const MAX_NESTING: usize = 64;

/// Longest source text accepted; bounds the depth of left-nested chains such as `x+x+...`.
pub const MAX_SOURCE_LEN: usize = 4096;

const TOO_DEEP: &str = "nesting too deep";

pub fn parse_expr(input: &str) -> Result<Expr> {
    if input.len() > MAX_SOURCE_LEN {
        return Err(MathError::Normalization(format!(
            "expression is {} characters long (limit {MAX_SOURCE_LEN})",
            input.len()
        )));
    }
    match all_consuming(ws(|i| parse_add_sub(i, 0)))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(MathError::Normalization(describe(input, &e)))
        }
        Err(nom::Err::Incomplete(_)) => Err(MathError::Normalization(
            "unexpected end of input".to_string(),
        )),
    }
}

fn describe(input: &str, err: &VerboseError<&str>) -> String {
    if let Some((rest, _)) = err
        .errors
        .iter()
        .find(|(_, kind)| matches!(kind, VerboseErrorKind::Context(TOO_DEEP)))
    {
        let offset = input.len() - rest.len();
        return format!(
            "expression nests deeper than {MAX_NESTING} levels at position {offset}"
        );
    }
    let rest = err
        .errors
        .iter()
        .map(|(rest, _)| *rest)
        .min_by_key(|rest| rest.len())
        .unwrap_or(input);
    if rest.trim().is_empty() {
        return format!("unexpected end of input in '{input}'");
    }
    let offset = input.len() - rest.len();
    let snippet: String = rest.chars().take(12).collect();
    format!("invalid syntax at position {offset} near '{snippet}' in '{input}'")
}

// Failure, not Error, so `alt` does not backtrack into another branch.
fn too_deep(input: &str) -> nom::Err<VerboseError<&str>> {
    nom::Err::Failure(VerboseError {
        errors: vec![(input, VerboseErrorKind::Context(TOO_DEEP))],
    })
}

fn parse_add_sub(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    let (rest, init) = parse_mul_div(input, depth)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), |i| parse_mul_div(i, depth)),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    let (rest, init) = parse_unary(input, depth)?;
    fold_many0(
        pair(ws(alt((mul_op, char('/')))), |i| parse_unary(i, depth)),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

// A single `*` that is not the start of `**`.
fn mul_op(input: &str) -> ParseResult<'_, char> {
    let (rest, op) = char('*')(input)?;
    if rest.starts_with('*') {
        return Err(nom::Err::Error(VerboseError {
            errors: vec![(input, VerboseErrorKind::Nom(nom::error::ErrorKind::Char))],
        }));
    }
    Ok((rest, op))
}

// Unary minus binds looser than the power operator: `-x**2` is `-(x**2)`.
// Each sign, exponent and parenthesised group is one level of nesting.
fn parse_unary(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    if depth > MAX_NESTING {
        return Err(too_deep(input));
    }
    match preceded(ws(char('-')), |i| parse_unary(i, depth + 1))(input) {
        Ok((rest, expr)) => return Ok((rest, Expr::Neg(expr.boxed()))),
        Err(nom::Err::Error(_)) => {}
        Err(fatal) => return Err(fatal),
    }
    match preceded(ws(char('+')), |i| parse_unary(i, depth + 1))(input) {
        Ok(parsed) => return Ok(parsed),
        Err(nom::Err::Error(_)) => {}
        Err(fatal) => return Err(fatal),
    }
    parse_pow(input, depth)
}

fn parse_pow(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    let (rest, base) = parse_primary(input, depth)?;
    match preceded(ws(alt((tag("**"), tag("^")))), |i| parse_unary(i, depth + 1))(rest) {
        Ok((next, exp)) => Ok((next, Expr::Pow(base.boxed(), exp.boxed()))),
        Err(nom::Err::Error(_)) => Ok((rest, base)),
        Err(fatal) => Err(fatal),
    }
}

fn parse_primary(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    alt((
        |i| parse_parens(i, depth),
        parse_number,
        |i| parse_call(i, depth),
        parse_identifier,
    ))(input)
}

fn parse_parens(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    delimited(
        ws(char('(')),
        |i| parse_add_sub(i, depth + 1),
        ws(char(')')),
    )(input)
}

fn parse_number(input: &str) -> ParseResult<'_, Expr> {
    map(
        ws(map_res(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            parse_decimal,
        )),
        Expr::Constant,
    )(input)
}

fn parse_call(input: &str, depth: usize) -> ParseResult<'_, Expr> {
    map_opt(
        pair(
            ws(identifier),
            delimited(
                ws(char('(')),
                |i| parse_add_sub(i, depth + 1),
                ws(char(')')),
            ),
        ),
        |(name, arg)| Func::from_name(name).map(|f| Expr::Func(f, arg.boxed())),
    )(input)
}

fn parse_identifier(input: &str) -> ParseResult<'_, Expr> {
    map(ws(identifier), |s: &str| Expr::Variable(s.to_string()))(input)
}

fn identifier(input: &str) -> ParseResult<'_, &str> {
    recognize(pair(alpha1, alphanumeric0))(input)
}

/// Decimal literals are kept exact: `2.5` becomes `5/2`.
fn parse_decimal(text: &str) -> std::result::Result<Rational, ParseBigIntError> {
    match text.split_once('.') {
        None => Ok(Rational::from_integer(BigInt::from_str_radix(text, 10)?)),
        Some((whole, frac)) => {
            let numer = BigInt::from_str_radix(&format!("{whole}{frac}"), 10)?;
            let denom = BigInt::from(10u32).pow(frac.len() as u32);
            Ok(Rational::new(numer, denom))
        }
    }
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
