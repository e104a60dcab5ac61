//! Exact root finding for polynomial and rational equations in one variable.
//!
//! The zero-form expression is turned into `N(x) / D(x)`, common factors are
//! cancelled, and the distinct roots of `N` are found: rational roots first
//! (ascending), then a closed-form pair for a remaining quadratic factor.

mod root;

pub use root::Root;
pub(crate) use root::show_rational;

use tracing::debug;

use crate::error::{MathError, Result};
use crate::expr::{Expr, Rational};
use crate::polynomial::{MAX_DEGREE, Poly, RationalFunction};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Trial division bound used when pulling square factors out of a discriminant.
const SQUARE_FACTOR_LIMIT: u32 = 100_000;

/// Solve `expr = 0` for `var`.
pub fn solve_univariate(expr: &Expr, var: &str) -> Result<Vec<Root>> {
    let function = RationalFunction::from_expr(expr, var)
        .ok_or_else(|| {
            MathError::Unsolvable(format!(
                "'{expr}' is not a polynomial or rational equation in {var}"
            ))
        })?
        .reduce();

    if let Some(degree) = function.num.degree().filter(|d| *d > MAX_DEGREE) {
        return Err(MathError::Unsolvable(format!(
            "degree {degree} exceeds the supported maximum of {MAX_DEGREE}"
        )));
    }
    let numerator = function.num.square_free_part();
    let roots = match numerator.degree() {
        None => {
            debug!(%expr, "equation holds identically");
            Vec::new()
        }
        Some(0) => {
            debug!(%expr, "equation has no solutions");
            Vec::new()
        }
        Some(1 | 2) => closed_form_roots(&numerator),
        Some(_) => {
            let rational = numerator.rational_roots().unwrap_or_else(|| {
                debug!(%numerator, "too many candidates for the rational root search");
                Vec::new()
            });
            let mut rest = numerator;
            for r in &rational {
                let factor = Poly::x() - Poly::from_constant(r.clone());
                rest = rest.div_exact(&factor).ok_or_else(|| {
                    MathError::Unsolvable(format!("failed to divide out the root {r}"))
                })?;
            }
            if let Some(degree) = rest.degree().filter(|d| *d > 2) {
                return Err(MathError::Unsolvable(format!(
                    "no closed-form solution for the degree-{degree} factor {rest}"
                )));
            }
            let mut roots: Vec<Root> = rational.into_iter().map(Root::Rational).collect();
            roots.extend(closed_form_roots(&rest));
            roots
        }
    };
    debug!(%expr, count = roots.len(), "solved");
    Ok(roots)
}

/// Roots of a factor of degree at most two; constants have none.
fn closed_form_roots(factor: &Poly) -> Vec<Root> {
    match factor.degree() {
        Some(1) => vec![Root::Rational(-factor.coeff(0) / factor.coeff(1))],
        Some(2) => quadratic_roots(&factor.coeff(2), &factor.coeff(1), &factor.coeff(0)),
        _ => Vec::new(),
    }
}

/// Roots of `a*x^2 + b*x + c`, smaller (or minus-branch) root first.
pub fn quadratic_roots(a: &Rational, b: &Rational, c: &Rational) -> Vec<Root> {
    let two_a = a * Rational::from_integer(2.into());
    let center = -b / &two_a;
    let discriminant = b * b - a * c * Rational::from_integer(4.into());
    if discriminant.is_zero() {
        return vec![Root::Rational(center)];
    }

    // sqrt(p/q) = sqrt(p*q)/q = s*sqrt(d)/q
    let (square, radicand) = split_square(&(discriminant.numer() * discriminant.denom()));
    let half_width = (Rational::new(square, discriminant.denom().clone()) / two_a).abs();

    if radicand.is_one() {
        return vec![
            Root::Rational(&center - &half_width),
            Root::Rational(center + half_width),
        ];
    }
    vec![
        Root::Surd {
            center: center.clone(),
            scale: -half_width.clone(),
            radicand: radicand.clone(),
        },
        Root::Surd {
            center,
            scale: half_width,
            radicand,
        },
    ]
}

/// Write `n` as `s^2 * d` and return `(s, d)`; `d` keeps the sign of `n`.
fn split_square(n: &BigInt) -> (BigInt, BigInt) {
    let mut rest = n.abs();
    let mut square = BigInt::one();
    let mut free = BigInt::one();
    let mut p = BigInt::from(2u32);
    let limit = BigInt::from(SQUARE_FACTOR_LIMIT);
    while &p * &p <= rest && p <= limit {
        let mut count = 0u32;
        while (&rest % &p).is_zero() {
            rest /= &p;
            count += 1;
        }
        if count > 0 {
            square *= p.pow(count / 2);
            if count.is_odd() {
                free *= &p;
            }
        }
        p += 1u32;
    }
    free *= rest;
    if n.is_negative() {
        free = -free;
    }
    (square, free)
}
