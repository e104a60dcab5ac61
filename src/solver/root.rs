use std::fmt;

use crate::expr::Rational;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact root of a polynomial of degree at most two over the rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    Rational(Rational),
    /// `center + scale * sqrt(radicand)` with a square-free radicand other than
    /// 0 and 1; a negative radicand carries the imaginary unit `I`.
    Surd {
        center: Rational,
        scale: Rational,
        radicand: BigInt,
    },
}

impl Root {
    pub fn is_real(&self) -> bool {
        match self {
            Root::Rational(_) => true,
            Root::Surd { radicand, .. } => radicand.is_positive(),
        }
    }

    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Root::Rational(r) => Some(r),
            Root::Surd { .. } => None,
        }
    }

    /// Real value, or `None` for complex roots.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Root::Rational(r) => r.to_f64(),
            Root::Surd {
                center,
                scale,
                radicand,
            } if radicand.is_positive() => {
                Some(center.to_f64()? + scale.to_f64()? * radicand.to_f64()?.sqrt())
            }
            Root::Surd { .. } => None,
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Rational(r) => write!(f, "{}", show_rational(r)),
            Root::Surd {
                center,
                scale,
                radicand,
            } => {
                let radical = if radicand.is_negative() {
                    let magnitude = -radicand;
                    if magnitude.is_one() {
                        "I".to_string()
                    } else {
                        format!("sqrt({magnitude})*I")
                    }
                } else {
                    format!("sqrt({radicand})")
                };
                let k = scale.abs();
                let term = match (k.numer().is_one(), k.denom().is_one()) {
                    (true, true) => radical,
                    (false, true) => format!("{}*{radical}", k.numer()),
                    (true, false) => format!("{radical}/{}", k.denom()),
                    (false, false) => format!("{}*{radical}/{}", k.numer(), k.denom()),
                };
                let sign = if scale.is_negative() { "-" } else { "+" };
                if center.is_zero() {
                    if scale.is_negative() {
                        write!(f, "-{term}")
                    } else {
                        write!(f, "{term}")
                    }
                } else {
                    write!(f, "{} {sign} {term}", show_rational(center))
                }
            }
        }
    }
}

pub(crate) fn show_rational(r: &Rational) -> String {
    if r.is_integer() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}
