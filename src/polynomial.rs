//! Exact univariate polynomials and rational functions over the rationals.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::expr::{Expr, Rational};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest exponent accepted when expanding powers.
pub const MAX_DEGREE: usize = 64;

/// Trial division stops past this bound; larger constant terms skip the rational root search.
const DIVISOR_SEARCH_LIMIT: u64 = 1_000_000;

/// Most `p/q` candidates the rational root search will evaluate.
const ROOT_CANDIDATE_LIMIT: usize = 20_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    coeffs: BTreeMap<usize, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn one() -> Self {
        Poly::from_constant(Rational::one())
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Poly::monomial(1, Rational::one())
    }

    pub fn monomial(power: usize, coeff: Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        if !coeff.is_zero() {
            coeffs.insert(power, coeff);
        }
        Poly { coeffs }
    }

    pub fn from_constant(c: Rational) -> Self {
        Poly::monomial(0, c)
    }

    /// Build from coefficients listed from the constant term upwards.
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        coeffs
            .iter()
            .enumerate()
            .fold(Poly::zero(), |acc, (power, c)| {
                acc + Poly::monomial(power, Rational::from_integer(BigInt::from(*c)))
            })
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.keys().next_back().copied()
    }

    pub fn leading_coeff(&self) -> Rational {
        self.degree()
            .and_then(|d| self.coeffs.get(&d).cloned())
            .unwrap_or_else(Rational::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs.get(&0).is_some_and(|c| c.is_one())
    }

    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs
            .get(&power)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn pow(&self, exp: usize) -> Self {
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result * &base;
            }
            base = base.clone() * &base;
            n /= 2;
        }
        result
    }

    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Poly::zero();
        }
        Poly {
            coeffs: self
                .coeffs
                .iter()
                .map(|(exp, c)| (*exp, c * k))
                .collect(),
        }
    }

    pub fn derivative(&self) -> Self {
        let mut coeffs = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            if *exp == 0 {
                continue;
            }
            let factor = Rational::from_integer(BigInt::from(*exp));
            coeffs.insert(exp - 1, coeff * factor);
        }
        Poly { coeffs }
    }

    pub fn monic(&self) -> Self {
        let lc = self.leading_coeff();
        if lc.is_zero() {
            return self.clone();
        }
        self.scale(&lc.recip())
    }

    pub fn evaluate(&self, x: &Rational) -> Rational {
        // Horner from the top degree down.
        let Some(degree) = self.degree() else {
            return Rational::zero();
        };
        (0..=degree)
            .rev()
            .fold(Rational::zero(), |acc, exp| acc * x + self.coeff(exp))
    }

    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let Some(divisor_degree) = divisor.degree() else {
            return (Poly::zero(), self.clone());
        };
        let divisor_lc = divisor.leading_coeff();
        let mut remainder = self.clone();
        let mut quotient = Poly::zero();

        while let Some(r_deg) = remainder.degree() {
            if r_deg < divisor_degree {
                break;
            }
            let term = Poly::monomial(
                r_deg - divisor_degree,
                remainder.leading_coeff() / &divisor_lc,
            );
            remainder = remainder - &(term.clone() * divisor);
            quotient = quotient + term;
        }

        (quotient, remainder)
    }

    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (q, r) = self.div_rem(divisor);
        if r.is_zero() { Some(q) } else { None }
    }

    /// Monic greatest common divisor.
    pub fn gcd(a: &Poly, b: &Poly) -> Poly {
        let mut r0 = a.clone();
        let mut r1 = b.clone();
        while !r1.is_zero() {
            let (_, r) = r0.div_rem(&r1);
            r0 = r1;
            r1 = r;
        }
        r0.monic()
    }

    /// Same roots, each with multiplicity one.
    pub fn square_free_part(&self) -> Self {
        if self.degree().unwrap_or(0) < 2 {
            return self.clone();
        }
        let g = Poly::gcd(self, &self.derivative());
        self.div_exact(&g).unwrap_or_else(|| self.clone())
    }

    /// Content (a signed rational) and the primitive integer polynomial with a
    /// positive leading coefficient, such that `self == primitive * content`.
    pub fn content_and_primitive_part(&self) -> (Rational, Self) {
        if self.is_zero() {
            return (Rational::zero(), Poly::zero());
        }
        let mut lcm = BigInt::one();
        for coeff in self.coeffs.values() {
            lcm = lcm.lcm(coeff.denom());
        }

        let mut gcd_num = BigInt::zero();
        let mut scaled_nums = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            let num = (coeff * Rational::from_integer(lcm.clone())).to_integer();
            gcd_num = gcd_num.gcd(&num);
            scaled_nums.insert(*exp, num);
        }

        let mut primitive = Poly {
            coeffs: scaled_nums
                .into_iter()
                .map(|(exp, num)| (exp, Rational::from_integer(num / &gcd_num)))
                .collect(),
        };
        let mut content = Rational::new(gcd_num, lcm);
        if primitive.leading_coeff().is_negative() {
            primitive = -primitive;
            content = -content;
        }
        (content, primitive)
    }

    /// Distinct rational roots in ascending order, found with the rational
    /// root theorem. `None` when the coefficients are too large to factor or
    /// give more than `ROOT_CANDIDATE_LIMIT` candidates.
    pub fn rational_roots(&self) -> Option<Vec<Rational>> {
        let (_, primitive) = self.content_and_primitive_part();
        let Some(&lowest) = primitive.coeffs.keys().next() else {
            return Some(Vec::new());
        };

        let mut roots = BTreeSet::new();
        if lowest > 0 {
            roots.insert(Rational::zero());
        }
        let trailing = primitive.coeff(lowest).to_integer();
        let leading = primitive.leading_coeff().to_integer();
        let numerators = divisors(&trailing)?;
        let denominators = divisors(&leading)?;
        if numerators.len().saturating_mul(denominators.len()) > ROOT_CANDIDATE_LIMIT {
            return None;
        }

        for p in &numerators {
            for q in &denominators {
                let candidate = Rational::new(p.clone(), q.clone());
                for c in [candidate.clone(), -candidate] {
                    if !roots.contains(&c) && primitive.evaluate(&c).is_zero() {
                        roots.insert(c);
                    }
                }
            }
        }
        Some(roots.into_iter().collect())
    }

    pub fn to_expr(&self, var: &str) -> Expr {
        let mut terms = self.coeffs.iter().rev().map(|(exp, coeff)| {
            let power = match exp {
                0 => None,
                1 => Some(Expr::var(var)),
                n => Some(Expr::Pow(
                    Expr::var(var).boxed(),
                    Expr::integer(BigInt::from(*n)).boxed(),
                )),
            };
            match power {
                None => Expr::Constant(coeff.clone()),
                Some(p) if coeff.is_one() => p,
                Some(p) => Expr::Mul(Expr::Constant(coeff.clone()).boxed(), p.boxed()),
            }
        });
        match terms.next() {
            None => Expr::Constant(Rational::zero()),
            Some(first) => terms.fold(first, |acc, t| Expr::Add(acc.boxed(), t.boxed())),
        }
    }

    fn merge(mut self, rhs: &Poly, sign: bool) -> Poly {
        for (exp, coeff) in &rhs.coeffs {
            let coeff = if sign { coeff.clone() } else { -coeff };
            match self.coeffs.entry(*exp) {
                Entry::Vacant(entry) => {
                    entry.insert(coeff);
                }
                Entry::Occupied(mut entry) => {
                    let updated = entry.get() + coeff;
                    if updated.is_zero() {
                        entry.remove();
                    } else {
                        *entry.get_mut() = updated;
                    }
                }
            }
        }
        self
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr("x"))
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        self.merge(&rhs, true)
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        self.merge(&rhs, false)
    }
}

impl std::ops::Sub<&Poly> for Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        self.merge(rhs, false)
    }
}

impl std::ops::Mul<&Poly> for Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (exp_a, coeff_a) in &self.coeffs {
            for (exp_b, coeff_b) in &rhs.coeffs {
                out = out + Poly::monomial(exp_a + exp_b, coeff_a * coeff_b);
            }
        }
        out
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        self * &rhs
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly {
            coeffs: self.coeffs.into_iter().map(|(e, c)| (e, -c)).collect(),
        }
    }
}

/// `num / den` with exact coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalFunction {
    pub num: Poly,
    pub den: Poly,
}

impl RationalFunction {
    fn poly(num: Poly) -> Self {
        RationalFunction {
            num,
            den: Poly::one(),
        }
    }

    /// Convert sums, products, quotients and integer powers in `var`.
    /// Anything else (functions, fractional powers, other symbols) gives `None`.
    pub fn from_expr(expr: &Expr, var: &str) -> Option<Self> {
        match expr {
            Expr::Constant(c) => Some(Self::poly(Poly::from_constant(c.clone()))),
            Expr::Variable(v) if v == var => Some(Self::poly(Poly::x())),
            Expr::Variable(_) | Expr::Func(_, _) => None,
            Expr::Neg(inner) => {
                let f = Self::from_expr(inner, var)?;
                Some(RationalFunction {
                    num: -f.num,
                    den: f.den,
                })
            }
            Expr::Add(a, b) | Expr::Sub(a, b) => {
                let l = Self::from_expr(a, var)?;
                let r = Self::from_expr(b, var)?;
                let left = l.num * &r.den;
                let right = r.num * &l.den;
                let num = if matches!(expr, Expr::Add(_, _)) {
                    left + right
                } else {
                    left - right
                };
                Some(RationalFunction {
                    num,
                    den: l.den * r.den,
                })
            }
            Expr::Mul(a, b) => {
                let l = Self::from_expr(a, var)?;
                let r = Self::from_expr(b, var)?;
                Some(RationalFunction {
                    num: l.num * r.num,
                    den: l.den * r.den,
                })
            }
            Expr::Div(a, b) => {
                let l = Self::from_expr(a, var)?;
                let r = Self::from_expr(b, var)?;
                if r.num.is_zero() {
                    return None;
                }
                Some(RationalFunction {
                    num: l.num * r.den,
                    den: l.den * r.num,
                })
            }
            Expr::Pow(base, exp) => {
                let k = extract_integer(exp)?;
                let magnitude = k.unsigned_abs().to_usize().filter(|m| *m <= MAX_DEGREE)?;
                let f = Self::from_expr(base, var)?;
                if k >= 0 {
                    Some(RationalFunction {
                        num: f.num.pow(magnitude),
                        den: f.den.pow(magnitude),
                    })
                } else if f.num.is_zero() {
                    None
                } else {
                    Some(RationalFunction {
                        num: f.den.pow(magnitude),
                        den: f.num.pow(magnitude),
                    })
                }
            }
        }
    }

    /// Cancel the common factors of numerator and denominator.
    pub fn reduce(self) -> Self {
        let g = Poly::gcd(&self.num, &self.den);
        if g.is_zero() || g.is_one() {
            return self;
        }
        match (self.num.div_exact(&g), self.den.div_exact(&g)) {
            (Some(num), Some(den)) => RationalFunction { num, den },
            _ => self,
        }
    }
}

fn extract_integer(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Constant(c) if c.is_integer() => c.to_integer().to_i64(),
        Expr::Neg(inner) => extract_integer(inner).map(|k| -k),
        _ => None,
    }
}

/// Positive divisors of `|n|`, or `None` when `|n|` is too large to factor by trial division.
fn divisors(n: &BigInt) -> Option<Vec<BigInt>> {
    let n = n.abs();
    if n.is_zero() {
        return Some(Vec::new());
    }
    let limit = BigInt::from(DIVISOR_SEARCH_LIMIT);
    if n > &limit * &limit {
        return None;
    }
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = BigInt::one();
    while &i * &i <= n {
        if (&n % &i).is_zero() {
            let pair = &n / &i;
            if pair != i {
                large.push(pair);
            }
            small.push(i.clone());
        }
        i += 1u32;
    }
    small.extend(large.into_iter().rev());
    Some(small)
}
