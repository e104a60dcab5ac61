use crate::expr::{Expr, Func, Rational};
use num_traits::{One, Signed};

/// Render an expression as LaTeX.
pub fn latex(expr: &Expr) -> String {
    tex(0, expr)
}

fn tex(ctx: u8, expr: &Expr) -> String {
    match expr {
        Expr::Variable(v) if v == "pi" => "\\pi".to_string(),
        Expr::Variable(v) => v.clone(),
        Expr::Constant(r) if r.is_negative() => wrap(ctx, 2, format!("-{}", constant(&-r))),
        Expr::Constant(r) => constant(r),

        Expr::Add(a, b) => {
            let body = match &**b {
                Expr::Neg(inner) => format!("{} - {}", tex(1, a), tex(2, inner)),
                Expr::Constant(r) if r.is_negative() => {
                    format!("{} - {}", tex(1, a), constant(&-r))
                }
                _ => format!("{} + {}", tex(1, a), tex(1, b)),
            };
            wrap(ctx, 1, body)
        }
        Expr::Sub(a, b) => wrap(ctx, 1, format!("{} - {}", tex(1, a), tex(2, b))),

        Expr::Mul(a, b) => {
            let body = if is_coefficient(a) && starts_with_letter(b) {
                format!("{}{}", tex(2, a), tex(3, b))
            } else {
                format!("{} \\cdot {}", tex(2, a), tex(3, b))
            };
            wrap(ctx, 2, body)
        }
        Expr::Div(a, b) => format!("\\frac{{{}}}{{{}}}", tex(0, a), tex(0, b)),

        Expr::Pow(base, exp) if is_half(exp) => format!("\\sqrt{{{}}}", tex(0, base)),
        Expr::Pow(base, exp) => format!("{}^{{{}}}", tex(4, base), tex(0, exp)),

        Expr::Neg(a) => wrap(ctx, 2, format!("-{}", tex(3, a))),

        Expr::Func(Func::Sqrt, a) => format!("\\sqrt{{{}}}", tex(0, a)),
        Expr::Func(Func::Abs, a) => format!("\\left|{}\\right|", tex(0, a)),
        Expr::Func(func, a) => {
            let name = match func {
                Func::Log => "ln",
                other => other.name(),
            };
            format!("\\{name}\\left({}\\right)", tex(0, a))
        }
    }
}

fn constant(r: &Rational) -> String {
    if r.is_integer() {
        r.numer().to_string()
    } else {
        format!("\\frac{{{}}}{{{}}}", r.numer(), r.denom())
    }
}

fn wrap(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("\\left({body}\\right)")
    } else {
        body
    }
}

fn is_coefficient(expr: &Expr) -> bool {
    matches!(expr, Expr::Constant(r) if !r.is_negative())
}

fn starts_with_letter(expr: &Expr) -> bool {
    match expr {
        Expr::Variable(_) | Expr::Func(_, _) => true,
        Expr::Pow(base, _) => matches!(**base, Expr::Variable(_)),
        _ => false,
    }
}

fn is_half(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(r) => *r == Rational::new(One::one(), 2.into()),
        Expr::Div(a, b) => a.is_one() && matches!(&**b, Expr::Constant(d) if *d == Rational::from_integer(2.into())),
        _ => false,
    }
}
