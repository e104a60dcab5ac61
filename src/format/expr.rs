use crate::expr::Expr;
use crate::solver::show_rational;
use num_traits::Signed;

/// Plain-text rendering with minimal parentheses.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) if r.is_negative() => bracket(ctx, 2, show_rational(r)),
            Expr::Constant(r) => show_rational(r),

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Sub(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "+" } else { "-" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => bracket(ctx, 2, format!("{}*{}", pp(2, a), pp(3, b))),

            Expr::Div(a, b) => bracket(ctx, 2, format!("{}/{}", pp(2, a), pp(3, b))),

            Expr::Pow(a, b) => bracket(ctx, 3, format!("{}^{}", pp(4, a), pp(3, b))),

            Expr::Neg(a) => bracket(ctx, 2, format!("-{}", pp(3, a))),

            Expr::Func(func, a) => format!("{}({})", func.name(), pp(0, a)),
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx { format!("({body})") } else { body }
}
