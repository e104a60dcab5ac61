//! Interpreter for parsed expressions.
//!
//! Evaluation walks the [`Expr`] tree and nothing else: there is no path from
//! caller-supplied text to general code execution.

use crate::env::{Bindings, Environment};
use crate::error::{MathError, Result};
use crate::expr::Expr;
use num_traits::ToPrimitive;

pub fn evaluate(expr: &Expr, bindings: &Bindings<'_>) -> Result<f64> {
    let value = match expr {
        Expr::Variable(name) => bindings
            .lookup(name)
            .ok_or_else(|| MathError::Optimization(format!("unknown symbol '{name}'")))?,
        Expr::Constant(r) => r.to_f64().ok_or_else(|| {
            MathError::Optimization(format!("constant {r} is not representable as a float"))
        })?,
        Expr::Add(a, b) => evaluate(a, bindings)? + evaluate(b, bindings)?,
        Expr::Sub(a, b) => evaluate(a, bindings)? - evaluate(b, bindings)?,
        Expr::Mul(a, b) => evaluate(a, bindings)? * evaluate(b, bindings)?,
        Expr::Div(a, b) => {
            let num = evaluate(a, bindings)?;
            let den = evaluate(b, bindings)?;
            if den == 0.0 {
                return Err(MathError::Optimization(format!(
                    "division by zero at {} = {}",
                    bindings.symbol(),
                    bindings.value()
                )));
            }
            num / den
        }
        Expr::Pow(a, b) => {
            let base = evaluate(a, bindings)?;
            let exp = evaluate(b, bindings)?;
            if exp.fract() == 0.0 && exp.abs() <= i32::MAX as f64 {
                base.powi(exp as i32)
            } else {
                base.powf(exp)
            }
        }
        Expr::Neg(a) => -evaluate(a, bindings)?,
        Expr::Func(func, arg) => func.apply(evaluate(arg, bindings)?),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::Optimization(format!(
            "'{expr}' is not finite at {} = {}",
            bindings.symbol(),
            bindings.value()
        )))
    }
}

/// A parsed expression viewed as a real function of the environment's symbol.
#[derive(Debug, Clone)]
pub struct Evaluator {
    expr: Expr,
    env: Environment,
}

impl Evaluator {
    /// Fails when the expression mentions a symbol the environment cannot bind.
    pub fn new(expr: Expr, env: Environment) -> Result<Self> {
        if let Some(unknown) = expr.free_symbols().into_iter().find(|s| !env.is_known(s)) {
            return Err(MathError::Optimization(format!(
                "unknown symbol '{unknown}' in '{expr}'"
            )));
        }
        Ok(Self { expr, env })
    }

    pub fn eval(&self, x: f64) -> Result<f64> {
        evaluate(&self.expr, &self.env.bind(x))
    }
}
