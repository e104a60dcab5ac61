use tracing::debug;

use crate::env::Environment;
use crate::error::{MathError, Result};
use crate::expr::Expr;
use crate::solver::{Root, solve_univariate};

/// Roots in the order the solve primitive produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions {
    pub roots: Vec<Root>,
}

impl Solutions {
    pub fn as_strings(&self) -> Vec<String> {
        self.roots.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquationSolver {
    env: Environment,
}

impl EquationSolver {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Solve `zero_form = 0` for the environment's symbol.
    ///
    /// Roots are neither re-sorted nor deduplicated here. Every failure is
    /// reported as [`MathError::Unsolvable`] with the underlying message.
    /// Named constants are only supported in functions to optimize, so an
    /// equation mentioning one is rejected by name.
    pub fn solve(&self, zero_form: &Expr) -> Result<Solutions> {
        let constants: Vec<String> = zero_form
            .free_symbols()
            .into_iter()
            .filter(|name| *name != self.env.symbol)
            .map(|name| format!("'{name}'"))
            .collect();
        if !constants.is_empty() {
            return Err(MathError::Unsolvable(format!(
                "named constant {} is not supported in equations; constants are only supported in functions to optimize",
                constants.join(", ")
            )));
        }
        let roots = solve_univariate(zero_form, &self.env.symbol).map_err(|e| match e {
            MathError::Unsolvable(msg) => MathError::Unsolvable(msg),
            other => MathError::Unsolvable(other.to_string()),
        })?;
        debug!(symbol = %self.env.symbol, count = roots.len(), "equation solved");
        Ok(Solutions { roots })
    }
}
