use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Domain;
use crate::env::Environment;
use crate::error::{MathError, Result};
use crate::eval::Evaluator;
use crate::expr::Expr;
use crate::optimize::{BoundedSearch, Bounds, SearchConfig};

/// Both searches start here (clipped into the domain).
pub const INITIAL_GUESS: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub point: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub minimum: Extremum,
    pub maximum: Extremum,
}

/// Finds one local minimum and one local maximum of a function over a domain.
///
/// The maximum is the minimum of the negated function. The two searches are
/// independent; for non-convex functions either may stop at a local extremum.
#[derive(Debug, Clone, Default)]
pub struct FunctionOptimizer {
    env: Environment,
    search: BoundedSearch,
}

impl FunctionOptimizer {
    pub fn new(env: Environment, config: SearchConfig) -> Self {
        Self {
            env,
            search: BoundedSearch::new(config),
        }
    }

    pub fn optimize(&self, function: &Expr, domain: Domain) -> Result<Extrema> {
        let bounds = Bounds::new(domain.low, domain.high)?;
        if bounds.is_degenerate() {
            warn!(point = bounds.low, "degenerate domain, evaluating a single point");
        }
        let evaluator = Evaluator::new(function.clone(), self.env.clone())?;

        let min = self
            .search
            .minimize(|x| evaluator.eval(x), INITIAL_GUESS, bounds)
            .map_err(into_optimization_error)?;
        let max = self
            .search
            .minimize(|x| evaluator.eval(x).map(|v| -v), INITIAL_GUESS, bounds)
            .map_err(into_optimization_error)?;
        debug!(
            min_point = min.point,
            min_iterations = min.iterations,
            max_point = max.point,
            max_iterations = max.iterations,
            "extrema located"
        );

        Ok(Extrema {
            minimum: Extremum {
                point: min.point,
                value: min.value,
            },
            maximum: Extremum {
                point: max.point,
                value: -max.value,
            },
        })
    }
}

fn into_optimization_error(err: MathError) -> MathError {
    if err.is_optimization() {
        err
    } else {
        MathError::Optimization(err.to_string())
    }
}
