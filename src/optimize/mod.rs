//! Bounded, derivative-free local minimization of a scalar function.
//!
//! A compass search: from the starting point, try one step to either side
//! (positive side first), move on strict improvement and grow the step,
//! otherwise shrink it. The search is local; it settles in whichever basin the
//! starting point leads to and makes no claim about the global minimum.

mod config;

pub use config::SearchConfig;

use tracing::{trace, warn};

use crate::error::{MathError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(MathError::Domain { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    pub fn clip(&self, x: f64) -> f64 {
        x.clamp(self.low, self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub point: f64,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BoundedSearch {
    config: SearchConfig,
}

impl BoundedSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Minimize `f` inside `bounds` starting from `x0` (clipped into the bounds).
    ///
    /// Any evaluation error, or a non-finite value, aborts the search.
    pub fn minimize<F>(&self, f: F, x0: f64, bounds: Bounds) -> Result<Minimum>
    where
        F: Fn(f64) -> Result<f64>,
    {
        let eval = |x: f64| -> Result<f64> {
            let value = f(x)?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(MathError::Optimization(format!(
                    "objective is not finite at {x}"
                )))
            }
        };

        let mut best = bounds.clip(x0);
        let mut best_value = eval(best)?;
        if bounds.is_degenerate() {
            return Ok(Minimum {
                point: best,
                value: best_value,
                iterations: 0,
                converged: true,
            });
        }

        let mut step = bounds.width() * self.config.initial_step_fraction;
        let mut iterations = 0;
        while step > self.config.tolerance {
            if iterations == self.config.max_iterations {
                warn!(
                    iterations,
                    point = best,
                    value = best_value,
                    "bounded search stopped before converging"
                );
                return Ok(Minimum {
                    point: best,
                    value: best_value,
                    iterations,
                    converged: false,
                });
            }
            iterations += 1;

            let mut moved = false;
            for direction in [1.0, -1.0] {
                let candidate = bounds.clip(best + direction * step);
                if candidate == best {
                    continue;
                }
                let value = eval(candidate)?;
                if value < best_value {
                    best = candidate;
                    best_value = value;
                    moved = true;
                    break;
                }
            }
            step *= if moved {
                self.config.expansion
            } else {
                self.config.contraction
            };
            trace!(iterations, point = best, value = best_value, step, "search step");
        }

        Ok(Minimum {
            point: best,
            value: best_value,
            iterations,
            converged: true,
        })
    }
}
