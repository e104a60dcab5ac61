use serde::{Deserialize, Serialize};

/// Settings for [`BoundedSearch`](super::BoundedSearch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The search stops once the step length falls to this value.
    pub tolerance: f64,
    /// Cap on search rounds; the best point so far is returned when reached.
    pub max_iterations: usize,
    /// First step length as a fraction of the domain width.
    pub initial_step_fraction: f64,
    /// Step growth factor after a successful move.
    pub expansion: f64,
    /// Step shrink factor after a failed round.
    pub contraction: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 500,
            initial_step_fraction: 0.1,
            expansion: 2.0,
            contraction: 0.5,
        }
    }
}

impl SearchConfig {
    /// Reasons this configuration cannot drive a search, if any.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !(self.tolerance > 0.0) {
            out.push(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if self.max_iterations == 0 {
            out.push("max_iterations must be at least 1".to_string());
        }
        if !(self.initial_step_fraction > 0.0 && self.initial_step_fraction <= 1.0) {
            out.push(format!(
                "initial_step_fraction must lie in (0, 1], got {}",
                self.initial_step_fraction
            ));
        }
        if !(self.expansion >= 1.0) {
            out.push(format!("expansion must be at least 1, got {}", self.expansion));
        }
        if !(self.contraction > 0.0 && self.contraction < 1.0) {
            out.push(format!(
                "contraction must lie in (0, 1), got {}",
                self.contraction
            ));
        }
        out
    }
}
