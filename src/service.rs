//! Request pipeline: normalize, compute, format.
//!
//! [`MathService`] holds no per-request state and can be shared across
//! threads. The `handle_*` methods are the request boundary: they log the
//! outcome and turn a [`MathError`] into an [`ErrorResponse`].

use tracing::{debug, info, warn};

use crate::adapter::{EquationSolver, FunctionOptimizer};
use crate::api::{
    ComputationResult, EquationRequest, ErrorResponse, ExtractedQuery, OptimizationRequest,
    QueryKind, Response,
};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::format::{equation_result, latex, optimization_result};
use crate::normalize::Normalizer;

#[derive(Debug, Clone)]
pub struct MathService {
    config: ServiceConfig,
    normalizer: Normalizer,
    solver: EquationSolver,
    optimizer: FunctionOptimizer,
}

impl Default for MathService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl MathService {
    pub fn new(config: ServiceConfig) -> Self {
        let env = config.environment();
        Self {
            normalizer: Normalizer::new(env.clone()),
            solver: EquationSolver::new(env.clone()),
            optimizer: FunctionOptimizer::new(env, config.search),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn solve(&self, request: &EquationRequest) -> Result<ComputationResult> {
        let zero_form = self.normalizer.normalize_equation(&request.equation)?;
        let expr = self.normalizer.parse_canonical(zero_form.canonical())?;
        debug!(input = %latex(&expr), "solving");
        let solutions = self.solver.solve(&expr)?;
        Ok(equation_result(
            &self.config.symbol,
            &request.equation,
            &solutions,
        ))
    }

    pub fn optimize(&self, request: &OptimizationRequest) -> Result<ComputationResult> {
        let domain = request.domain.unwrap_or(self.config.default_domain);
        let canonical = self.normalizer.normalize_expression(&request.function)?;
        let expr = self.normalizer.parse_canonical(&canonical)?;
        debug!(input = %latex(&expr), low = domain.low, high = domain.high, "optimizing");
        let extrema = self.optimizer.optimize(&expr, domain)?;
        Ok(optimization_result(&request.function, &extrema))
    }

    /// Route an extracted query to the matching computation.
    pub fn dispatch(&self, query: &ExtractedQuery) -> Result<ComputationResult> {
        match query.kind {
            QueryKind::Equation => self.solve(&EquationRequest::new(query.expression.clone())),
            QueryKind::Optimization => {
                self.optimize(&OptimizationRequest::new(query.expression.clone()))
            }
        }
    }

    pub fn handle_solve(&self, request: &EquationRequest) -> Response {
        respond("solve", &request.equation, self.solve(request))
    }

    pub fn handle_optimize(&self, request: &OptimizationRequest) -> Response {
        respond("optimize", &request.function, self.optimize(request))
    }

    pub fn handle_query(&self, query: &ExtractedQuery) -> Response {
        respond("route", &query.expression, self.dispatch(query))
    }
}

fn respond(operation: &str, input: &str, outcome: Result<ComputationResult>) -> Response {
    match outcome {
        Ok(result) => {
            info!(operation, input, latex = %result.latex_format, "request succeeded");
            Ok(result)
        }
        Err(err) => {
            warn!(operation, input, kind = err.kind(), error = %err, "request failed");
            Err(ErrorResponse::from(err))
        }
    }
}
