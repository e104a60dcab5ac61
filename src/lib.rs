//! Normalization and computation pipeline for informally typed mathematics.
//!
//! Raw input such as `x^2 - 4 = 0` or `5x^2 + 3` is rewritten into canonical
//! syntax, parsed into an [`Expr`], and handed to either the exact equation
//! solver or the bounded extremum search. Results come back as a
//! [`ComputationResult`] carrying both structured values and LaTeX.

pub mod adapter;
pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod normalize;
pub mod optimize;
pub mod parser;
pub mod polynomial;
pub mod service;
pub mod solver;

pub use adapter::{EquationSolver, Extrema, Extremum, FunctionOptimizer, Solutions};
pub use api::{
    ComputationResult, Domain, EquationRequest, ErrorResponse, ExtractedQuery,
    OptimizationRequest, QueryKind, Response, ResultPayload, Status,
};
pub use config::{ConfigError, LogLevel, ServiceConfig};
pub use env::Environment;
pub use error::{Fault, MathError, Result};
pub use expr::{Expr, Func, Rational, rational};
pub use format::{latex, pretty};
pub use normalize::{Normalizer, ZeroForm};
pub use optimize::{BoundedSearch, Bounds, SearchConfig};
pub use parser::parse_expr;
pub use polynomial::Poly;
pub use service::MathService;
pub use solver::{Root, solve_univariate};
