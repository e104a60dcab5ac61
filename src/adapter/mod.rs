//! Adapters between canonical expressions and the computation primitives.

pub mod equation;
pub mod optimization;

pub use equation::{EquationSolver, Solutions};
pub use optimization::{Extrema, Extremum, FunctionOptimizer, INITIAL_GUESS};
