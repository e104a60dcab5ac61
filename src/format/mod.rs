//! Rendering of expressions and computation results.

mod expr;
mod latex;
mod result;

pub use expr::pretty;
pub use latex::latex;
pub use result::{
    equation_result, extrema_latex, optimization_result, solutions_latex, two_places,
};
