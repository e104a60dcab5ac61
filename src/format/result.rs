use crate::adapter::{Extrema, Solutions};
use crate::api::{
    ComputationResult, EquationPayload, OptimizationPayload, ResultPayload, Status,
};

const ROOT_SEPARATOR: &str = " \\quad ";

/// `x_1 = r1 \quad x_2 = r2 ...`; empty when there are no roots.
pub fn solutions_latex(symbol: &str, solutions: &[String]) -> String {
    solutions
        .iter()
        .enumerate()
        .map(|(i, root)| format!("{symbol}_{} = {root}", subscript(i + 1)))
        .collect::<Vec<_>>()
        .join(ROOT_SEPARATOR)
}

fn subscript(index: usize) -> String {
    if index < 10 {
        index.to_string()
    } else {
        format!("{{{index}}}")
    }
}

pub fn extrema_latex(extrema: &Extrema) -> String {
    format!(
        "\\begin{{cases}}\n\
         \\text{{Minimum:}} & f({}) = {} \\\\\n\
         \\text{{Maximum:}} & f({}) = {}\n\
         \\end{{cases}}",
        two_places(extrema.minimum.point),
        two_places(extrema.minimum.value),
        two_places(extrema.maximum.point),
        two_places(extrema.maximum.value),
    )
}

/// Two decimal places; values that round to zero print without a sign.
pub fn two_places(value: f64) -> String {
    let text = format!("{value:.2}");
    if text == "-0.00" { "0.00".to_string() } else { text }
}

pub fn equation_result(symbol: &str, original: &str, solutions: &Solutions) -> ComputationResult {
    let strings = solutions.as_strings();
    ComputationResult {
        status: Status::Success,
        latex_format: solutions_latex(symbol, &strings),
        result: ResultPayload::Equation(EquationPayload {
            solutions: strings,
            original_equation: original.to_string(),
        }),
    }
}

pub fn optimization_result(original: &str, extrema: &Extrema) -> ComputationResult {
    ComputationResult {
        status: Status::Success,
        latex_format: extrema_latex(extrema),
        result: ResultPayload::Optimization(OptimizationPayload {
            minimum: extrema.minimum,
            maximum: extrema.maximum,
            original_function: original.to_string(),
        }),
    }
}
