//! Request and response values exchanged with callers.
//!
//! Field names follow the wire format of the computation service
//! (`equation`, `function`, `latex_format`, ...).

use serde::{Deserialize, Serialize};

use crate::adapter::Extremum;
use crate::error::{Fault, MathError, Result};

pub const DEFAULT_DOMAIN: Domain = Domain {
    low: -10.0,
    high: 10.0,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationRequest {
    #[serde(alias = "expression")]
    pub equation: String,
}

impl EquationRequest {
    pub fn new(equation: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    #[serde(alias = "expression")]
    pub function: String,
    /// Falls back to the service's default domain when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

impl OptimizationRequest {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, low: f64, high: f64) -> Self {
        self.domain = Some(Domain { low, high });
        self
    }
}

/// Closed interval `[low, high]`, written as a two-element array on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Domain {
    pub low: f64,
    pub high: f64,
}

impl Default for Domain {
    fn default() -> Self {
        DEFAULT_DOMAIN
    }
}

impl From<(f64, f64)> for Domain {
    fn from((low, high): (f64, f64)) -> Self {
        Domain { low, high }
    }
}

impl From<Domain> for (f64, f64) {
    fn from(d: Domain) -> Self {
        (d.low, d.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    pub status: Status,
    pub result: ResultPayload,
    pub latex_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultPayload {
    Equation(EquationPayload),
    Optimization(OptimizationPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationPayload {
    pub solutions: Vec<String>,
    pub original_equation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPayload {
    pub minimum: Extremum,
    pub maximum: Extremum,
    pub original_function: String,
}

/// Failure reply produced at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub kind: String,
    pub fault: Fault,
    pub status_code: u16,
    /// The underlying error message, verbatim.
    pub detail: String,
}

impl From<&MathError> for ErrorResponse {
    fn from(err: &MathError) -> Self {
        let fault = err.fault();
        ErrorResponse {
            status: Status::Failure,
            kind: err.kind().to_string(),
            fault,
            status_code: fault.status_code(),
            detail: err.to_string(),
        }
    }
}

impl From<MathError> for ErrorResponse {
    fn from(err: MathError) -> Self {
        ErrorResponse::from(&err)
    }
}

pub type Response = std::result::Result<ComputationResult, ErrorResponse>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Equation,
    Optimization,
}

/// Output contract of the upstream natural-language extraction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQuery {
    #[serde(rename = "type")]
    pub kind: QueryKind,
    pub expression: String,
    #[serde(default)]
    pub original_query: String,
}

impl ExtractedQuery {
    /// Parse the extraction service's JSON reply. Model replies are often
    /// wrapped in a Markdown code fence, which is stripped first.
    pub fn from_model_reply(reply: &str) -> Result<Self> {
        let body = strip_code_fence(reply.trim());
        serde_json::from_str(body).map_err(|e| {
            MathError::Normalization(format!("malformed extraction reply: {e}"))
        })
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop an info string such as `json` on the opening fence line.
    match inner.split_once('\n') {
        Some((info, rest)) if !info.trim_start().starts_with('{') => rest.trim(),
        _ => inner.trim(),
    }
}
