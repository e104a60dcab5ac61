use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("normalization error: {0}")]
    Normalization(String),
    #[error("unsolvable: {0}")]
    Unsolvable(String),
    #[error("optimization error: {0}")]
    Optimization(String),
    #[error("invalid domain: lower bound {low} must not exceed upper bound {high}")]
    Domain { low: f64, high: f64 },
}

impl MathError {
    /// Short machine-readable tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            MathError::Normalization(_) => "normalization_error",
            MathError::Unsolvable(_) => "unsolvable_error",
            MathError::Optimization(_) => "optimization_error",
            MathError::Domain { .. } => "domain_error",
        }
    }

    /// Domain errors are a specialization of optimization errors.
    pub fn is_optimization(&self) -> bool {
        matches!(self, MathError::Optimization(_) | MathError::Domain { .. })
    }

    /// Every failure in the pipeline is attributed to the caller's input.
    pub fn fault(&self) -> Fault {
        Fault::Client
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fault {
    Client,
    Server,
}

impl Fault {
    pub fn status_code(self) -> u16 {
        match self {
            Fault::Client => 400,
            Fault::Server => 500,
        }
    }
}
