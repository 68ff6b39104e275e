//! Error types.
//!
//! Every failure of a tuning run surfaces as an [`MfoError`]. A failed run
//! never degrades into a numeric sentinel: an accuracy of `0.0` is a valid
//! result and is always carried by `Ok`.

/// Coarse classification of a failure, for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed training/test data.
    Input,
    /// The objective evaluator failed.
    Evaluation,
    /// Invalid run configuration.
    Config,
}

/// Rejected training/test data. Raised before any search begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{partition}: features have {features} rows but labels have {labels}")]
    SampleCountMismatch {
        partition: &'static str,
        features: usize,
        labels: usize,
    },
    #[error("{partition}: row {row} has {found} columns, expected {expected}")]
    RaggedFeatures {
        partition: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("train has {train} feature columns but test has {test}")]
    FeatureWidthMismatch { train: usize, test: usize },
    #[error("{0} partition is empty")]
    EmptyPartition(&'static str),
}

/// Failure reported by (or about) the objective evaluator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid hyperparameter configuration: {0}")]
    InvalidConfiguration(String),
    #[error("model failed to fit: {0}")]
    FitFailed(String),
    #[error("evaluator returned score {0}, expected a value in [0, 1]")]
    InvalidScore(f64),
    #[error("{0}")]
    Other(String),
}

/// Invalid [`MfoConfig`](crate::mfo::MfoConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("n_population must be at least 1")]
    EmptyPopulation,
    #[error("alpha must be finite and non-negative, got {0}")]
    InvalidAlpha(f64),
    #[error("beta must be finite, got {0}")]
    InvalidBeta(f64),
    #[error("gamma must be finite and non-negative, got {0}")]
    InvalidGamma(f64),
}

/// Failure of a tuning run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MfoError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl MfoError {
    /// Returns the error kind tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MfoError::Input(_) => ErrorKind::Input,
            MfoError::Evaluation(_) => ErrorKind::Evaluation,
            MfoError::Config(_) => ErrorKind::Config,
        }
    }
}
