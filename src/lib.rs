//! Moth-flame hyperparameter search for decision-tree classifiers.
//!
//! Searches a small mixed integer/categorical space (`max_depth`,
//! `min_samples_split`, `min_samples_leaf`, `max_features`) with a
//! moth-flame metaheuristic. The classifier itself is supplied by the
//! caller as an [`Evaluator`](mfo::Evaluator); this crate only drives the
//! search.
//!
//! - [`space`]: Candidate representation, bounds, sampling and repair
//! - [`mfo`]: Distance/intensity model, position update and the search loop
//! - [`data`]: Validated train/test partitions passed to the evaluator
//! - [`error`]: Tagged failures (input, evaluation, configuration)
//!
//! # Example
//!
//! ```
//! use u_mfo::mfo::MfoConfig;
//! use u_mfo::{EvaluationError, HyperParams, SplitData};
//!
//! let x = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.1, 0.8], vec![0.9, 0.3]];
//! let y = vec![0, 1, 0, 1];
//!
//! let evaluator = |p: &HyperParams, _: &SplitData| -> Result<f64, EvaluationError> {
//!     Ok(if p.max_depth >= 2 { 1.0 } else { 0.5 })
//! };
//!
//! let config = MfoConfig::default().with_population(5).with_iterations(3).with_seed(1);
//! let result = u_mfo::tune(&evaluator, x.clone(), y.clone(), x, y, &config).unwrap();
//! assert!(result.report.accuracy >= 0.5);
//! ```

pub mod data;
pub mod error;
pub mod mfo;
pub mod space;

pub use data::SplitData;
pub use error::{ConfigError, ErrorKind, EvaluationError, InputError, MfoError};
pub use mfo::{Evaluator, MfoConfig, MfoResult, MfoRunner, TuneReport};
pub use space::{HyperParams, MaxFeatures, Moth};

/// Validates raw train/test arrays, then runs the search.
///
/// # Errors
///
/// [`MfoError::Input`] when the arrays are malformed (no evaluation is
/// attempted), otherwise whatever [`MfoRunner::run`] returns.
pub fn tune<E: Evaluator>(
    evaluator: &E,
    x_train: Vec<Vec<f64>>,
    y_train: Vec<usize>,
    x_test: Vec<Vec<f64>>,
    y_test: Vec<usize>,
    config: &MfoConfig,
) -> Result<MfoResult, MfoError> {
    let data = SplitData::new(x_train, y_train, x_test, y_test)?;
    MfoRunner::run(evaluator, &data, config)
}
