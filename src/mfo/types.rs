//! Objective evaluator contract.

use crate::data::SplitData;
use crate::error::EvaluationError;
use crate::space::HyperParams;

/// Scores a hyperparameter configuration.
///
/// Implementations typically fit a classifier on the training partition
/// and return its accuracy on the test partition. The optimizer treats the
/// evaluator as a black box: calls may be non-deterministic, and nothing
/// is cached between them.
///
/// Closures with the matching signature implement this trait.
///
/// # Examples
///
/// ```
/// use u_mfo::{EvaluationError, HyperParams, SplitData};
/// use u_mfo::mfo::Evaluator;
///
/// let shallow_is_better = |p: &HyperParams, _: &SplitData| -> Result<f64, EvaluationError> {
///     Ok(1.0 / p.max_depth as f64)
/// };
///
/// fn assert_evaluator<E: Evaluator>(_: &E) {}
/// assert_evaluator(&shallow_is_better);
/// ```
pub trait Evaluator: Send + Sync {
    /// Returns a fitness in `[0, 1]`. Higher is better.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] when the configuration is invalid or the
    /// model cannot be fitted. The error aborts the whole run.
    fn evaluate(&self, params: &HyperParams, data: &SplitData) -> Result<f64, EvaluationError>;
}

impl<F> Evaluator for F
where
    F: Fn(&HyperParams, &SplitData) -> Result<f64, EvaluationError> + Send + Sync,
{
    fn evaluate(&self, params: &HyperParams, data: &SplitData) -> Result<f64, EvaluationError> {
        self(params, data)
    }
}
