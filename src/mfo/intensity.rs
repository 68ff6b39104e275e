//! Distance to the flame and the light intensity derived from it.

use crate::space::Moth;

/// Mixed-metric distance between two moths.
///
/// Euclidean norm over the raw numeric differences, plus `1.0` when the
/// `max_features` values differ. Dimensions are not normalized.
///
/// # Examples
///
/// ```
/// use u_mfo::mfo::distance;
/// use u_mfo::space::{MaxFeatures, Moth};
///
/// let a = Moth { max_depth: 1.0, min_samples_split: 2.0, min_samples_leaf: 1.0, max_features: MaxFeatures::Sqrt };
/// let b = Moth { max_depth: 4.0, min_samples_split: 6.0, min_samples_leaf: 1.0, max_features: MaxFeatures::Log2 };
/// assert_eq!(distance(&a, &b), 6.0);
/// ```
pub fn distance(a: &Moth, b: &Moth) -> f64 {
    let squared: f64 = a
        .numeric()
        .iter()
        .zip(b.numeric())
        .map(|(x, y)| (x - y).powi(2))
        .sum();
    let mismatch = if a.max_features == b.max_features {
        0.0
    } else {
        1.0
    };
    squared.sqrt() + mismatch
}

/// Light intensity `1 / (1 + alpha * distance)`.
///
/// In `(0, 1]` for non-negative inputs, `1.0` at distance zero and
/// decreasing with distance.
pub fn intensity(distance: f64, alpha: f64) -> f64 {
    1.0 / (1.0 + alpha * distance)
}
