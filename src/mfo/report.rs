//! Final result record.

use crate::space::{HyperParams, MaxFeatures, Moth};

/// Best configuration found and its accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TuneReport {
    pub max_depth: u32,
    pub min_samples_split: u32,
    pub min_samples_leaf: u32,
    pub max_features: MaxFeatures,
    pub accuracy: f64,
}

impl TuneReport {
    /// Packages the flame, truncating its numeric dimensions.
    pub fn from_flame(best: &Moth, fitness: f64) -> Self {
        let p = best.params();
        Self {
            max_depth: p.max_depth,
            min_samples_split: p.min_samples_split,
            min_samples_leaf: p.min_samples_leaf,
            max_features: p.max_features,
            accuracy: fitness,
        }
    }

    pub fn params(&self) -> HyperParams {
        HyperParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            max_features: self.max_features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flame_truncates() {
        let best = Moth {
            max_depth: 12.97,
            min_samples_split: 2.0,
            min_samples_leaf: 4.01,
            max_features: MaxFeatures::All,
        };
        let report = TuneReport::from_flame(&best, 0.875);
        assert_eq!(report.max_depth, 12);
        assert_eq!(report.min_samples_split, 2);
        assert_eq!(report.min_samples_leaf, 4);
        assert_eq!(report.max_features, MaxFeatures::All);
        assert_eq!(report.accuracy, 0.875);
        assert_eq!(report.params(), best.params());
    }

    #[test]
    fn test_zero_accuracy_is_a_report() {
        let best = Moth::from(HyperParams {
            max_depth: 1,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
        });
        let report = TuneReport::from_flame(&best, 0.0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.max_depth, 1);
    }
}
