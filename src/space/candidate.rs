//! Candidate representation.

use std::fmt;

/// The `max_features` setting of a decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MaxFeatures {
    /// `sqrt(n_features)` features per split.
    Sqrt,
    /// `log2(n_features)` features per split.
    Log2,
    /// No limit: every feature is considered (`none`).
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    All,
}

impl MaxFeatures {
    /// Every allowed value, in sampling order.
    pub const ALL: [MaxFeatures; 3] = [MaxFeatures::Sqrt, MaxFeatures::Log2, MaxFeatures::All];

    pub fn as_str(self) -> &'static str {
        match self {
            MaxFeatures::Sqrt => "sqrt",
            MaxFeatures::Log2 => "log2",
            MaxFeatures::All => "none",
        }
    }
}

impl fmt::Display for MaxFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A moth: one point in the hyperparameter space.
///
/// Numeric dimensions are continuous while the swarm moves; they are
/// truncated to integers by [`Moth::params`] whenever the candidate is
/// handed to the evaluator or reported.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moth {
    pub max_depth: f64,
    pub min_samples_split: f64,
    pub min_samples_leaf: f64,
    pub max_features: MaxFeatures,
}

impl Moth {
    /// The three numeric dimensions, in the order `max_depth`,
    /// `min_samples_split`, `min_samples_leaf`.
    pub fn numeric(&self) -> [f64; 3] {
        [self.max_depth, self.min_samples_split, self.min_samples_leaf]
    }

    /// Replaces the numeric dimensions, keeping `max_features`.
    pub fn with_numeric(self, values: [f64; 3]) -> Self {
        let [max_depth, min_samples_split, min_samples_leaf] = values;
        Self {
            max_depth,
            min_samples_split,
            min_samples_leaf,
            ..self
        }
    }

    /// Truncates the numeric dimensions toward zero.
    pub fn params(&self) -> HyperParams {
        HyperParams {
            max_depth: self.max_depth as u32,
            min_samples_split: self.min_samples_split as u32,
            min_samples_leaf: self.min_samples_leaf as u32,
            max_features: self.max_features,
        }
    }
}

impl From<HyperParams> for Moth {
    fn from(p: HyperParams) -> Self {
        Self {
            max_depth: p.max_depth as f64,
            min_samples_split: p.min_samples_split as f64,
            min_samples_leaf: p.min_samples_leaf as f64,
            max_features: p.max_features,
        }
    }
}

/// Integer hyperparameters as seen by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyperParams {
    pub max_depth: u32,
    pub min_samples_split: u32,
    pub min_samples_leaf: u32,
    pub max_features: MaxFeatures,
}

impl fmt::Display for HyperParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max_depth={} min_samples_split={} min_samples_leaf={} max_features={}",
            self.max_depth, self.min_samples_split, self.min_samples_leaf, self.max_features
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_truncate() {
        let moth = Moth {
            max_depth: 7.9,
            min_samples_split: 2.0,
            min_samples_leaf: 1.999,
            max_features: MaxFeatures::Log2,
        };
        let p = moth.params();
        assert_eq!(p.max_depth, 7);
        assert_eq!(p.min_samples_split, 2);
        assert_eq!(p.min_samples_leaf, 1);
        assert_eq!(p.max_features, MaxFeatures::Log2);
    }

    #[test]
    fn test_with_numeric_keeps_category() {
        let moth = Moth {
            max_depth: 1.0,
            min_samples_split: 2.0,
            min_samples_leaf: 3.0,
            max_features: MaxFeatures::All,
        };
        let moved = moth.with_numeric([4.5, 5.5, 6.5]);
        assert_eq!(moved.numeric(), [4.5, 5.5, 6.5]);
        assert_eq!(moved.max_features, MaxFeatures::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(MaxFeatures::All.to_string(), "none");
        let p = HyperParams {
            max_depth: 3,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
        };
        assert_eq!(
            p.to_string(),
            "max_depth=3 min_samples_split=2 min_samples_leaf=1 max_features=sqrt"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MaxFeatures::ALL).unwrap();
        assert_eq!(json, r#"["sqrt","log2","none"]"#);
    }
}
