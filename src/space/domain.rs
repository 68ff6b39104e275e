//! Domain descriptor: bounds, uniform sampling and clamping.

use super::candidate::{MaxFeatures, Moth};
use rand::Rng;

/// Inclusive integer range of a numeric dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntBounds {
    pub lo: u32,
    pub hi: u32,
}

impl IntBounds {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lo..=self.hi) as f64
    }

    /// Saturates `value` at the nearest bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lo as f64, self.hi as f64)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lo as f64..=self.hi as f64).contains(&value)
    }
}

/// How `min_samples_split` is repaired after a move.
///
/// The default pins the dimension to its lower bound on every repair:
/// out-of-range and in-range values alike become `2`, so an accepted
/// candidate never moves this dimension again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitClamp {
    /// Always returns the lower bound.
    #[default]
    Collapse,
    /// Saturating clamp to `[lo, hi]`, like the other numeric dimensions.
    Bounded,
}

/// Valid region of the hyperparameter space.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_mfo::space::SearchDomain;
///
/// let domain = SearchDomain::default();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let moth = domain.sample(&mut rng);
/// assert!(domain.contains(&moth));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchDomain {
    pub max_depth: IntBounds,
    pub min_samples_split: IntBounds,
    pub min_samples_leaf: IntBounds,
    pub split_clamp: SplitClamp,
}

impl Default for SearchDomain {
    fn default() -> Self {
        Self {
            max_depth: IntBounds::new(1, 20),
            min_samples_split: IntBounds::new(2, 20),
            min_samples_leaf: IntBounds::new(1, 20),
            split_clamp: SplitClamp::default(),
        }
    }
}

impl SearchDomain {
    pub fn with_split_clamp(mut self, split_clamp: SplitClamp) -> Self {
        self.split_clamp = split_clamp;
        self
    }

    /// Draws a moth uniformly from the domain.
    ///
    /// Draw order is `max_depth`, `min_samples_split`, `min_samples_leaf`,
    /// `max_features`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Moth {
        let max_depth = self.max_depth.sample(rng);
        let min_samples_split = self.min_samples_split.sample(rng);
        let min_samples_leaf = self.min_samples_leaf.sample(rng);
        let max_features = MaxFeatures::ALL[rng.random_range(0..MaxFeatures::ALL.len())];
        Moth {
            max_depth,
            min_samples_split,
            min_samples_leaf,
            max_features,
        }
    }

    /// Repairs each numeric dimension independently. `max_features` is
    /// valid by construction and passes through.
    pub fn clamp(&self, moth: Moth) -> Moth {
        let min_samples_split = match self.split_clamp {
            SplitClamp::Collapse => self.min_samples_split.lo as f64,
            SplitClamp::Bounded => self.min_samples_split.clamp(moth.min_samples_split),
        };
        Moth {
            max_depth: self.max_depth.clamp(moth.max_depth),
            min_samples_split,
            min_samples_leaf: self.min_samples_leaf.clamp(moth.min_samples_leaf),
            max_features: moth.max_features,
        }
    }

    /// Whether every numeric dimension lies within its bounds.
    pub fn contains(&self, moth: &Moth) -> bool {
        self.max_depth.contains(moth.max_depth)
            && self.min_samples_split.contains(moth.min_samples_split)
            && self.min_samples_leaf.contains(moth.min_samples_leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn moth(d: f64, s: f64, l: f64) -> Moth {
        Moth {
            max_depth: d,
            min_samples_split: s,
            min_samples_leaf: l,
            max_features: MaxFeatures::Sqrt,
        }
    }

    #[test]
    fn test_sample_within_domain() {
        let domain = SearchDomain::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let m = domain.sample(&mut rng);
            assert!(domain.contains(&m), "sampled {m:?} outside domain");
            assert_eq!(m.max_depth.fract(), 0.0);
            assert_eq!(m.min_samples_split.fract(), 0.0);
            assert_eq!(m.min_samples_leaf.fract(), 0.0);
        }
    }

    #[test]
    fn test_sample_covers_all_categories() {
        let domain = SearchDomain::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let m = domain.sample(&mut rng);
            let idx = MaxFeatures::ALL
                .iter()
                .position(|&f| f == m.max_features)
                .unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_sample_reaches_bounds() {
        let domain = SearchDomain::default();
        let mut rng = StdRng::seed_from_u64(3);
        let depths: Vec<f64> = (0..2000).map(|_| domain.sample(&mut rng).max_depth).collect();
        assert!(depths.contains(&1.0));
        assert!(depths.contains(&20.0));
    }

    #[test]
    fn test_clamp_saturates() {
        let domain = SearchDomain::default().with_split_clamp(SplitClamp::Bounded);
        let c = domain.clamp(moth(-3.2, 25.0, 20.5));
        assert_eq!(c.numeric(), [1.0, 20.0, 20.0]);

        let c = domain.clamp(moth(4.7, 0.5, 0.0));
        assert_eq!(c.numeric(), [4.7, 2.0, 1.0]);
    }

    #[test]
    fn test_clamp_in_range_untouched() {
        let domain = SearchDomain::default().with_split_clamp(SplitClamp::Bounded);
        let m = moth(3.3, 11.1, 19.9);
        assert_eq!(domain.clamp(m), m);
    }

    #[test]
    fn test_collapse_pins_split() {
        let domain = SearchDomain::default();
        assert_eq!(domain.split_clamp, SplitClamp::Collapse);
        for s in [-5.0, 1.0, 2.0, 7.5, 20.0, 40.0] {
            assert_eq!(domain.clamp(moth(5.0, s, 5.0)).min_samples_split, 2.0);
        }
    }

    #[test]
    fn test_clamp_keeps_category() {
        let domain = SearchDomain::default();
        for f in MaxFeatures::ALL {
            let m = Moth {
                max_features: f,
                ..moth(50.0, 50.0, 50.0)
            };
            assert_eq!(domain.clamp(m).max_features, f);
        }
    }

    proptest! {
        #[test]
        fn prop_clamp_within_bounds(
            d in -1e6..1e6f64,
            s in -1e6..1e6f64,
            l in -1e6..1e6f64,
            bounded in any::<bool>(),
        ) {
            let policy = if bounded { SplitClamp::Bounded } else { SplitClamp::Collapse };
            let domain = SearchDomain::default().with_split_clamp(policy);
            let c = domain.clamp(moth(d, s, l));
            prop_assert!(domain.contains(&c));
        }

        #[test]
        fn prop_clamp_idempotent(d in -100.0..100.0f64, s in -100.0..100.0f64, l in -100.0..100.0f64) {
            let domain = SearchDomain::default().with_split_clamp(SplitClamp::Bounded);
            let once = domain.clamp(moth(d, s, l));
            prop_assert_eq!(domain.clamp(once), once);
        }
    }
}
