//! MFO configuration.
//!
//! [`MfoConfig`] holds every parameter of a tuning run.

use crate::error::ConfigError;
use crate::space::SplitClamp;

/// Configuration for the moth-flame search.
///
/// # Defaults
///
/// ```
/// use u_mfo::mfo::MfoConfig;
///
/// let config = MfoConfig::default();
/// assert_eq!(config.n_iterations, 100);
/// assert_eq!(config.n_population, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mfo::mfo::MfoConfig;
/// use u_mfo::space::SplitClamp;
///
/// let config = MfoConfig::default()
///     .with_iterations(50)
///     .with_population(10)
///     .with_alpha(0.2)
///     .with_split_clamp(SplitClamp::Bounded)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MfoConfig {
    /// Number of generations. Zero reports the best initial moth.
    pub n_iterations: usize,

    /// Number of moths. Constant for the whole run.
    pub n_population: usize,

    /// Distance-to-intensity coefficient: `I = 1 / (1 + alpha * d)`.
    pub alpha: f64,

    /// Step scaling applied to every move.
    pub beta: f64,

    /// Scale of the half-normal step magnitude. `1.0` draws `|N(0, 1)|`.
    pub gamma: f64,

    /// Repair rule for `min_samples_split`.
    pub split_clamp: SplitClamp,

    /// Evaluate each generation in parallel against a flame snapshot.
    ///
    /// Requires the `parallel` feature. This changes the search trajectory:
    /// moths no longer see flame updates made earlier in the same
    /// generation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for MfoConfig {
    fn default() -> Self {
        Self {
            n_iterations: 100,
            n_population: 20,
            alpha: 0.5,
            beta: 0.5,
            gamma: 1.0,
            split_clamp: SplitClamp::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl MfoConfig {
    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population(mut self, n: usize) -> Self {
        self.n_population = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_split_clamp(mut self, split_clamp: SplitClamp) -> Self {
        self.split_clamp = split_clamp;
        self
    }

    /// Enables or disables snapshot-parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if !self.beta.is_finite() {
            return Err(ConfigError::InvalidBeta(self.beta));
        }
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MfoConfig::default();
        assert_eq!(config.n_iterations, 100);
        assert_eq!(config.n_population, 20);
        assert!((config.alpha - 0.5).abs() < 1e-15);
        assert!((config.beta - 0.5).abs() < 1e-15);
        assert!((config.gamma - 1.0).abs() < 1e-15);
        assert_eq!(config.split_clamp, SplitClamp::Collapse);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MfoConfig::default()
            .with_iterations(7)
            .with_population(3)
            .with_alpha(0.1)
            .with_beta(2.0)
            .with_gamma(0.5)
            .with_split_clamp(SplitClamp::Bounded)
            .with_parallel(true)
            .with_seed(9);

        assert_eq!(config.n_iterations, 7);
        assert_eq!(config.n_population, 3);
        assert!((config.alpha - 0.1).abs() < 1e-15);
        assert!((config.beta - 2.0).abs() < 1e-15);
        assert!((config.gamma - 0.5).abs() < 1e-15);
        assert_eq!(config.split_clamp, SplitClamp::Bounded);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_ok() {
        assert!(MfoConfig::default().validate().is_ok());
        assert!(MfoConfig::default().with_iterations(0).validate().is_ok());
        assert!(MfoConfig::default().with_alpha(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = MfoConfig::default().with_population(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(MfoConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(MfoConfig::default().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = MfoConfig::default().with_beta(f64::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBeta(_))));
    }

    #[test]
    fn test_validate_bad_gamma() {
        let config = MfoConfig::default().with_gamma(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGamma(-1.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MfoConfig =
            serde_json::from_str(r#"{"n_iterations": 5, "split_clamp": "bounded"}"#).unwrap();
        assert_eq!(config.n_iterations, 5);
        assert_eq!(config.n_population, 20);
        assert_eq!(config.split_clamp, SplitClamp::Bounded);
    }
}
