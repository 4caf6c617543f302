//! Configuration for Monte Carlo hypothesis tests.

use crate::error::ConfigError;

/// Configuration options for [`HypothesisTest::run`](crate::HypothesisTest::run).
///
/// Controls how many null-model draws are simulated, whether the draws are
/// seeded, and the significance level used for the verdict in
/// [`TestOutcome`](crate::TestOutcome).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of synthetic observations drawn from the null model.
    ///
    /// The smallest non-zero p-value the estimator can report is
    /// `1 / iterations`. Default: 1,000.
    pub iterations: usize,

    /// Seed for reproducible simulations.
    ///
    /// When `None`, a fresh seed is drawn for every run and logged at debug
    /// level so a surprising result can be replayed. Default: None.
    pub seed: Option<u64>,

    /// Significance level for the reject/retain verdict.
    ///
    /// Default: 0.05.
    pub alpha: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 1_000,
            seed: None,
            alpha: 0.05,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quick configuration for exploratory runs (100 draws).
    pub fn quick() -> Self {
        Self {
            iterations: 100,
            ..Default::default()
        }
    }

    /// Create a balanced configuration (1,000 draws).
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a thorough configuration (10,000 draws).
    ///
    /// Resolves p-values down to 0.0001.
    pub fn thorough() -> Self {
        Self {
            iterations: 10_000,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of null-model draws.
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "iterations must be > 0");
        self.iterations = iterations;
        self
    }

    /// Fix the seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "alpha must be in (0, 1)");
        self.alpha = alpha;
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.iterations, 1_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.alpha, 0.05);
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(Config::quick().iterations, 100);
        assert_eq!(Config::balanced().iterations, 1_000);
        assert_eq!(Config::thorough().iterations, 10_000);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::new().iterations(500).seed(7).alpha(0.01);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.alpha, 0.01);
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().validate().is_ok());

        let mut invalid = Config::default();
        invalid.iterations = 0;
        assert_eq!(invalid.validate(), Err(ConfigError::ZeroIterations));

        let mut invalid = Config::default();
        invalid.alpha = 1.0;
        assert_eq!(invalid.validate(), Err(ConfigError::AlphaOutOfRange(1.0)));

        let mut invalid = Config::default();
        invalid.alpha = f64::NAN;
        assert!(invalid.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "iterations must be > 0")]
    fn test_zero_iterations_panics() {
        Config::new().iterations(0);
    }

    #[test]
    #[should_panic(expected = "alpha must be in (0, 1)")]
    fn test_invalid_alpha_panics() {
        Config::new().alpha(1.5);
    }
}
