//! Power analysis by resampling.
//!
//! If the observed effect were real, how often would a test miss it? Treat
//! the observed data as the population, draw new datasets from it with
//! replacement, run the test on each, and count the runs where the p-value
//! stays above the significance level. That fraction is the false negative
//! rate; power is its complement.

use serde::{Deserialize, Serialize};

use crate::designs::DiffMeansPermute;
use crate::error::ConfigError;
use crate::hypothesis::{HypothesisTest, MaybeSync, TestDesign};
use crate::statistics::{counter_rng_seed, draw_rng, resample};
use crate::types::{SimRng, TwoGroups};

/// Settings for a resampling power analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerAnalysis {
    /// Number of resampled datasets to test. Default: 100.
    pub runs: usize,

    /// Null-model draws per test. Default: 100.
    pub iterations: usize,

    /// Significance level; a p-value above it is a false negative.
    /// Default: 0.05.
    pub alpha: f64,

    /// Seed for reproducible analyses. Default: None.
    pub seed: Option<u64>,
}

impl Default for PowerAnalysis {
    fn default() -> Self {
        Self {
            runs: 100,
            iterations: 100,
            alpha: 0.05,
            seed: None,
        }
    }
}

/// Result of a power analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerEstimate {
    /// Number of resampled datasets tested.
    pub runs: usize,

    /// Runs whose p-value exceeded alpha.
    pub false_negatives: usize,

    /// `false_negatives / runs`.
    pub false_negative_rate: f64,

    /// `1 - false_negative_rate`.
    pub power: f64,

    /// Seed that reproduces this analysis.
    pub seed: u64,
}

impl PowerAnalysis {
    /// Create an analysis with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of resampled datasets.
    pub fn runs(mut self, runs: usize) -> Self {
        assert!(runs > 0, "runs must be > 0");
        self.runs = runs;
        self
    }

    /// Set the number of null-model draws per test.
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "iterations must be > 0");
        self.iterations = iterations;
        self
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "alpha must be in (0, 1)");
        self.alpha = alpha;
        self
    }

    /// Fix the seed for reproducible analyses.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check if the settings are valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        Ok(())
    }

    /// Estimate the power of a test design.
    ///
    /// `draw_sample` draws a new dataset from `observation`; `make_design`
    /// builds a fresh design for each run.
    ///
    /// # Panics
    ///
    /// Panics if `runs` or `iterations` is 0.
    pub fn estimate<O, D, RS, MD>(
        &self,
        observation: &O,
        draw_sample: RS,
        make_design: MD,
    ) -> PowerEstimate
    where
        D: TestDesign<O> + MaybeSync,
        RS: Fn(&O, &mut SimRng) -> O,
        MD: Fn() -> D,
    {
        assert!(self.runs > 0, "runs must be > 0");

        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::debug!(
            runs = self.runs,
            iterations = self.iterations,
            alpha = self.alpha,
            seed,
            "estimating power"
        );

        let mut false_negatives = 0;
        for run in 0..self.runs as u64 {
            // Even counters drive resampling, odd counters seed the test
            let mut rng = draw_rng(seed, 2 * run);
            let sample = draw_sample(observation, &mut rng);

            let mut test = HypothesisTest::new(sample, make_design())
                .seed(counter_rng_seed(seed, 2 * run + 1));
            let p_value = test.p_value(self.iterations);

            if p_value > self.alpha {
                false_negatives += 1;
            }
            tracing::trace!(run, p_value, "power run finished");
        }

        let false_negative_rate = false_negatives as f64 / self.runs as f64;
        PowerEstimate {
            runs: self.runs,
            false_negatives,
            false_negative_rate,
            power: 1.0 - false_negative_rate,
            seed,
        }
    }
}

/// Resample each group independently, with replacement, at its own size.
pub fn resample_groups(groups: &TwoGroups, rng: &mut SimRng) -> TwoGroups {
    TwoGroups {
        a: resample(&groups.a, groups.a.len(), rng),
        b: resample(&groups.b, groups.b.len(), rng),
    }
}

/// Power of the two-sided difference-in-means permutation test.
pub fn two_group_power(groups: &TwoGroups, analysis: &PowerAnalysis) -> PowerEstimate {
    analysis.estimate(groups, resample_groups, DiffMeansPermute::default)
}
