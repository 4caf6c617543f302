//! The generic Monte Carlo hypothesis test.
//!
//! A test is a pair of callbacks over an observation type `O`:
//! - a **test statistic** mapping an observation to a real number, and
//! - a **null model** drawing synthetic observations under the null hypothesis.
//!
//! [`HypothesisTest`] computes the statistic on the real observation once,
//! then estimates the one-sided p-value as the fraction of simulated
//! statistics at least as large.
//!
//! ```
//! use hypotest::{CoinFlips, HypothesisTest, designs::CoinTest};
//!
//! let mut test = HypothesisTest::new(CoinFlips::new(140, 110), CoinTest::default()).seed(17);
//! let p = test.p_value(1000);
//! assert!((0.0..=1.0).contains(&p));
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::result::TestOutcome;
use crate::statistics::{compute_quantile, draw_rng};
use crate::types::SimRng;

/// Statistic and null model of a hypothesis test.
///
/// `make_model` runs once, before the observed statistic is computed, and
/// may capture whatever the null model needs from the observation (a pooled
/// sample, group sizes, expected frequencies). `run_model` must not mutate
/// the design: each draw gets its own seeded generator, and draws may run in
/// any order.
pub trait TestDesign<O> {
    /// Prepare the null model from the observed data.
    fn make_model(&mut self, _observation: &O) {}

    /// Compute the test statistic for an observation.
    fn test_statistic(&self, observation: &O) -> f64;

    /// Draw a synthetic observation under the null hypothesis.
    fn run_model(&self, rng: &mut SimRng) -> O;
}

/// `Sync` when draws are distributed across threads, empty otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` when draws are distributed across threads, empty otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// A [`TestDesign`] assembled from two closures.
///
/// The null model is whatever the sampler closure captures; there is no
/// separate setup step.
///
/// ```
/// use hypotest::{FnDesign, HypothesisTest, SimRng};
/// use rand::Rng;
///
/// // Is 9 sixes in 20 rolls unusual for a fair die?
/// let design = FnDesign::new(
///     |sixes: &u32| *sixes as f64,
///     |rng: &mut SimRng| (0..20).filter(|_| rng.random_range(0..6) == 5).count() as u32,
/// );
/// let mut test = HypothesisTest::new(9u32, design).seed(3);
/// assert!(test.p_value(1000) < 0.05);
/// ```
#[derive(Clone)]
pub struct FnDesign<S, M> {
    statistic: S,
    sampler: M,
}

impl<S, M> FnDesign<S, M> {
    /// Build a design from a statistic closure and a null-model sampler.
    pub fn new(statistic: S, sampler: M) -> Self {
        Self { statistic, sampler }
    }
}

impl<O, S, M> TestDesign<O> for FnDesign<S, M>
where
    S: Fn(&O) -> f64,
    M: Fn(&mut SimRng) -> O,
{
    fn test_statistic(&self, observation: &O) -> f64 {
        (self.statistic)(observation)
    }

    fn run_model(&self, rng: &mut SimRng) -> O {
        (self.sampler)(rng)
    }
}

impl<S, M> std::fmt::Debug for FnDesign<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDesign").finish_non_exhaustive()
    }
}

/// A Monte Carlo hypothesis test over one observation.
///
/// The observed statistic is computed exactly once, at construction, from
/// the unmodified observation. Each call to [`p_value`](Self::p_value)
/// replaces the stored simulated statistics.
#[derive(Debug, Clone)]
pub struct HypothesisTest<O, D> {
    observation: O,
    design: D,
    actual: f64,
    test_stats: Vec<f64>,
    seed: Option<u64>,
    last_seed: Option<u64>,
}

impl<O, D> HypothesisTest<O, D>
where
    D: TestDesign<O> + MaybeSync,
{
    /// Prepare the null model and compute the observed statistic.
    pub fn new(observation: O, mut design: D) -> Self {
        design.make_model(&observation);
        let actual = design.test_statistic(&observation);

        if !actual.is_finite() {
            tracing::warn!(
                actual,
                "observed test statistic is not finite; p-value will be undefined"
            );
        }

        Self {
            observation,
            design,
            actual,
            test_stats: Vec::new(),
            seed: None,
            last_seed: None,
        }
    }

    /// Fix the seed so repeated runs draw the same synthetic observations.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Estimate the p-value from `iterations` null-model draws.
    ///
    /// Returns the fraction of simulated statistics `>=` the observed one.
    /// If no draw reaches the observed statistic the estimate is exactly 0,
    /// which only means the true p-value is likely below `1 / iterations`.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is 0.
    pub fn p_value(&mut self, iterations: usize) -> f64 {
        assert!(iterations > 0, "iterations must be > 0");

        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::debug!(iterations, seed, actual = self.actual, "simulating null model");

        self.test_stats = simulate(&self.design, seed, iterations);
        self.last_seed = Some(seed);

        let count = self.test_stats.iter().filter(|&&x| x >= self.actual).count();
        let p_value = count as f64 / iterations as f64;

        tracing::trace!(count, p_value, "simulation finished");
        p_value
    }

    /// Run the test with the given configuration and summarize the result.
    ///
    /// A seed in `config` takes precedence over one set with [`seed`](Self::seed).
    ///
    /// A NaN maximum or critical value (every draw NaN) is reported as `None`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`Config::validate`].
    pub fn run(&mut self, config: &Config) -> TestOutcome {
        if let Err(err) = config.validate() {
            panic!("invalid config: {}", err);
        }
        if let Some(seed) = config.seed {
            self.seed = Some(seed);
        }
        let p_value = self.p_value(config.iterations);

        TestOutcome {
            p_value,
            actual: self.actual,
            max_test_stat: self.max_test_stat().filter(|x| !x.is_nan()),
            critical_value: self.critical_value(config.alpha).filter(|x| !x.is_nan()),
            iterations: config.iterations,
            seed: self.last_seed.unwrap_or_default(),
            alpha: config.alpha,
        }
    }
}

impl<O, D> HypothesisTest<O, D> {
    /// Observed test statistic.
    pub fn actual(&self) -> f64 {
        self.actual
    }

    /// Simulated statistics from the most recent run, in draw order.
    pub fn test_stats(&self) -> &[f64] {
        &self.test_stats
    }

    /// Largest simulated statistic, or `None` before the first run.
    ///
    /// Compare against [`actual`](Self::actual): if the observed statistic
    /// exceeds every draw, the p-value estimate is 0.
    pub fn max_test_stat(&self) -> Option<f64> {
        self.test_stats.iter().copied().reduce(f64::max)
    }

    /// Observed statistic needed to reject at level `alpha`.
    ///
    /// The `1 - alpha` quantile of the simulated null distribution, or
    /// `None` before the first run.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside [0, 1].
    pub fn critical_value(&self, alpha: f64) -> Option<f64> {
        if self.test_stats.is_empty() {
            return None;
        }
        let mut buffer = self.test_stats.clone();
        Some(compute_quantile(&mut buffer, 1.0 - alpha))
    }

    /// Seed used by the most recent run.
    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }

    /// The observation under test.
    pub fn observation(&self) -> &O {
        &self.observation
    }

    /// The test design, with its prepared null model.
    pub fn design(&self) -> &D {
        &self.design
    }
}

fn draw<O, D: TestDesign<O>>(design: &D, seed: u64, i: usize) -> f64 {
    let mut rng = draw_rng(seed, i as u64);
    let synthetic = design.run_model(&mut rng);
    design.test_statistic(&synthetic)
}

#[cfg(feature = "parallel")]
fn simulate<O, D>(design: &D, seed: u64, iterations: usize) -> Vec<f64>
where
    D: TestDesign<O> + MaybeSync,
{
    (0..iterations)
        .into_par_iter()
        .map(|i| draw(design, seed, i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn simulate<O, D>(design: &D, seed: u64, iterations: usize) -> Vec<f64>
where
    D: TestDesign<O> + MaybeSync,
{
    (0..iterations).map(|i| draw(design, seed, i)).collect()
}
