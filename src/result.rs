//! Result types for hypothesis tests.

use serde::{Deserialize, Deserializer, Serialize};

/// Summary of one Monte Carlo hypothesis test run.
///
/// Non-finite statistics serialize as JSON `null`. A `null` observed
/// statistic reads back as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Fraction of simulated statistics at least as large as the observed one.
    pub p_value: f64,

    /// Observed test statistic.
    #[serde(deserialize_with = "nan_if_null")]
    pub actual: f64,

    /// Largest simulated statistic; `None` if every draw was NaN.
    pub max_test_stat: Option<f64>,

    /// `1 - alpha` quantile of the simulated null distribution.
    pub critical_value: Option<f64>,

    /// Number of null-model draws.
    pub iterations: usize,

    /// Seed that reproduces this run.
    pub seed: u64,

    /// Significance level used for the verdict.
    pub alpha: f64,
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl TestOutcome {
    /// Whether the null hypothesis is rejected at level `alpha`.
    ///
    /// A NaN p-value never counts as significant.
    pub fn is_significant(&self) -> bool {
        self.p_value < self.alpha
    }

    /// Whether no simulated statistic reached the observed one.
    ///
    /// The true p-value is then likely below `1 / iterations`; rerun with
    /// more iterations for a finer estimate.
    pub fn is_below_resolution(&self) -> bool {
        self.p_value == 0.0
    }

    /// Smallest non-zero p-value this run could have reported.
    pub fn resolution(&self) -> f64 {
        1.0 / self.iterations as f64
    }
}
