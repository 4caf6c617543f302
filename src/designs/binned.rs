//! Chi-squared permutation test over integer-valued bins.

use core::ops::Range;

use crate::hypothesis::TestDesign;
use crate::statistics::{bin_counts, chi_squared};
use crate::types::{SimRng, TwoGroups};

use super::GroupPermutation;

/// Do two groups share one distribution over a range of integer values?
///
/// The expected frequency of each bin comes from the pooled sample: if the
/// pooled data puts 12% of its mass on value 39, each group is expected to
/// put 12% of its own size there. The statistic sums the chi-squared of both
/// groups against those expectations. Values outside `bins` still count
/// toward group sizes but contribute no term. A bin the pooled sample never
/// hits has zero expected count and makes the statistic NaN, so `bins`
/// should only span values that occur.
///
/// ```
/// use hypotest::{designs::BinnedChiSquaredPermute, HypothesisTest, TwoGroups};
///
/// let firsts = vec![39.0, 39.0, 40.0, 41.0, 38.0, 39.0, 42.0, 39.0];
/// let others = vec![39.0, 40.0, 39.0, 39.0, 38.0, 39.0, 40.0, 37.0];
/// let design = BinnedChiSquaredPermute::new(37..43);
/// let mut test = HypothesisTest::new(TwoGroups::new(firsts, others), design).seed(1);
/// let p = test.p_value(200);
/// assert!(test.actual().is_finite());
/// assert!((0.0..=1.0).contains(&p));
/// ```
#[derive(Debug, Clone)]
pub struct BinnedChiSquaredPermute {
    bins: Range<i64>,
    expected_probs: Vec<f64>,
    model: GroupPermutation,
}

impl BinnedChiSquaredPermute {
    /// Test over the integer values in `bins`.
    pub fn new(bins: Range<i64>) -> Self {
        Self {
            bins,
            expected_probs: Vec::new(),
            model: GroupPermutation::default(),
        }
    }

    /// Probability of each bin under the pooled distribution.
    pub fn expected_probs(&self) -> &[f64] {
        &self.expected_probs
    }

    fn group_chi_squared(&self, group: &[f64]) -> f64 {
        let observed = bin_counts(group, self.bins.clone());
        let n = group.len() as f64;
        let expected: Vec<f64> = self.expected_probs.iter().map(|p| p * n).collect();
        chi_squared(&observed, &expected)
    }
}

impl TestDesign<TwoGroups> for BinnedChiSquaredPermute {
    fn make_model(&mut self, observation: &TwoGroups) {
        self.model.prepare(observation);

        let pool = observation.pooled();
        let total = pool.len() as f64;
        self.expected_probs = bin_counts(&pool, self.bins.clone())
            .into_iter()
            .map(|count| count / total)
            .collect();
    }

    fn test_statistic(&self, observation: &TwoGroups) -> f64 {
        self.group_chi_squared(&observation.a) + self.group_chi_squared(&observation.b)
    }

    fn run_model(&self, rng: &mut SimRng) -> TwoGroups {
        self.model.draw(rng)
    }
}
