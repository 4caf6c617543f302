//! Two-group tests on means and spreads.

use crate::hypothesis::TestDesign;
use crate::statistics::{mean, resample, std_dev};
use crate::types::{SimRng, TwoGroups};

use super::GroupPermutation;

/// Two-sided permutation test of a difference in means.
#[derive(Debug, Clone, Default)]
pub struct DiffMeansPermute {
    model: GroupPermutation,
}

impl TestDesign<TwoGroups> for DiffMeansPermute {
    fn make_model(&mut self, observation: &TwoGroups) {
        self.model.prepare(observation);
    }

    fn test_statistic(&self, observation: &TwoGroups) -> f64 {
        (mean(&observation.a) - mean(&observation.b)).abs()
    }

    fn run_model(&self, rng: &mut SimRng) -> TwoGroups {
        self.model.draw(rng)
    }
}

/// One-sided permutation test that group `a` has the larger mean.
#[derive(Debug, Clone, Default)]
pub struct DiffMeansOneSided {
    model: GroupPermutation,
}

impl TestDesign<TwoGroups> for DiffMeansOneSided {
    fn make_model(&mut self, observation: &TwoGroups) {
        self.model.prepare(observation);
    }

    fn test_statistic(&self, observation: &TwoGroups) -> f64 {
        mean(&observation.a) - mean(&observation.b)
    }

    fn run_model(&self, rng: &mut SimRng) -> TwoGroups {
        self.model.draw(rng)
    }
}

/// One-sided permutation test that group `a` has the larger standard deviation.
#[derive(Debug, Clone, Default)]
pub struct DiffStdPermute {
    model: GroupPermutation,
}

impl TestDesign<TwoGroups> for DiffStdPermute {
    fn make_model(&mut self, observation: &TwoGroups) {
        self.model.prepare(observation);
    }

    fn test_statistic(&self, observation: &TwoGroups) -> f64 {
        std_dev(&observation.a) - std_dev(&observation.b)
    }

    fn run_model(&self, rng: &mut SimRng) -> TwoGroups {
        self.model.draw(rng)
    }
}

/// Two-sided test of a difference in means, with both synthetic groups
/// drawn with replacement from the pooled sample.
#[derive(Debug, Clone, Default)]
pub struct DiffMeansResample {
    pool: Vec<f64>,
    n: usize,
    m: usize,
}

impl TestDesign<TwoGroups> for DiffMeansResample {
    fn make_model(&mut self, observation: &TwoGroups) {
        self.pool = observation.pooled();
        self.n = observation.a.len();
        self.m = observation.b.len();
    }

    fn test_statistic(&self, observation: &TwoGroups) -> f64 {
        (mean(&observation.a) - mean(&observation.b)).abs()
    }

    fn run_model(&self, rng: &mut SimRng) -> TwoGroups {
        TwoGroups {
            a: resample(&self.pool, self.n, rng),
            b: resample(&self.pool, self.m, rng),
        }
    }
}
