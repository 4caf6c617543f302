//! Is the coin fair?

use rand_distr::{Binomial, Distribution};

use crate::hypothesis::TestDesign;
use crate::types::{CoinFlips, SimRng};

/// Two-sided test of a fair coin.
///
/// The statistic is |heads − tails|; the null model flips the same number
/// of fair coins.
#[derive(Debug, Clone, Default)]
pub struct CoinTest {
    flips: Option<Binomial>,
    total: u64,
}

impl TestDesign<CoinFlips> for CoinTest {
    fn make_model(&mut self, observation: &CoinFlips) {
        self.total = observation.total();
        self.flips = Binomial::new(self.total, 0.5).ok();
    }

    fn test_statistic(&self, observation: &CoinFlips) -> f64 {
        (observation.heads as f64 - observation.tails as f64).abs()
    }

    fn run_model(&self, rng: &mut SimRng) -> CoinFlips {
        let heads = self.flips.as_ref().map_or(0, |dist| dist.sample(rng));
        CoinFlips::new(heads, self.total - heads)
    }
}
