//! Stock test designs.
//!
//! Each design pairs a test statistic with a null model:
//!
//! | Design | Statistic | Null model |
//! |---|---|---|
//! | [`CoinTest`] | \|heads − tails\| | fair coin flips |
//! | [`DiffMeansPermute`] | \|mean(a) − mean(b)\| | permutation |
//! | [`DiffMeansOneSided`] | mean(a) − mean(b) | permutation |
//! | [`DiffStdPermute`] | std(a) − std(b) | permutation |
//! | [`DiffMeansResample`] | \|mean(a) − mean(b)\| | resampling from the pool |
//! | [`CorrelationPermute`] | \|corr(xs, ys)\| | shuffled xs |
//! | [`DiceTest`] | Σ\|observed − expected\| | fair rolls |
//! | [`DiceChiTest`] | χ² | fair rolls |
//! | [`BinnedChiSquaredPermute`] | χ²(a) + χ²(b) over integer bins | permutation |

mod binned;
mod coin;
mod correlation;
mod dice;
mod means;

pub use binned::BinnedChiSquaredPermute;
pub use coin::CoinTest;
pub use correlation::CorrelationPermute;
pub use dice::{DiceChiTest, DiceTest};
pub use means::{DiffMeansOneSided, DiffMeansPermute, DiffMeansResample, DiffStdPermute};

use crate::statistics::permute_split;
use crate::types::{SimRng, TwoGroups};

/// Null model shared by the two-group permutation tests: shuffle the pooled
/// sample and deal it back into groups of the original sizes.
#[derive(Debug, Clone, Default)]
struct GroupPermutation {
    pool: Vec<f64>,
    n: usize,
}

impl GroupPermutation {
    fn prepare(&mut self, groups: &TwoGroups) {
        self.pool = groups.pooled();
        self.n = groups.a.len();
    }

    fn draw(&self, rng: &mut SimRng) -> TwoGroups {
        let (a, b) = permute_split(&self.pool, self.n, rng);
        TwoGroups { a, b }
    }
}
