//! Observation types and the simulation RNG.

use rand_xoshiro::Xoshiro256PlusPlus;

/// Pseudo-random generator handed to null-model samplers.
///
/// Every simulation draw gets its own generator seeded from
/// [`counter_rng_seed`](crate::statistics::counter_rng_seed), so results are
/// reproducible for a fixed seed regardless of evaluation order.
pub type SimRng = Xoshiro256PlusPlus;

/// Outcome of a run of coin flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinFlips {
    /// Number of heads observed.
    pub heads: u64,
    /// Number of tails observed.
    pub tails: u64,
}

impl CoinFlips {
    /// Create a new coin-flip observation.
    pub fn new(heads: u64, tails: u64) -> Self {
        Self { heads, tails }
    }

    /// Total number of flips, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.heads.saturating_add(self.tails)
    }
}

/// Two independent samples, e.g. first babies vs. others.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TwoGroups {
    /// First group.
    pub a: Vec<f64>,
    /// Second group.
    pub b: Vec<f64>,
}

impl TwoGroups {
    /// Create a new two-group observation.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Self {
        Self { a, b }
    }

    /// Both groups concatenated, `a` first.
    pub fn pooled(&self) -> Vec<f64> {
        let mut pool = Vec::with_capacity(self.a.len() + self.b.len());
        pool.extend_from_slice(&self.a);
        pool.extend_from_slice(&self.b);
        pool
    }
}

/// Paired samples, e.g. birth weight vs. mother's age.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pairs {
    /// First coordinate of each pair.
    pub xs: Vec<f64>,
    /// Second coordinate of each pair.
    pub ys: Vec<f64>,
}

impl Pairs {
    /// Create a new paired observation.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` have different lengths.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        assert_eq!(xs.len(), ys.len(), "paired samples must have equal length");
        Self { xs, ys }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Observed frequency of each category, e.g. how often each die face came up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Counts(pub Vec<f64>);

impl Counts {
    /// Number of categories.
    pub fn categories(&self) -> usize {
        self.0.len()
    }

    /// Total number of trials.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<Vec<f64>> for Counts {
    fn from(counts: Vec<f64>) -> Self {
        Self(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pooled_keeps_group_order() {
        let groups = TwoGroups::new(vec![1.0, 2.0], vec![3.0]);
        assert_eq!(groups.pooled(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_coin_total() {
        assert_eq!(CoinFlips::new(140, 110).total(), 250);
        assert_eq!(CoinFlips::new(u64::MAX, 3).total(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "paired samples must have equal length")]
    fn test_pairs_length_mismatch_panics() {
        let _ = Pairs::new(vec![1.0, 2.0], vec![1.0]);
    }
}
