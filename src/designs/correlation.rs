//! Permutation test of correlation.

use rand::seq::SliceRandom;

use crate::hypothesis::TestDesign;
use crate::statistics::correlation;
use crate::types::{Pairs, SimRng};

/// Two-sided permutation test of Pearson correlation.
///
/// Shuffling `xs` against fixed `ys` breaks any association while keeping
/// both marginal distributions.
#[derive(Debug, Clone, Default)]
pub struct CorrelationPermute {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TestDesign<Pairs> for CorrelationPermute {
    fn make_model(&mut self, observation: &Pairs) {
        self.xs = observation.xs.clone();
        self.ys = observation.ys.clone();
    }

    fn test_statistic(&self, observation: &Pairs) -> f64 {
        correlation(&observation.xs, &observation.ys).abs()
    }

    fn run_model(&self, rng: &mut SimRng) -> Pairs {
        let mut xs = self.xs.clone();
        xs.shuffle(rng);
        Pairs {
            xs,
            ys: self.ys.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::draw_rng;

    #[test]
    fn test_statistic_is_absolute() {
        let design = CorrelationPermute::default();
        let pairs = Pairs::new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]);
        assert!((design.test_statistic(&pairs) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_run_model_keeps_ys() {
        let pairs = Pairs::new((0..10).map(f64::from).collect(), vec![1.0; 10]);
        let mut design = CorrelationPermute::default();
        design.make_model(&pairs);

        let draw = design.run_model(&mut draw_rng(5, 0));
        assert_eq!(draw.ys, pairs.ys);
        let mut xs = draw.xs.clone();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(xs, pairs.xs);
    }
}
