//! Goodness-of-fit tests for a fair die.
//!
//! The observation is the frequency of each face. Under the null every face
//! is equally likely, so each expected count is `total / faces`.

use rand::Rng;

use crate::hypothesis::TestDesign;
use crate::statistics::chi_squared;
use crate::types::{Counts, SimRng};

/// Fair rolls of a die with as many faces as the observation has categories.
#[derive(Debug, Clone, Default)]
struct FairRolls {
    faces: usize,
    rolls: usize,
}

impl FairRolls {
    fn prepare(&mut self, observation: &Counts) {
        self.faces = observation.categories();
        self.rolls = observation.total().round().max(0.0) as usize;
    }

    fn draw(&self, rng: &mut SimRng) -> Counts {
        let mut counts = vec![0.0; self.faces];
        if self.faces == 0 {
            return Counts(counts);
        }
        for _ in 0..self.rolls {
            counts[rng.random_range(0..self.faces)] += 1.0;
        }
        Counts(counts)
    }
}

fn expected_counts(observation: &Counts) -> Vec<f64> {
    let faces = observation.categories();
    vec![observation.total() / faces as f64; faces]
}

/// Total absolute deviation from the expected counts.
#[derive(Debug, Clone, Default)]
pub struct DiceTest {
    model: FairRolls,
}

impl TestDesign<Counts> for DiceTest {
    fn make_model(&mut self, observation: &Counts) {
        self.model.prepare(observation);
    }

    fn test_statistic(&self, observation: &Counts) -> f64 {
        observation
            .0
            .iter()
            .zip(expected_counts(observation))
            .map(|(&o, e)| (o - e).abs())
            .sum()
    }

    fn run_model(&self, rng: &mut SimRng) -> Counts {
        self.model.draw(rng)
    }
}

/// Chi-squared deviation from the expected counts.
///
/// Weighs each deviation by the expected count, which makes it more
/// sensitive than [`DiceTest`] to one face coming up far too often.
#[derive(Debug, Clone, Default)]
pub struct DiceChiTest {
    model: FairRolls,
}

impl TestDesign<Counts> for DiceChiTest {
    fn make_model(&mut self, observation: &Counts) {
        self.model.prepare(observation);
    }

    fn test_statistic(&self, observation: &Counts) -> f64 {
        chi_squared(&observation.0, &expected_counts(observation))
    }

    fn run_model(&self, rng: &mut SimRng) -> Counts {
        self.model.draw(rng)
    }
}
