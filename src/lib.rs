//! # hypotest
//!
//! Monte Carlo hypothesis testing.
//!
//! Give the test an observation, a test statistic and a null model. It
//! computes the statistic on the observation once, draws synthetic
//! observations under the null hypothesis, and reports:
//! - the empirical one-sided p-value (fraction of draws at least as extreme)
//! - the largest simulated statistic, for comparison with the observed one
//! - the critical value at a chosen significance level
//!
//! ## Quick Start
//!
//! ```
//! use hypotest::{designs::DiffMeansPermute, Config, HypothesisTest, TwoGroups};
//!
//! let firsts = vec![38.6, 39.2, 40.1, 38.9, 39.5, 41.0, 38.2, 39.9];
//! let others = vec![38.4, 38.9, 39.0, 38.7, 39.1, 38.5, 38.8, 39.3];
//!
//! let mut test = HypothesisTest::new(TwoGroups::new(firsts, others), DiffMeansPermute::default());
//! let outcome = test.run(&Config::balanced().seed(17));
//!
//! assert!((0.0..=1.0).contains(&outcome.p_value));
//! println!("{}", hypotest::output::format_outcome(&outcome));
//! ```
//!
//! ## Custom tests
//!
//! Implement [`TestDesign`] for a reusable design, or wrap two closures in
//! [`FnDesign`]. The null model receives a seeded [`SimRng`] for every draw,
//! so a fixed seed reproduces the whole simulation.
//!
//! ## Estimator limits
//!
//! The p-value is an empirical fraction. With `n` iterations it cannot
//! resolve anything below `1 / n`; a reported 0 means "smaller than that",
//! not "impossible". Degenerate samples (empty groups, zero expected
//! counts) yield NaN or infinite statistics rather than errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod hypothesis;
mod result;
mod types;

// Functional modules
pub mod designs;
pub mod output;
pub mod power;
pub mod statistics;

pub use config::Config;
pub use error::ConfigError;
pub use hypothesis::{FnDesign, HypothesisTest, MaybeSync, TestDesign};
pub use power::{PowerAnalysis, PowerEstimate};
pub use result::TestOutcome;
pub use types::{CoinFlips, Counts, Pairs, SimRng, TwoGroups};
