//! Statistical helpers for test statistics and null models.
//!
//! - Sample moments and Pearson correlation
//! - Chi-squared statistic and integer binning
//! - Type 2 quantiles for critical values
//! - Permutation, resampling and counter-based RNG seeding

mod chi_squared;
mod moments;
mod quantile;
mod resample;

pub use chi_squared::{bin_counts, chi_squared};
pub use moments::{correlation, mean, std_dev, variance};
pub use quantile::compute_quantile;
pub use resample::{counter_rng_seed, draw_rng, permute_split, resample};
