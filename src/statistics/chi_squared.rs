//! Chi-squared statistic and integer binning.

use core::ops::Range;

/// Pearson's chi-squared statistic: Σ (observed − expected)² / expected.
///
/// A zero expected count makes the sum infinite (or NaN if the observed
/// count is also zero). That is left to the caller.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn chi_squared(observed: &[f64], expected: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        expected.len(),
        "observed and expected counts must have equal length"
    );

    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| (o - e) * (o - e) / e)
        .sum()
}

/// Count how many values fall on each integer in `bins`.
///
/// Values are matched to the nearest integer; values outside the range are
/// ignored. The result has one entry per integer in `bins`, in order.
pub fn bin_counts(data: &[f64], bins: Range<i64>) -> Vec<f64> {
    let width = usize::try_from(bins.end - bins.start).unwrap_or(0);
    let mut counts = vec![0.0; width];

    for &x in data {
        let v = x.round();
        if v >= bins.start as f64 && v < bins.end as f64 {
            counts[(v as i64 - bins.start) as usize] += 1.0;
        }
    }

    counts
}
