//! Quantiles of simulated null distributions using Type 2 quantiles.
//!
//! Type 2 (Hyndman & Fan 1996) inverts the empirical CDF and averages at
//! discontinuities:
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//!
//! Used to read critical values off the distribution of simulated test
//! statistics.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical packages."
//! The American Statistician 50(4):361–365.

/// Compute a single quantile from a mutable slice using Type 2 quantiles.
///
/// Uses `select_nth_unstable_by()` for O(n) expected time. The slice is
/// partially reordered as a side effect. NaN values sort last under
/// `total_cmp`, so they only surface at the top of the range.
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let h = n as f64 * p + 0.5;

    // 1-based formula indices, clamped into the slice
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    if floor_idx == ceil_idx {
        let (_, &mut val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));
        return val;
    }

    // Select the larger index first; everything before it is then <= it,
    // so the second selection stays within the lower partition.
    let (_, &mut ceil_val, _) = data.select_nth_unstable_by(ceil_idx, |a, b| a.total_cmp(b));
    let (_, &mut floor_val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));

    (floor_val + ceil_val) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_quantile_median() {
        // h = 5 * 0.5 + 0.5 = 3.0, both indices land on x[2]
        let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let median = compute_quantile(&mut data, 0.5);
        assert!((median - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_compute_quantile_extremes() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let min = compute_quantile(&mut data.clone(), 0.0);
        let max = compute_quantile(&mut data.clone(), 1.0);
        assert!((min - 1.0).abs() < 1e-10, "min was {}", min);
        assert!((max - 5.0).abs() < 1e-10, "max was {}", max);
    }

    #[test]
    fn test_compute_quantile_averages_at_discontinuity() {
        // n = 4, p = 0.5: h = 2.5 -> average of x[1] and x[2]
        let mut data = vec![4.0, 1.0, 3.0, 2.0];
        let median = compute_quantile(&mut data, 0.5);
        assert!((median - 2.5).abs() < 1e-10, "median was {}", median);
    }

    #[test]
    fn test_selection_matches_full_sort() {
        let data: Vec<f64> = (0..1000).map(|x| (x as f64 * 7.31) % 113.0).collect();
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let n = sorted.len();

        for &p in &[0.01, 0.05, 0.25, 0.5, 0.9, 0.95, 0.99] {
            let h = n as f64 * p + 0.5;
            let lo = (h.floor() as usize).saturating_sub(1).min(n - 1);
            let hi = (h.ceil() as usize).saturating_sub(1).min(n - 1);
            let expected = (sorted[lo] + sorted[hi]) / 2.0;

            let selected = compute_quantile(&mut data.clone(), p);
            assert!(
                (selected - expected).abs() < 1e-10,
                "p={}: select={}, sorted={}",
                p,
                selected,
                expected
            );
        }
    }

    #[test]
    #[should_panic(expected = "Cannot compute quantile of empty slice")]
    fn test_empty_slice_panics() {
        let mut data: Vec<f64> = vec![];
        compute_quantile(&mut data, 0.5);
    }

    #[test]
    #[should_panic(expected = "Quantile probability must be in [0, 1]")]
    fn test_probability_out_of_range_panics() {
        compute_quantile(&mut [1.0, 2.0], 1.5);
    }
}
