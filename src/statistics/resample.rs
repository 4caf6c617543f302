//! Permutation and resampling primitives for null models.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::SimRng;

/// Derive a well-mixed seed for draw `counter` of a stream seeded by `seed`.
///
/// SplitMix64 finalizer over `seed` combined with a Weyl-sequence step of
/// `counter`. Seeding each draw independently keeps results identical
/// whether draws run sequentially or in parallel.
pub fn counter_rng_seed(seed: u64, counter: u64) -> u64 {
    let mut z = seed ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generator for draw `counter` of the stream seeded by `seed`.
pub fn draw_rng(seed: u64, counter: u64) -> SimRng {
    SimRng::seed_from_u64(counter_rng_seed(seed, counter))
}

/// Shuffle `pool` and split it into groups of sizes `n` and `pool.len() - n`.
///
/// # Panics
///
/// Panics if `n > pool.len()`.
pub fn permute_split<R: Rng + ?Sized>(pool: &[f64], n: usize, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    assert!(n <= pool.len(), "split point exceeds pool size");

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    let rest = shuffled.split_off(n);
    (shuffled, rest)
}

/// Draw `n` values from `data` uniformly with replacement.
///
/// Returns an empty vector if `data` is empty.
pub fn resample<R: Rng + ?Sized>(data: &[f64], n: usize, rng: &mut R) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }
    (0..n).map(|_| data[rng.random_range(0..data.len())]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: u64 = 12345;

    #[test]
    fn test_counter_seeds_differ() {
        let a = counter_rng_seed(TEST_SEED, 0);
        let b = counter_rng_seed(TEST_SEED, 1);
        let c = counter_rng_seed(TEST_SEED + 1, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, counter_rng_seed(TEST_SEED, 0));
    }

    #[test]
    fn test_permute_split_preserves_values() {
        let pool: Vec<f64> = (0..20).map(|x| x as f64).collect();
        let mut rng = draw_rng(TEST_SEED, 0);
        let (a, b) = permute_split(&pool, 7, &mut rng);
        assert_eq!(a.len(), 7);
        assert_eq!(b.len(), 13);

        let mut all: Vec<f64> = a.into_iter().chain(b).collect();
        all.sort_by(|x, y| x.total_cmp(y));
        assert_eq!(all, pool);
    }

    #[test]
    fn test_permute_split_is_seeded() {
        let pool: Vec<f64> = (0..50).map(|x| x as f64).collect();
        let first = permute_split(&pool, 25, &mut draw_rng(TEST_SEED, 3));
        let second = permute_split(&pool, 25, &mut draw_rng(TEST_SEED, 3));
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "split point exceeds pool size")]
    fn test_permute_split_too_large_panics() {
        permute_split(&[1.0, 2.0], 3, &mut draw_rng(TEST_SEED, 0));
    }

    #[test]
    fn test_resample_draws_from_data() {
        let data = [1.0, 5.0, 9.0];
        let mut rng = draw_rng(TEST_SEED, 0);
        let sample = resample(&data, 100, &mut rng);
        assert_eq!(sample.len(), 100);
        assert!(sample.iter().all(|x| data.contains(x)));
    }

    #[test]
    fn test_resample_empty() {
        let mut rng = draw_rng(TEST_SEED, 0);
        assert!(resample(&[], 10, &mut rng).is_empty());
    }
}
