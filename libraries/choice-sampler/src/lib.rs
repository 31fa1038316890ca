//! Random selection primitives for building multiple-choice batches.
//!
//! Everything here takes the RNG as an argument instead of reaching for a
//! thread-local one, so callers that need reproducible batches (tests, the
//! spot-check CLI) can pass a seeded generator.
//!
//! # Example
//!
//! ```
//! use choice_sampler::{sample, seeded};
//!
//! let mut rng = seeded(7);
//! let picked = sample(&mut rng, &["a", "b", "c", "d"], 2);
//! assert_eq!(picked.len(), 2);
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Return a uniformly random permutation of `items`.
///
/// Fisher–Yates over a fresh copy; the input slice is never mutated. Total
/// over any finite slice, including the empty one.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.gen_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

/// Select up to `count` distinct elements of `items`, in random order.
///
/// If `count >= items.len()` this is a full shuffle; it never errors on an
/// oversized request. Each element appears at most once in the result.
pub fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    let mut shuffled = shuffle(rng, items);
    shuffled.truncate(count);
    shuffled
}

/// Select one element uniformly at random, or `None` from an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = rng.gen_range(0..items.len());
    Some(&items[i])
}

/// A deterministic RNG for reproducible sampling.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let items: Vec<u32> = (0..100).collect();
        let mut rng = seeded(1);

        let shuffled = shuffle(&mut rng, &items);

        assert_eq!(shuffled.len(), items.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let items = vec!["a", "b", "c"];
        let before = items.clone();
        let mut rng = seeded(2);

        let _ = shuffle(&mut rng, &items);

        assert_eq!(items, before);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = seeded(3);
        let shuffled: Vec<u32> = shuffle(&mut rng, &[]);
        assert!(shuffled.is_empty());
    }

    #[test]
    fn test_sample_returns_distinct_elements() {
        let items: Vec<u32> = (0..50).collect();
        let mut rng = seeded(4);

        let sampled = sample(&mut rng, &items, 10);

        assert_eq!(sampled.len(), 10);
        let unique: BTreeSet<_> = sampled.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(sampled.iter().all(|x| items.contains(x)));
    }

    #[test]
    fn test_sample_oversized_request_is_full_shuffle() {
        let items = vec![1, 2, 3];
        let mut rng = seeded(5);

        let sampled = sample(&mut rng, &items, 10);

        let mut sorted = sampled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_sample_zero() {
        let items = vec![1, 2, 3];
        let mut rng = seeded(6);
        assert!(sample(&mut rng, &items, 0).is_empty());
    }

    #[test]
    fn test_pick_from_empty_is_none() {
        let mut rng = seeded(7);
        assert_eq!(pick::<u32, _>(&mut rng, &[]), None);
    }

    #[test]
    fn test_pick_returns_member() {
        let items = vec![10, 20, 30];
        let mut rng = seeded(8);
        for _ in 0..20 {
            let picked = pick(&mut rng, &items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let items: Vec<u32> = (0..20).collect();

        let first = shuffle(&mut seeded(42), &items);
        let second = shuffle(&mut seeded(42), &items);

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        // With 20 elements the identity permutation is vanishingly unlikely
        // across 10 attempts.
        let items: Vec<u32> = (0..20).collect();
        let mut rng = seeded(9);
        let moved = (0..10).any(|_| shuffle(&mut rng, &items) != items);
        assert!(moved);
    }
}
