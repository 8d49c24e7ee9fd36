/// Pair schedule construction.
///
/// The schedule is the full set of 2-combinations over `0..num_items`,
/// shuffled once at initialization and never touched again. Removal of an
/// option does not edit the schedule — it only changes which entries count
/// as valid when traversing.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Pair;

/// All unordered pairs over `0..num_items`, in lexicographic order.
/// Size is `n * (n - 1) / 2`; each pair is stored `(i, j)` with `i < j`.
pub fn all_pairs(num_items: usize) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(num_items * num_items.saturating_sub(1) / 2);
    for i in 0..num_items {
        for j in (i + 1)..num_items {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Build the comparison schedule: every pair exactly once, in a uniform
/// random permutation (Fisher–Yates, via `SliceRandom::shuffle`). Shuffling
/// removes order bias from the input sequence — every presentation order
/// is equally likely.
pub fn build_schedule(num_items: usize, rng: &mut impl Rng) -> Vec<Pair> {
    let mut pairs = all_pairs(num_items);
    pairs.shuffle(rng);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pair_count_matches_combinations() {
        assert_eq!(all_pairs(0).len(), 0);
        assert_eq!(all_pairs(1).len(), 0);
        assert_eq!(all_pairs(2).len(), 1);
        assert_eq!(all_pairs(5).len(), 10);
        assert_eq!(all_pairs(20).len(), 190);
    }

    #[test]
    fn every_pair_appears_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let schedule = build_schedule(6, &mut rng);
        assert_eq!(schedule.len(), 15);

        let unique: HashSet<Pair> = schedule.iter().copied().collect();
        assert_eq!(unique.len(), 15);

        for i in 0..6 {
            for j in (i + 1)..6 {
                assert!(unique.contains(&(i, j)), "missing pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn pairs_are_stored_low_high() {
        let mut rng = SmallRng::seed_from_u64(42);
        for &(i, j) in &build_schedule(8, &mut rng) {
            assert!(i < j);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let a = build_schedule(7, &mut SmallRng::seed_from_u64(99));
        let b = build_schedule(7, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn ids_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        for &(i, j) in &build_schedule(12, &mut rng) {
            assert!(i < 12 && j < 12);
        }
    }
}
