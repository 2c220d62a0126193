use serde::{Deserialize, Serialize};

use crate::comparator::to_ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Elements that compare equal keep their original relative order.
    #[default]
    Stable,
    Unstable,
}

/// Sorts `seq` in place so that no element is preceded by one that `less`
/// places after it. Stable.
///
/// `less` must be a strict weak ordering; for anything else the resulting
/// order is unspecified.
pub fn sort_by<T, F>(seq: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    sort_with_strategy(seq, less, SortStrategy::Stable);
}

pub fn sort_with_strategy<T, F>(seq: &mut [T], less: F, strategy: SortStrategy)
where
    F: Fn(&T, &T) -> bool,
{
    match strategy {
        SortStrategy::Stable => seq.sort_by(|a, b| to_ordering(&less, a, b)),
        SortStrategy::Unstable => seq.sort_unstable_by(|a, b| to_ordering(&less, a, b)),
    }
}

/// Return-new form of [`sort_by`].
pub fn sorted_by<T, F>(mut seq: Vec<T>, less: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    sort_by(&mut seq, less);
    seq
}

// =============================================================================
// Divisor-count ordering
// =============================================================================

/// Number of positive divisors of `n`; zero has none.
///
/// Divisors come in pairs `(i, n / i)`, so only `i <= sqrt(n)` is tried.
pub fn divisor_count(n: u64) -> usize {
    let mut count = 0;
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            count += if i == n / i { 1 } else { 2 };
        }
        i += 1;
    }
    count
}

pub fn divisor_count_less(a: &u64, b: &u64) -> bool {
    divisor_count(*a) < divisor_count(*b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{build_comparator, by_key, Direction};
    use proptest::prelude::*;

    #[test]
    fn test_divisor_count() {
        let counts: Vec<usize> = (1..=6).map(divisor_count).collect();
        assert_eq!(counts, vec![1, 2, 2, 3, 2, 4]);
        assert_eq!(divisor_count(0), 0);
        assert_eq!(divisor_count(12), 6);
        assert_eq!(divisor_count(36), 9);
    }

    #[test]
    fn test_divisor_count_large_inputs() {
        assert_eq!(divisor_count(1_000_000_007), 2);
        assert_eq!(divisor_count(1 << 40), 41);
        // 71 * 839 * 1471 * 6857
        assert_eq!(divisor_count(600_851_475_143), 16);
    }

    #[test]
    fn test_sort_by_divisor_count_is_stable() {
        let mut some_array = vec![1u64, 2, 3, 4, 5, 6];
        sort_by(&mut some_array, divisor_count_less);
        // 2, 3 and 5 tie on two divisors and keep their input order
        assert_eq!(some_array, vec![1, 2, 3, 5, 4, 6]);
    }

    #[test]
    fn test_unstable_strategy_still_orders() {
        let mut values = vec![6u64, 5, 4, 3, 2, 1];
        sort_with_strategy(&mut values, divisor_count_less, SortStrategy::Unstable);
        let counts: Vec<usize> = values.iter().map(|v| divisor_count(*v)).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_descending_with_built_comparator() {
        let mut values = vec![3, 1, 4, 1, 5, 9, 2, 6];
        sort_by(&mut values, build_comparator(Direction::Descending));
        assert_eq!(values, vec![9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_sorted_by_key() {
        let words = vec!["pear", "fig", "banana", "kiwi"];
        let by_len = sorted_by(words, by_key(|w: &&str| w.len(), Direction::Ascending));
        assert_eq!(by_len, vec!["fig", "pear", "kiwi", "banana"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        sort_by(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut one = vec![42];
        sort_by(&mut one, |a, b| a < b);
        assert_eq!(one, vec![42]);
    }

    proptest! {
        #[test]
        fn test_sort_by_matches_std_sort(mut vec in prop::collection::vec(any::<i32>(), 0..100)) {
            let sorted = sorted_by(vec.clone(), |a, b| a < b);

            for i in 1..sorted.len() {
                prop_assert!(sorted[i - 1] <= sorted[i]);
            }

            vec.sort();
            prop_assert_eq!(sorted, vec);
        }

        #[test]
        fn test_stable_sort_keeps_tie_order(
            vec in prop::collection::vec((0u8..4, any::<u16>()), 0..60)
        ) {
            let sorted = sorted_by(vec.clone(), |a, b| a.0 < b.0);

            for key in 0u8..4 {
                let before: Vec<_> = vec.iter().filter(|p| p.0 == key).collect();
                let after: Vec<_> = sorted.iter().filter(|p| p.0 == key).collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
