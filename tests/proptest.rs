//! Property-based tests for collection queries using proptest.

use generic_collections::Collection;
use proptest::prelude::*;

// Small inline capacity so generated inputs exercise both stack and heap storage.
type Small = Collection<i64, 4>;

fn small(items: &[i64]) -> Small {
    items.iter().copied().collect()
}

proptest! {
    /// where_ and find_many select the same elements in the same order.
    #[test]
    fn where_agrees_with_find_many(
        items in prop::collection::vec(any::<i64>(), 0..64),
        modulus in 1i64..8,
    ) {
        let c = small(&items);
        let filtered = c.where_(|x| x % modulus == 0);
        let many: Vec<i64> = c.find_many(|x| x % modulus == 0).into_iter().copied().collect();

        prop_assert_eq!(filtered.count(), many.len());
        prop_assert_eq!(filtered.get_all(), many.as_slice());

        let expected: Vec<i64> = items.iter().copied().filter(|x| x % modulus == 0).collect();
        prop_assert_eq!(many, expected);
    }

    /// select keeps the length and maps element-wise.
    #[test]
    fn select_maps_element_wise(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let c = small(&items);
        let mapped = c.select(|x| x.wrapping_mul(3));

        prop_assert_eq!(mapped.count(), c.count());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(mapped[i], item.wrapping_mul(3));
        }
    }

    /// Reversing twice restores the original order.
    #[test]
    fn reverse_is_an_involution(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut c = small(&items);
        c.reverse();
        c.reverse();
        prop_assert_eq!(c.get_all(), items.as_slice());
    }

    /// sort then reverse yields descending order.
    #[test]
    fn sort_then_reverse_is_descending(
        items in prop::collection::hash_set(any::<i64>(), 0..64),
    ) {
        let items: Vec<i64> = items.into_iter().collect();
        let mut c = small(&items);
        c.sort(|a, b| a < b);
        c.reverse();

        let mut expected = items.clone();
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(c.get_all(), expected.as_slice());
    }

    /// reverse_sort matches a stable descending sort.
    #[test]
    fn reverse_sort_is_stable_descending(
        items in prop::collection::vec((0u8..5, any::<u16>()), 0..64),
    ) {
        let mut c: Collection<(u8, u16), 4> = items.iter().copied().collect();
        c.reverse_sort(|a, b| a.0 < b.0);

        let mut expected = items.clone();
        expected.sort_by(|a, b| b.0.cmp(&a.0));
        prop_assert_eq!(c.get_all(), expected.as_slice());
    }

    /// Every element lands in exactly one group, and groups keep source order.
    #[test]
    fn group_by_partitions_the_source(
        items in prop::collection::vec(any::<i64>(), 0..64),
        buckets in 1i64..6,
    ) {
        let c = small(&items);
        let groups = c.group_by(|x| x.rem_euclid(buckets));

        prop_assert_eq!(groups.total_count(), items.len());

        let mut union: Vec<i64> = groups.values().flat_map(|g| g.iter().copied()).collect();
        let mut source = items.clone();
        union.sort();
        source.sort();
        prop_assert_eq!(union, source);

        for (key, group) in &groups {
            let expected: Vec<i64> =
                items.iter().copied().filter(|x| x.rem_euclid(buckets) == *key).collect();
            prop_assert_eq!(group.get_all(), expected.as_slice());
        }
    }

    /// remove_range either removes exactly the span or leaves everything untouched.
    #[test]
    fn remove_range_is_all_or_nothing(
        items in prop::collection::vec(any::<i64>(), 0..32),
        start in 0usize..40,
        count in 0usize..40,
    ) {
        let mut c = small(&items);
        let result = c.remove_range(start, count);

        if start + count <= items.len() {
            prop_assert!(result.is_ok());
            let mut expected = items.clone();
            expected.drain(start..start + count);
            prop_assert_eq!(c.get_all(), expected.as_slice());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(c.get_all(), items.as_slice());
        }
    }

    /// find_by_index never panics and agrees with slice get.
    #[test]
    fn find_by_index_is_total(
        items in prop::collection::vec(any::<i64>(), 0..32),
        index in any::<usize>(),
    ) {
        let c = small(&items);
        prop_assert_eq!(c.find_by_index(index), items.get(index));
    }

    /// Aggregates match a straightforward fold, with 0.0 for empty input.
    #[test]
    fn aggregates_match_reference(items in prop::collection::vec(-1_000i32..1_000, 0..64)) {
        let c: Collection<i32, 4> = items.iter().copied().collect();
        let as_f64 = |x: &i32| *x as f64;

        let sum: i32 = items.iter().sum();
        prop_assert_eq!(c.sum(as_f64), sum as f64);

        let max = items.iter().copied().max().map(f64::from);
        let min = items.iter().copied().min().map(f64::from);
        prop_assert_eq!(c.checked_max(as_f64), max);
        prop_assert_eq!(c.checked_min(as_f64), min);
        prop_assert_eq!(c.max(as_f64), max.unwrap_or(0.0));
        prop_assert_eq!(c.min(as_f64), min.unwrap_or(0.0));
    }
}
