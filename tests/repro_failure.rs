//! Regressions around the inclusive `right` bound.
//!
//! A ranged sort must reject `right == len` and must sort exactly `[left, right]`,
//! never the whole array.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorting::prelude::*;
use test_log::test;

#[test]
fn test_right_equal_to_len_is_rejected() {
    let mut input: Vec<i32> = (0..100).collect();

    assert_eq!(
        quicksort_range(&mut input[..], 0, 100),
        Err(SortError::RangeOutOfBounds { left: 0, right: 100, len: 100 })
    );
    assert_eq!(
        mergesort_range(&mut input[..], 0, 100),
        Err(SortError::RangeOutOfBounds { left: 0, right: 100, len: 100 })
    );
}

#[test]
fn test_range_sort_does_not_sort_whole_array() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let input: Vec<i32> = (0..1000).map(|_| rng.random_range(-1000..1000)).collect();

        let mut quick = input.clone();
        quicksort_range(&mut quick[..], 100, 199).unwrap();

        let mut merge = input.clone();
        mergesort_range(&mut merge[..], 100, 199).unwrap();

        let mut expected = input.clone();
        expected[100..200].sort();

        for (name, actual) in [("quicksort_range", &quick), ("mergesort_range", &merge)] {
            if *actual != expected {
                // Find first mismatch
                for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                    if a != b {
                        panic!("{}: mismatch at index {}: got {}, expected {}", name, i, a, b);
                    }
                }
            }
        }
    }
}

#[test]
fn test_last_index_is_sorted() {
    let mut input = vec![4, 3, 2, 1, 0];
    quicksort_range(&mut input[..], 3, 4).unwrap();
    assert_eq!(input, vec![4, 3, 2, 0, 1]);

    let mut input = vec![4, 3, 2, 1, 0];
    mergesort_range(&mut input[..], 3, 4).unwrap();
    assert_eq!(input, vec![4, 3, 2, 0, 1]);
}
