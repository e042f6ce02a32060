use proptest::prelude::*;
use sparse_segtree::{max_weight_increasing_subsequence, Error, IncreasingSubsequenceSolver};

/// O(n^2) reference DP.
fn reference(keys: &[i64], weights: &[i64]) -> i64 {
    let mut best_ending = Vec::with_capacity(keys.len());
    for i in 0..keys.len() {
        let before = (0..i)
            .filter(|&j| keys[j] < keys[i])
            .map(|j| best_ending[j])
            .max()
            .unwrap_or(0);
        best_ending.push(before + weights[i]);
    }
    best_ending.into_iter().max().unwrap_or(0)
}

#[test]
fn strictly_increasing_keys_take_everything() {
    let total = max_weight_increasing_subsequence(&[1, 2, 3, 4], &[10, 20, 30, 40]);
    assert_eq!(total, Ok(100));
}

#[test]
fn repeated_pass_improves_last_key() {
    let keys = [1, 2, 3, 4, 1, 2, 3, 4];
    let weights = [10, 20, 30, 40, 15, 15, 15, 50];
    assert_eq!(max_weight_increasing_subsequence(&keys, &weights), Ok(110));
}

#[test]
fn single_element() {
    assert_eq!(max_weight_increasing_subsequence(&[5], &[7]), Ok(7));
}

#[test]
fn duplicate_key_keeps_better_total() {
    assert_eq!(max_weight_increasing_subsequence(&[2, 2], &[10, 3]), Ok(10));
    assert_eq!(max_weight_increasing_subsequence(&[2, 2, 3], &[10, 3, 1]), Ok(11));
}

#[test]
fn empty_input() {
    assert_eq!(max_weight_increasing_subsequence(&[], &[]), Ok(0));
}

#[test]
fn sparse_huge_keys() {
    let keys = [i64::MIN, -1_000_000_000_000, 0, i64::MAX, 7];
    let weights = [1, 2, 3, 4, 5];
    assert_eq!(max_weight_increasing_subsequence(&keys, &weights), Ok(11));
}

#[test]
fn mismatched_lengths() {
    let solver = IncreasingSubsequenceSolver::new();
    assert_eq!(
        solver.solve(&[1, 2, 3], &[1, 2]),
        Err(Error::LengthMismatch { keys: 3, weights: 2 })
    );
    assert_eq!(
        solver.solve(&[], &[1]),
        Err(Error::LengthMismatch { keys: 0, weights: 1 })
    );
}

#[test]
fn negative_weight() {
    let err = max_weight_increasing_subsequence(&[1, 2], &[3, -1]).unwrap_err();
    assert_eq!(err, Error::NegativeWeight { index: 1, weight: -1 });
    assert_eq!(err.to_string(), "weight -1 at index 1 is negative");
}

proptest! {
    #[test]
    fn matches_reference(
        pairs in prop::collection::vec((-30i64..30, 0i64..1000), 0..120)
    ) {
        let (keys, weights): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
        let total = max_weight_increasing_subsequence(&keys, &weights).unwrap();
        prop_assert_eq!(total, reference(&keys, &weights));
    }

    #[test]
    fn total_bounds(
        pairs in prop::collection::vec((any::<i32>(), 0i64..1_000_000), 1..200)
    ) {
        let keys: Vec<i64> = pairs.iter().map(|&(k, _)| k as i64).collect();
        let weights: Vec<i64> = pairs.iter().map(|&(_, w)| w).collect();
        let total = max_weight_increasing_subsequence(&keys, &weights).unwrap();
        prop_assert!(total >= *weights.iter().max().unwrap());
        prop_assert!(total <= weights.iter().sum::<i64>());
    }
}
