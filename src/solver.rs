//! Maximum total weight of a subsequence whose keys strictly increase.
//!
//! One left-to-right pass. For each `(key, weight)` the best total ending on
//! any smaller key comes from a max segment tree over the declared keys, so
//! the whole solve is O(n log n).

use std::collections::HashMap;

use crate::coords::Coordinates;
use crate::error::{Error, Result};
use crate::groups::NumMax;
use crate::segment_tree::SparseSegmentTree;

#[derive(Clone, Copy, Debug, Default)]
pub struct IncreasingSubsequenceSolver;

impl IncreasingSubsequenceSolver {
    pub fn new() -> Self {
        Self
    }

    /// Weights must be non-negative: `0` is the identity of the max tree and
    /// has to sit below every real total.
    pub fn solve(&self, keys: &[i64], weights: &[i64]) -> Result<i64> {
        validate(keys, weights)?;
        if keys.is_empty() {
            return Ok(0);
        }

        let coords = Coordinates::new(keys.iter().copied());
        let mut tree = SparseSegmentTree::from_coordinates(NumMax::<i64>::new(), &coords)?;
        let mut best_at: HashMap<i64, i64> = HashMap::with_capacity(coords.len());
        let mut best = 0;

        for (i, (&key, &weight)) in keys.iter().zip(weights).enumerate() {
            let total = tree
                .value_before(key)
                .checked_add(weight)
                .ok_or(Error::Overflow { index: i })?;

            // a worse total for a repeated key must never reach the tree
            if best_at.get(&key).map_or(true, |&prev| prev < total) {
                best_at.insert(key, total);
                tree.update(key, total)?;
                best = best.max(total);
            }
        }

        log::debug!(
            "solved {} elements over {} distinct keys: {}",
            keys.len(),
            coords.len(),
            best
        );
        Ok(best)
    }
}

fn validate(keys: &[i64], weights: &[i64]) -> Result<()> {
    if keys.len() != weights.len() {
        return Err(Error::LengthMismatch {
            keys: keys.len(),
            weights: weights.len(),
        });
    }
    match weights.iter().position(|&w| w < 0) {
        Some(index) => Err(Error::NegativeWeight {
            index,
            weight: weights[index],
        }),
        None => Ok(()),
    }
}

/// Shorthand for [`IncreasingSubsequenceSolver::solve`].
pub fn max_weight_increasing_subsequence(keys: &[i64], weights: &[i64]) -> Result<i64> {
    IncreasingSubsequenceSolver::new().solve(keys, weights)
}
