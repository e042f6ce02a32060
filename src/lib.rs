//! Segment tree over a sparse, fixed set of integer keys, and the
//! O(n log n) maximum-weight increasing subsequence solver built on it.
//!
//! ```
//! use sparse_segtree::{max_weight_increasing_subsequence, groups::NumMax, SparseSegmentTree};
//!
//! let mut tree = SparseSegmentTree::new(NumMax::<i64>::new(), vec![-5, 10, 1_000_000]).unwrap();
//! tree.update(10, 7).unwrap();
//! assert_eq!(tree.value_before(1_000_000), 7);
//! assert_eq!(tree.value_before(10), 0);
//!
//! let total = max_weight_increasing_subsequence(&[1, 2, 3, 4], &[10, 20, 30, 40]);
//! assert_eq!(total, Ok(100));
//! ```

pub mod groups;
pub mod input;

mod coords;
mod error;
mod segment_tree;
mod solver;

pub use coords::Coordinates;
pub use error::{Error, Result};
pub use segment_tree::{NodeId, SparseSegmentTree};
pub use solver::{max_weight_increasing_subsequence, IncreasingSubsequenceSolver};

#[cfg(test)]
fn bench<T, F: FnOnce() -> T>(name: &str, num_tabs: usize, f: F) -> T {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    let res = f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
    res
}
