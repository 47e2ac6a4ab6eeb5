//! # Smoothsort
//!
//! `smoothsort` is an adaptive, in-place, allocation-free sorting library for any
//! collection with random access.
//!
//! It implements Dijkstra's [**smoothsort**](https://www.cs.utexas.edu/users/EWD/ewd07xx/EWD796a.PDF),
//! a heapsort variant built on Leonardo heaps. Like heapsort it guarantees
//! O(n log n) comparisons in the worst case with O(1) extra space; unlike heapsort it
//! degrades gracefully towards O(n) as the input approaches sorted order.
//!
//! ## Key Features
//!
//! - **Adaptive**: Already sorted input costs a linear number of comparisons and
//!   performs no exchanges at all.
//! - **No allocation**: The only bookkeeping is a fixed-size, cache-aligned stack of
//!   heap roots living on the call stack.
//! - **Zero-Copy abstractions**: The [`SortableSequence`] trait allows sorting arbitrary
//!   data structures (parallel arrays, ring buffers, columnar storage) through
//!   compare-by-index and swap-by-index.
//! - **Explicit float order**: [`smoothsort_floats`] sorts NaN first instead of
//!   producing an arbitrary permutation.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Slices, `Vec`s and `VecDeque`s of [`Ord`] elements implement [`SortableSequence`]
//! directly. Strings compare byte-wise.
//!
//! ```rust
//! use smoothsort::{is_sorted, smoothsort};
//!
//! let mut data = vec!["", "Hello", "foo", "bar", "foo", "f00", "%*&^*&^&", "***"];
//! smoothsort(&mut data);
//!
//! assert_eq!(data, vec!["", "%*&^*&^&", "***", "Hello", "bar", "f00", "foo", "foo"]);
//! assert!(is_sorted(&data));
//! ```
//!
//! ### Custom Types
//!
//! To sort data that does not live in a single slice, implement [`SortableSequence`].
//!
//! ```rust
//! use smoothsort::{smoothsort, SortableSequence};
//! use std::cmp::Ordering;
//!
//! // Scores and names stored side by side.
//! struct Leaderboard {
//!     scores: Vec<u32>,
//!     names: Vec<String>,
//! }
//!
//! impl SortableSequence for Leaderboard {
//!     fn len(&self) -> usize {
//!         self.scores.len()
//!     }
//!
//!     fn compare(&self, i: usize, j: usize) -> Ordering {
//!         self.scores[i].cmp(&self.scores[j])
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.scores.swap(i, j);
//!         self.names.swap(i, j);
//!     }
//! }
//!
//! let mut board = Leaderboard {
//!     scores: vec![30, 10, 20],
//!     names: vec!["Carol".to_string(), "Alice".to_string(), "Bob".to_string()],
//! };
//! smoothsort(&mut board);
//!
//! assert_eq!(board.names, vec!["Alice", "Bob", "Carol"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: O(N) comparisons and no exchanges on sorted or all-equal input.
//! - **Worst Case**: O(N log N) comparisons, as heapsort.
//! - **Memory Overhead**: A constant-size stack (under 1 KiB on 64-bit targets).
//! - **Stability**: Not stable; equal elements may be reordered.

pub mod algo;
pub mod core;
pub mod leonardo;
pub use algo::{
    floats_are_sorted, is_sorted, smoothsort, smoothsort_by, smoothsort_by_key, smoothsort_floats,
};
pub use core::{FloatSlice, SortBy, SortableSequence, nan_first_cmp};
pub use leonardo::{LEONARDO, LEONARDO_LEN, LeonardoNumbers, leonardo};

pub mod prelude {
    pub use crate::algo::{
        floats_are_sorted, is_sorted, smoothsort, smoothsort_by, smoothsort_by_key,
        smoothsort_floats,
    };
    pub use crate::core::{FloatSlice, SortBy, SortableSequence};
}
