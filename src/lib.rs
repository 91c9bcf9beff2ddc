//! # Sorting
//!
//! `sorting` provides the two classic in-place comparison sorts, **Quicksort** and
//! **Mergesort**, for `i32` slices, with argument validation on every entry point.
//!
//! ## Key Features
//!
//! - **In-Place**: The caller's slice is mutated directly; nothing is returned besides a
//!   `Result`.
//! - **Subrange Sorting**: [`quicksort_range`] and [`mergesort_range`] sort an inclusive range
//!   `[left, right]` and leave everything outside it untouched.
//! - **Configurable Pivot**: [`Quicksort`] takes a [`PivotStrategy`] (midpoint, random, or seeded
//!   random). The free functions use a random pivot.
//! - **Bounded Recursion**: Quicksort recurses only into the smaller partition, mergesort always
//!   halves, so stack depth is O(log n) for both.
//! - **Stable Mergesort**: Equal elements keep their relative order.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sorting::{mergesort, quicksort};
//!
//! let mut data = vec![5, 4, 3, 2, 1];
//! quicksort(&mut data[..]).unwrap();
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//!
//! let mut data = vec![3, 1, 2, 3, 1];
//! mergesort(&mut data[..]).unwrap();
//! assert_eq!(data, vec![1, 1, 2, 3, 3]);
//! ```
//!
//! ### Subranges and Errors
//!
//! Ranges are inclusive on both ends. An absent array (`None`) or a range that does not fit the
//! array is reported as a [`SortError`] before anything is modified.
//!
//! ```rust
//! use sorting::{quicksort_range, SortError};
//!
//! let mut data = vec![4, 3, 2, 1, 0];
//! quicksort_range(&mut data[..], 0, 2).unwrap();
//! assert_eq!(data, vec![2, 3, 4, 1, 0]);
//!
//! assert_eq!(quicksort_range(None, 0, 2), Err(SortError::NullArray));
//! assert!(matches!(
//!     quicksort_range(&mut data[..], 0, 5),
//!     Err(SortError::RangeOutOfBounds { .. })
//! ));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort**: O(n log n) on average, O(n²) worst case. Not stable. Lomuto partitioning
//!   sends every element equal to the pivot to the same side, so inputs made of a few repeated
//!   values approach the worst case.
//! - **Mergesort**: O(n log n) in all cases. Allocates two temporary buffers per merge.
//!
//! ## Logging
//!
//! Each entry point emits a `trace!` record through the [`log`](https://docs.rs/log) facade.
//! The crate never installs a logger.

pub mod algo;
pub mod core;
pub use algo::{Quicksort, mergesort, mergesort_range, quicksort, quicksort_range};
pub use core::{PivotStrategy, SortError, validate};

pub mod prelude {
    pub use crate::algo::{Quicksort, mergesort, mergesort_range, quicksort, quicksort_range};
    pub use crate::core::{PivotStrategy, SortError};
}
