//! Sorting algorithms (randomized Lomuto quicksort and top-down mergesort).
//!
//! Both families sort `i32` slices in place and come in two flavours:
//! - whole array: [`quicksort`], [`mergesort`]
//! - inclusive subrange `[left, right]`: [`quicksort_range`], [`mergesort_range`]
//!
//! Every entry point accepts anything convertible into `Option<&mut [i32]>`, so a plain
//! `&mut [i32]` works directly and `None` stands for an absent array.
//!
//! Quicksort is configured through [`Quicksort`]; the free functions use the default
//! randomized pivot.

use crate::core::{PivotStrategy, SortError, validate};
use log::trace;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Sorts the whole array in place with quicksort.
///
/// Uses a randomized pivot ([`PivotStrategy::Random`]). Not stable.
///
/// # Errors
///
/// [`SortError::NullArray`] if `array` is `None`.
///
/// # Examples
///
/// ```
/// use sorting::quicksort;
///
/// let mut data = vec![5, 4, 3, 2, 1];
/// quicksort(&mut data[..]).unwrap();
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn quicksort<'a, A: Into<Option<&'a mut [i32]>>>(array: A) -> Result<(), SortError> {
    Quicksort::default().sort(array)
}

/// Sorts the inclusive subrange `[left, right]` in place with quicksort.
///
/// Elements outside the range are left untouched.
///
/// # Errors
///
/// - [`SortError::NullArray`] if `array` is `None`.
/// - [`SortError::RangeOutOfBounds`] if `left < 0`, `right >= len` or `left > right`.
///
/// # Examples
///
/// ```
/// use sorting::quicksort_range;
///
/// let mut data = vec![9, 3, 2, 1, 0];
/// quicksort_range(&mut data[..], 1, 3).unwrap();
///
/// assert_eq!(data, vec![9, 1, 2, 3, 0]);
/// ```
pub fn quicksort_range<'a, A: Into<Option<&'a mut [i32]>>>(
    array: A,
    left: isize,
    right: isize,
) -> Result<(), SortError> {
    Quicksort::default().sort_range(array, left, right)
}

/// Quicksort with a configurable [`PivotStrategy`].
///
/// The value only carries configuration. Generator state is created per call, so a single
/// `Quicksort` can be shared between threads.
///
/// # Examples
///
/// ```
/// use sorting::{PivotStrategy, Quicksort};
///
/// let sorter = Quicksort::new(PivotStrategy::Midpoint);
/// let mut data = vec![2, 7, 1, 8, 2, 8];
/// sorter.sort(&mut data[..]).unwrap();
///
/// assert_eq!(data, vec![1, 2, 2, 7, 8, 8]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quicksort {
    pivot: PivotStrategy,
}

impl Quicksort {
    /// Creates a quicksort using the given pivot strategy.
    pub const fn new(pivot: PivotStrategy) -> Self {
        Self { pivot }
    }

    /// Returns the configured pivot strategy.
    pub const fn pivot_strategy(&self) -> PivotStrategy {
        self.pivot
    }

    /// Sorts the whole array in place. See [`quicksort`].
    pub fn sort<'a, A: Into<Option<&'a mut [i32]>>>(&self, array: A) -> Result<(), SortError> {
        let array = array.into().ok_or(SortError::NullArray)?;
        trace!(
            "quicksort: {} elements, pivot {:?}",
            array.len(),
            self.pivot
        );

        self.run(array);
        Ok(())
    }

    /// Sorts the inclusive subrange `[left, right]` in place. See [`quicksort_range`].
    pub fn sort_range<'a, A: Into<Option<&'a mut [i32]>>>(
        &self,
        array: A,
        left: isize,
        right: isize,
    ) -> Result<(), SortError> {
        let array = array.into().ok_or(SortError::NullArray)?;
        let (lo, hi) = validate(Some(&*array), left, right)?;
        trace!(
            "quicksort: range [{lo}, {hi}] of {} elements, pivot {:?}",
            array.len(),
            self.pivot
        );

        self.run(&mut array[lo..=hi]);
        Ok(())
    }

    fn run(&self, v: &mut [i32]) {
        let mut picker = PivotPicker::new(self.pivot);
        quicksort_impl(v, &mut picker);
    }
}

/// Per-call pivot source built from a [`PivotStrategy`].
enum PivotPicker {
    Midpoint,
    Thread(ThreadRng),
    Seeded(StdRng),
}

impl PivotPicker {
    fn new(strategy: PivotStrategy) -> Self {
        match strategy {
            PivotStrategy::Midpoint => Self::Midpoint,
            PivotStrategy::Random => Self::Thread(rand::rng()),
            PivotStrategy::Seeded(seed) => Self::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns an index in `0..len`. `len` must be non-zero.
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        match self {
            Self::Midpoint => (len - 1) / 2,
            Self::Thread(rng) => rng.random_range(0..len),
            Self::Seeded(rng) => rng.random_range(0..len),
        }
    }
}

/// Quicksort over `v`.
///
/// Recurses into the smaller partition and loops on the larger one, so stack depth stays
/// O(log n) even when the pivot sequence degrades the running time to O(n²).
fn quicksort_impl(mut v: &mut [i32], picker: &mut PivotPicker) {
    while v.len() > 1 {
        let pivot = picker.pick(v.len());
        let mid = partition(v, pivot);

        let (left, right) = std::mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_impl(left, picker);
            v = right;
        } else {
            quicksort_impl(right, picker);
            v = left;
        }
    }
}

/// Lomuto partition around `v[pivot]`.
///
/// Afterwards every element left of the returned index is strictly less than the pivot,
/// and every element right of it is greater or equal.
fn partition(v: &mut [i32], pivot: usize) -> usize {
    let last = v.len() - 1;
    v.swap(pivot, last);
    let pivot = v[last];

    let mut cursor = 0;
    for i in 0..last {
        if v[i] < pivot {
            v.swap(i, cursor);
            cursor += 1;
        }
    }

    v.swap(cursor, last);
    cursor
}

/// Sorts the whole array in place with mergesort.
///
/// Stable. O(n log n) in all cases, O(n) auxiliary memory.
///
/// # Errors
///
/// [`SortError::NullArray`] if `array` is `None`.
///
/// # Examples
///
/// ```
/// use sorting::mergesort;
///
/// let mut data = vec![3, 1, 2, 3, 1];
/// mergesort(&mut data[..]).unwrap();
///
/// assert_eq!(data, vec![1, 1, 2, 3, 3]);
/// ```
pub fn mergesort<'a, A: Into<Option<&'a mut [i32]>>>(array: A) -> Result<(), SortError> {
    let array = array.into().ok_or(SortError::NullArray)?;
    trace!("mergesort: {} elements", array.len());

    if !array.is_empty() {
        let right = array.len() - 1;
        merge_sort(array, 0, right, &mut |a: &i32, b: &i32| a < b);
    }
    Ok(())
}

/// Sorts the inclusive subrange `[left, right]` in place with mergesort.
///
/// Elements outside the range are left untouched.
///
/// # Errors
///
/// - [`SortError::NullArray`] if `array` is `None`.
/// - [`SortError::RangeOutOfBounds`] if `left < 0`, `right >= len` or `left > right`.
pub fn mergesort_range<'a, A: Into<Option<&'a mut [i32]>>>(
    array: A,
    left: isize,
    right: isize,
) -> Result<(), SortError> {
    let array = array.into().ok_or(SortError::NullArray)?;
    let (lo, hi) = validate(Some(&*array), left, right)?;
    trace!("mergesort: range [{lo}, {hi}] of {} elements", array.len());

    merge_sort(array, lo, hi, &mut |a: &i32, b: &i32| a < b);
    Ok(())
}

/// Top-down mergesort of the inclusive range `[left, right]`.
fn merge_sort<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    // floor((left + right) / 2) without the overflow.
    let middle = left + (right - left) / 2;
    merge_sort(v, left, middle, is_less);
    merge_sort(v, middle + 1, right, is_less);
    merge(v, left, middle, right, is_less);
}

/// Merges the sorted runs `[left, middle]` and `[middle + 1, right]`.
///
/// Both runs are copied into fresh buffers. On ties the lower run wins, which keeps the
/// sort stable.
fn merge<T, F>(v: &mut [T], left: usize, middle: usize, right: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let lower = v[left..=middle].to_vec();
    let upper = v[middle + 1..=right].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut v[left..=right] {
        let take_upper = i == lower.len() || (j < upper.len() && is_less(&upper[j], &lower[i]));
        if take_upper {
            *slot = upper[j];
            j += 1;
        } else {
            *slot = lower[i];
            i += 1;
        }
    }
}
