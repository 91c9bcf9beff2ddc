//! Core types shared by both sorting families.
//!
//! This module defines:
//! - [`SortError`]: The error returned by every public sorting operation.
//! - [`PivotStrategy`]: How quicksort picks its pivot.
//! - [`validate`]: Argument checking for the range-taking operations.

use thiserror::Error;

/// Errors reported by the sorting operations.
///
/// Validation always happens before the array is touched, so an `Err` means the
/// input was left exactly as it was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The array argument was absent (`None`).
    #[error("array argument is absent")]
    NullArray,

    /// The inclusive range `[left, right]` does not fit into an array of `len` elements.
    ///
    /// Raised when `left < 0`, `right >= len`, or `left > right`.
    #[error("range [{left}, {right}] is out of bounds for an array of length {len}")]
    RangeOutOfBounds {
        /// Requested left bound.
        left: isize,
        /// Requested right bound (inclusive).
        right: isize,
        /// Length of the array.
        len: usize,
    },
}

/// Pivot selection used by quicksort.
///
/// The choice only affects performance and the order in which equal elements end up,
/// never the sorted result.
///
/// # Examples
///
/// ```
/// use sorting::{PivotStrategy, Quicksort};
///
/// let mut data = vec![3, 1, 2];
/// Quicksort::new(PivotStrategy::Seeded(7)).sort(&mut data[..]).unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    /// Always the middle index `(left + right) / 2`.
    ///
    /// Deterministic and fast on sorted input, but adversarial inputs can drive it to O(n²).
    Midpoint,
    /// A uniformly random index drawn from the thread-local generator.
    #[default]
    Random,
    /// A uniformly random index drawn from a generator seeded with the given value.
    ///
    /// Two calls with the same seed on the same input perform the same permutation.
    Seeded(u64),
}

/// Checks the arguments of a range-taking sort.
///
/// The absent-array check runs first, then the bounds check. On success returns the
/// range as `usize` indices, guaranteed to satisfy `left <= right < array.len()`.
///
/// # Examples
///
/// ```
/// use sorting::{validate, SortError};
///
/// let data = [5, 4, 3];
/// assert_eq!(validate(Some(&data[..]), 0, 2), Ok((0, 2)));
/// assert_eq!(validate(None, 0, 2), Err(SortError::NullArray));
/// assert!(validate(Some(&data[..]), 0, 3).is_err());
/// ```
pub fn validate(array: Option<&[i32]>, left: isize, right: isize) -> Result<(usize, usize), SortError> {
    let array = array.ok_or(SortError::NullArray)?;
    let len = array.len();
    let out_of_bounds = SortError::RangeOutOfBounds { left, right, len };

    let lo = usize::try_from(left).map_err(|_| out_of_bounds)?;
    let hi = usize::try_from(right).map_err(|_| out_of_bounds)?;
    if hi >= len || lo > hi {
        return Err(out_of_bounds);
    }

    Ok((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_checked_before_bounds() {
        assert_eq!(validate(None, -1, 1000), Err(SortError::NullArray));
    }

    #[test]
    fn rejects_bad_bounds() {
        let data = [0; 100];
        let data = Some(&data[..]);

        for (left, right) in [(-1, 10), (11, 1), (1, 100), (1, 101), (0, -1)] {
            assert_eq!(
                validate(data, left, right),
                Err(SortError::RangeOutOfBounds { left, right, len: 100 }),
                "[{left}, {right}]"
            );
        }
    }

    #[test]
    fn accepts_inclusive_bounds() {
        let data = [0; 100];
        assert_eq!(validate(Some(&data[..]), 0, 99), Ok((0, 99)));
        assert_eq!(validate(Some(&data[..]), 42, 42), Ok((42, 42)));
    }

    #[test]
    fn empty_array_has_no_valid_range() {
        let data: [i32; 0] = [];
        assert!(matches!(
            validate(Some(&data[..]), 0, 0),
            Err(SortError::RangeOutOfBounds { len: 0, .. })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(SortError::NullArray.to_string(), "array argument is absent");
        let err = SortError::RangeOutOfBounds { left: 11, right: 1, len: 100 };
        assert_eq!(
            err.to_string(),
            "range [11, 1] is out of bounds for an array of length 100"
        );
    }
}
