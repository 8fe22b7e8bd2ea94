//! Order-statistic selection over unsorted slices.
//!
//! # Introduction
//!
//! Let $`A = (a_0, a_1, \dots, a_{n-1})`$ be an unordered sequence and
//! $`k \in [1, n]`$ a 1-based rank. The k-th largest element of $`A`$ is the
//! value at offset $`n - k`$ once $`A`$ is arranged in non-decreasing order;
//! $`k = 1`$ selects the maximum and $`k = n`$ the minimum.
//!
//! [`kth_largest`] and [`kth_largest_by`] compute it by sorting the slice in
//! place and reading that offset, in $`O(n \lg n)`$ time.
//!
//! # Mutation contract
//!
//! Selection is permitted to reorder its input and, in this implementation,
//! always leaves the slice sorted. Callers that need the original order must
//! copy the slice beforehand.
//!
//! # Duplicates
//!
//! Ties are resolved arbitrarily by the sort: with duplicate values at the
//! rank boundary, "k-th largest" is well-defined by value only, not by
//! original position.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use seqfind::selection::kth_largest;
//!
//! let mut vals = vec![12, 3, 5, 7, 19, 2, 10];
//!
//! assert_eq!(kth_largest(&mut vals, 3)?, 10);
//! # Ok(())
//! # }
//! ```
use std::cmp::Ordering;

use anyhow::{anyhow, Result};

/// Returns the k-th largest value of `vals` under the comparison function
/// `cmp`, sorting the slice in place as a side effect.
///
/// `cmp` must define a total order; "largest" means greatest with respect to
/// it. After a successful call, `vals` is sorted in non-decreasing order by
/// `cmp` (unstably, so equal elements may be reordered).
///
/// # Arguments
///
///  - `vals`: Slice to select from. Reordered in place.
///  - `k`: 1-based rank from the top, in `1..=vals.len()`.
///  - `cmp`: Three-way comparison function defining a total order over the
///    element type.
///
/// # Errors
///
/// An error is returned if `vals` is empty or `k` is not in `1..=vals.len()`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use seqfind::selection::kth_largest_by;
///
/// let mut vals = vec![12, 3, 5, 7, 19, 2, 10];
///
/// // Reversing the comparison selects the k-th *smallest*.
/// assert_eq!(kth_largest_by(&mut vals, 3, |a, b| b.cmp(a))?, 5);
/// # Ok(())
/// # }
/// ```
pub fn kth_largest_by<T, F>(vals: &mut [T], k: usize, cmp: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = vals.len();
    if n == 0 {
        return Err(anyhow!("vals must not be empty."));
    }
    if !(1..=n).contains(&k) {
        return Err(anyhow!("k must be in 1..={n}, but got {k}."));
    }
    vals.sort_unstable_by(cmp);
    Ok(vals[n - k].clone())
}

/// Returns the k-th largest value of `vals` in natural order, sorting the
/// slice in place as a side effect.
///
/// This is [`kth_largest_by`] with `Ord::cmp` as the comparison function;
/// the same mutation contract applies.
///
/// # Errors
///
/// An error is returned if `vals` is empty or `k` is not in `1..=vals.len()`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use seqfind::selection::kth_largest;
///
/// let mut vals = vec![4, 1, 4, 2];
///
/// assert_eq!(kth_largest(&mut vals, 1)?, 4);
/// assert_eq!(kth_largest(&mut vals, 2)?, 4);
/// assert_eq!(kth_largest(&mut vals, 4)?, 1);
/// # Ok(())
/// # }
/// ```
pub fn kth_largest<T>(vals: &mut [T], k: usize) -> Result<T>
where
    T: Ord + Clone,
{
    kth_largest_by(vals, k, Ord::cmp)
}
