//! Binary search over sorted indexed sequences.
//!
//! # Introduction
//!
//! Let $`A = (a_0, a_1, \dots, a_{n-1})`$ be a sequence sorted in
//! non-decreasing order with respect to a three-way comparison function
//! $`\textrm{cmp}`$. The queries in this module locate a target value $`t`$ in
//! $`O(\lg n)`$ comparisons:
//!
//! - [`binary_search_by`] and [`binary_search`] perform the search with a loop.
//! - [`binary_search_recursive_by`] and [`binary_search_recursive`] perform the
//!   search by recursion over a shrinking window, returning identical results
//!   to the iterative forms on every input.
//!
//! All queries are generic over [`Access`] + [`NumElems`], so array-shaped and
//! list-shaped sequences (see [`sequences`](crate::sequences)) are searched
//! through one code path with identical semantics.
//!
//! # Preconditions and duplicates
//!
//! Sortedness is a caller responsibility and is not verified: searching a
//! sequence that is not sorted consistently with the comparison function
//! completes and returns *some* [`Option`], but the result is unspecified.
//! It is never a panic or an error.
//!
//! When the target occurs more than once, any index holding a matching element
//! may be returned; the queries do not guarantee the first or last occurrence.
//!
//! # Examples
//!
//! ```
//! use std::collections::VecDeque;
//!
//! use seqfind::searching::{binary_search, binary_search_recursive};
//!
//! let array = vec![-9, 1, 3, 5, 7];
//! let list: VecDeque<i32> = array.iter().copied().collect();
//!
//! assert_eq!(binary_search(&array, &-9), Some(0));
//! assert_eq!(binary_search_recursive(&array, &-9), Some(0));
//! assert_eq!(binary_search(&list, &-9), Some(0));
//!
//! assert_eq!(binary_search(&array, &4), None);
//! ```
use std::cmp::Ordering;

use crate::sequences::{Access, NumElems};

/// Searches a sorted sequence for `target` with the comparison function `cmp`,
/// returning the position of a matching element, or [`None`] if absent.
///
/// The sequence must be sorted in non-decreasing order consistently with
/// `cmp`; otherwise the result is unspecified (but the call still completes).
/// If the target occurs multiple times, any matching position may be returned.
///
/// # Arguments
///
///  - `seq`: Sequence sorted by `cmp`.
///  - `target`: Value to locate.
///  - `cmp`: Three-way comparison function defining a total order over the
///    element type. It is always invoked as `cmp(element, target)`.
///
/// # Complexity
///
/// $`O(\lg n)`$ comparisons for a sequence of $`n`$ elements.
///
/// # Examples
///
/// ```
/// use seqfind::searching::binary_search_by;
///
/// let seq = vec![7, 5, 3, 1];
///
/// // The sequence is sorted in *descending* natural order, which is
/// // non-decreasing under the reversed comparison.
/// assert_eq!(binary_search_by(&seq, &3, |a, b| b.cmp(a)), Some(2));
/// assert_eq!(binary_search_by(&seq, &4, |a, b| b.cmp(a)), None);
/// ```
pub fn binary_search_by<S, F>(seq: &S, target: &S::Elem, mut cmp: F) -> Option<usize>
where
    S: Access + NumElems + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    // Half-open window [left, right); empty iff left == right.
    let mut left = 0;
    let mut right = seq.num_elems();
    while left < right {
        // Avoids overflow of (left + right) / 2 on wide windows.
        let mid = left + (right - left) / 2;
        match cmp(seq.access(mid)?, target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}

/// Searches a sorted sequence for `target` in natural order, returning the
/// position of a matching element, or [`None`] if absent.
///
/// This is [`binary_search_by`] with `Ord::cmp` as the comparison function;
/// the same sortedness precondition and duplicate indeterminacy apply.
///
/// # Examples
///
/// ```
/// use seqfind::searching::binary_search;
///
/// let seq = vec![1, 3, 5, 7];
///
/// assert_eq!(binary_search(&seq, &5), Some(2));
/// assert_eq!(binary_search(&seq, &4), None);
/// ```
pub fn binary_search<S>(seq: &S, target: &S::Elem) -> Option<usize>
where
    S: Access + NumElems + ?Sized,
    S::Elem: Ord,
{
    binary_search_by(seq, target, Ord::cmp)
}

/// Recursive form of [`binary_search_by`].
///
/// The search is expressed as calls over a shrinking window instead of a
/// loop and probes the same positions in the same order, so it returns
/// identical results to [`binary_search_by`] for every input, including the
/// empty sequence.
///
/// # Examples
///
/// ```
/// use seqfind::searching::binary_search_recursive_by;
///
/// let seq = vec![1, 3, 5, 7];
///
/// assert_eq!(binary_search_recursive_by(&seq, &7, Ord::cmp), Some(3));
/// assert_eq!(binary_search_recursive_by(&seq, &0, Ord::cmp), None);
/// ```
pub fn binary_search_recursive_by<S, F>(seq: &S, target: &S::Elem, mut cmp: F) -> Option<usize>
where
    S: Access + NumElems + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    search_window(seq, target, &mut cmp, 0, seq.num_elems())
}

/// Recursive form of [`binary_search`] (natural order).
///
/// # Examples
///
/// ```
/// use seqfind::searching::binary_search_recursive;
///
/// let seq = vec![1, 3, 5, 7];
///
/// assert_eq!(binary_search_recursive(&seq, &1), Some(0));
/// assert_eq!(binary_search_recursive(&seq, &8), None);
/// ```
pub fn binary_search_recursive<S>(seq: &S, target: &S::Elem) -> Option<usize>
where
    S: Access + NumElems + ?Sized,
    S::Elem: Ord,
{
    binary_search_recursive_by(seq, target, Ord::cmp)
}

/// Searches the half-open window `[left, right)`, recursing on the half that
/// can still contain the target. An empty window returns [`None`] immediately.
fn search_window<S, F>(
    seq: &S,
    target: &S::Elem,
    cmp: &mut F,
    left: usize,
    right: usize,
) -> Option<usize>
where
    S: Access + NumElems + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    if left >= right {
        return None;
    }
    let mid = left + (right - left) / 2;
    match cmp(seq.access(mid)?, target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_window(seq, target, cmp, mid + 1, right),
        Ordering::Greater => search_window(seq, target, cmp, left, mid),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn gen_sorted_ints(len: usize, max: u32, seed: u64) -> Vec<u32> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut vals: Vec<u32> = (0..len).map(|_| rng.gen_range(0..=max)).collect();
        vals.sort_unstable();
        vals
    }

    #[test]
    fn test_empty() {
        let seq: Vec<u32> = vec![];
        assert_eq!(binary_search(&seq, &0), None);
        assert_eq!(binary_search_recursive(&seq, &0), None);
    }

    #[test]
    fn test_singleton() {
        let seq = vec![5];
        assert_eq!(binary_search(&seq, &5), Some(0));
        assert_eq!(binary_search(&seq, &4), None);
        assert_eq!(binary_search(&seq, &6), None);
    }

    #[test]
    fn test_boundaries() {
        let seq = vec![-9, 1, 3, 5, 7];
        assert_eq!(binary_search(&seq, &-9), Some(0));
        assert_eq!(binary_search(&seq, &7), Some(4));
        assert_eq!(binary_search(&seq, &-10), None);
        assert_eq!(binary_search(&seq, &8), None);
    }

    #[test]
    fn test_duplicates_return_some_match() {
        let seq = vec![1, 2, 2, 2, 3];
        // Which of the three positions is returned is unspecified.
        let i = binary_search(&seq, &2).unwrap();
        assert_eq!(seq[i], 2);
        let j = binary_search_recursive(&seq, &2).unwrap();
        assert_eq!(seq[j], 2);
    }

    #[test]
    fn test_descending_with_reversed_cmp() {
        let seq = vec![9, 7, 5, 3, 1];
        for (i, &v) in seq.iter().enumerate() {
            assert_eq!(binary_search_by(&seq, &v, |a, b| b.cmp(a)), Some(i));
        }
        assert_eq!(binary_search_by(&seq, &4, |a, b| b.cmp(a)), None);
    }

    #[test]
    fn test_iterative_vs_recursive() {
        for seed in 0..100 {
            let seq = gen_sorted_ints(seed as usize % 60, 50, seed);
            for t in 0..=50 {
                assert_eq!(
                    binary_search(&seq, &t),
                    binary_search_recursive(&seq, &t),
                    "seq = {seq:?}, t = {t}"
                );
            }
        }
    }

    #[test]
    fn test_array_vs_list() {
        for seed in 0..100 {
            let array = gen_sorted_ints(seed as usize % 60, 50, seed);
            let list: VecDeque<u32> = array.iter().copied().collect();
            for t in 0..=50 {
                assert_eq!(binary_search(&array, &t), binary_search(&list, &t));
                assert_eq!(
                    binary_search_recursive(&array, &t),
                    binary_search_recursive(&list, &t)
                );
            }
        }
    }

    #[test]
    fn test_membership_matches_std() {
        for seed in 0..100 {
            let seq = gen_sorted_ints(100, 200, seed);
            for t in 0..=200 {
                let found = binary_search(&seq, &t);
                assert_eq!(found.is_some(), seq.binary_search(&t).is_ok());
                if let Some(i) = found {
                    assert_eq!(seq[i], t);
                }
            }
        }
    }

    #[test]
    fn test_unsorted_input_is_unspecified_but_total() {
        // Violates the sortedness precondition: the result is unspecified,
        // but the call must complete and the iterative and recursive forms
        // must still agree.
        let seq = vec![1, 3, 5, 7, -9];
        let it = binary_search(&seq, &-9);
        let rec = binary_search_recursive(&seq, &-9);
        assert_eq!(it, rec);
        if let Some(i) = it {
            assert!(i < seq.len());
        }
    }
}
