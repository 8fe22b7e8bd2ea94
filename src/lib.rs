//! # `seqfind`: Search and selection over indexed sequences
//!
//! `seqfind` provides two small, independent families of queries over in-memory
//! sequences, both driven by an externally supplied total order:
//!
//! - [`searching`]
//!   - Binary search over sequences sorted in non-decreasing order, in iterative
//!     and recursive forms, generic over any randomly-indexable sequence.
//! - [`selection`]
//!   - Order-statistic selection of the k-th largest value by in-place sorting.
//!
//! Both families are generic over the element type; the ordering is decoupled
//! from the elements through a three-way comparison function
//! ([`Ordering`](std::cmp::Ordering)-returning), with `Ord`-based convenience
//! wrappers.
//!
//! ## Sequence abstraction
//!
//! The search queries do not require a concrete container. Any type offering a
//! random-access read ([`Access`](sequences::Access)) and a length
//! ([`NumElems`](sequences::NumElems)) can be searched, so array-shaped
//! (`[T]`, `Vec<T>`) and list-shaped (`VecDeque<T>`) inputs share one code path
//! with identical semantics. See [`sequences`] for the provided implementations.
#![deny(missing_docs)]

pub mod searching;
pub mod selection;
pub mod sequences;

pub use searching::{
    binary_search, binary_search_by, binary_search_recursive, binary_search_recursive_by,
};
pub use selection::{kth_largest, kth_largest_by};
pub use sequences::{Access, NumElems};
