//! Top module for indexed sequences.
//!
//! # Introduction
//!
//! The search queries in this crate are defined over an abstract sequence
//! rather than a concrete container.
//! Let $`A = (a_0, a_1, \dots, a_{n-1})`$ be a sequence of $`n`$ elements.
//! A searchable sequence supports the following queries:
//!
//! - $`\textrm{Access}(i)`$ returns $`a_i`$ (implemented by [`Access`]).
//! - $`\textrm{NumElems}()`$ returns $`n`$ (implemented by [`NumElems`]).
//!
//! # Implementations
//!
//! The standard containers covered by this crate are summarized below:
//!
//! | Implementation | Shape | [Access](Access) |
//! | --- | --- | :-: |
//! | `[T]`, `Vec<T>` | array | $`O(1)`$ |
//! | `VecDeque<T>` | list | $`O(1)`$ |
//!
//! `VecDeque<T>` is the list-shaped container of the standard library that
//! still offers constant-time indexed reads; the search queries behave
//! identically on array- and list-shaped inputs.
//!
//! # Examples
//!
//! [`prelude`] allows you to import the common traits easily.
//!
//! ```
//! use std::collections::VecDeque;
//!
//! use seqfind::sequences::prelude::*;
//!
//! let array = vec![1, 3, 5];
//! let list: VecDeque<i32> = array.iter().copied().collect();
//!
//! assert_eq!(array.num_elems(), 3);
//! assert_eq!(list.num_elems(), 3);
//!
//! assert_eq!(array.access(1), Some(&3));
//! assert_eq!(list.access(1), Some(&3));
//! assert_eq!(array.access(3), None);
//! ```
pub mod prelude;

use std::collections::VecDeque;

/// Interface for accessing elements on sequences.
pub trait Access {
    /// Type of the stored elements.
    type Elem;

    /// Returns a reference to the `pos`-th element, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<&Self::Elem>;
}

/// Interface for reporting basic statistics of sequences.
pub trait NumElems {
    /// Returns the number of elements stored.
    fn num_elems(&self) -> usize;

    /// Checks if the sequence is empty.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.num_elems() == 0
    }
}

impl<T> Access for [T] {
    type Elem = T;

    #[inline(always)]
    fn access(&self, pos: usize) -> Option<&Self::Elem> {
        self.get(pos)
    }
}

impl<T> NumElems for [T] {
    #[inline(always)]
    fn num_elems(&self) -> usize {
        self.len()
    }
}

impl<T> Access for Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn access(&self, pos: usize) -> Option<&Self::Elem> {
        self.as_slice().get(pos)
    }
}

impl<T> NumElems for Vec<T> {
    #[inline(always)]
    fn num_elems(&self) -> usize {
        self.len()
    }
}

impl<T> Access for VecDeque<T> {
    type Elem = T;

    #[inline(always)]
    fn access(&self, pos: usize) -> Option<&Self::Elem> {
        self.get(pos)
    }
}

impl<T> NumElems for VecDeque<T> {
    #[inline(always)]
    fn num_elems(&self) -> usize {
        self.len()
    }
}
