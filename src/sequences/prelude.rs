//! The prelude for indexed sequences.
//!
//! The purpose of this module is to alleviate imports of the common traits
//! for indexed sequences.
//!
//! ```
//! # #![allow(unused_imports)]
//! use seqfind::sequences::prelude::*;
//! ```
pub use crate::sequences::{Access, NumElems};
