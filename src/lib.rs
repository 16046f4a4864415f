//! `range_list` keeps a set of integers as a list of half-open ranges.
//!
//! The ranges are always normalized: sorted by low bound, pairwise disjoint and
//! minimal, so two ranges that overlap or merely touch are merged into one.
//! Adding or removing a range classifies it once against every stored range and
//! then rewrites the affected part of the list in a single pass, which keeps
//! each modification linear in the number of stored ranges.
//!
//! Raw ranges are given as a pair `[x, y]` of any primitive number. They are
//! swapped if descending and rounded to integers; anything that is not a pair of
//! finite numbers is rejected with [`BadInput`] and leaves the list untouched.
//!
//! # Example
//!
//! ```rust
//! use range_list::RangeList;
//!
//! let mut list = RangeList::new();
//! list.add(&[1, 5]).unwrap();
//! list.add(&[10, 20]).unwrap();
//! list.add(&[20, 20]).unwrap();
//! assert_eq!(list.render(), "[1, 5) [10, 20)");
//! list.remove(&[10, 11]).unwrap();
//! assert_eq!(list.render(), "[1, 5) [11, 20)");
//! ```
//!

mod bound;
mod error;
mod interval;
mod iter;
mod rangelist;
mod relation;


pub use bound::Bound;
pub use error::BadInput;
pub use interval::Interval;
pub use iter::{IntoIter, Iter};
pub use rangelist::RangeList;
