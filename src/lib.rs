//! `range_dict` maps closed key intervals to values.
//!
//! Intervals are kept in a red-black tree whose nodes live in a single array,
//! with indices standing in for the parent/child pointers. Lookups and
//! insertions take O(logN) time.
//!
//! A lookup resolves its key to the stored interval that "matches" it under
//! [`Interval::overlap_cmp`]: for valid intervals, the stored interval that
//! encloses the key or is enclosed by it. Inserting an interval that matches a
//! stored one updates the stored value and leaves the stored bounds as they
//! were. There is no removal.
//!
//! # Example
//!
//! ```rust
//! use range_dict::{Error, Interval, IntervalMap};
//!
//! let mut grades = IntervalMap::new();
//! grades.insert_range(1, 40, "Fail");
//! grades.insert_range(41, 60, "E");
//! grades.insert_point(100, "A+");
//!
//! assert_eq!(grades.get_point(&55), Ok(&"E"));
//! assert_eq!(grades.get(&Interval::new(100, 100)), Ok(&"A+"));
//! assert_eq!(grades.get_point(&80), Err(Error::KeyNotFound));
//! ```
//!

mod error;
mod index;
mod interval;
mod intervalmap;
mod iter;
mod node;


pub use error::{Error, Result};
pub use index::{DefaultIx, IndexType};
pub use interval::Interval;
pub use intervalmap::IntervalMap;
pub use iter::{Iter, Range};
