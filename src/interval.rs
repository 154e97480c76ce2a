//! The `Interval` stored in `IntervalMap` represents the closed range [min, max].
//!
//! Two orderings exist for intervals:
//! - the derived `Ord`, lexicographic on `(min, max)`, which is total and only
//!   there so callers can sort intervals;
//! - [`Interval::overlap_cmp`], which the map uses. It reports `Less` or
//!   `Greater` only when *both* bounds agree, and `Equal` otherwise. With
//!   `Interval<u32>`:
//!   - [1,4] < [5,9], because 1<5 and 4<9
//!   - [1,4] < [2,9], because 1<2 and 4<9, even though they overlap
//!   - [1,9] == [2,4], because 1<2 but 9>4
//!
//! `overlap_cmp` is not transitive on arbitrary intervals, so it is never
//! exposed as `Ord`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// The interval stored in `IntervalMap` represents [min, max]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    /// Lower bound, inclusive
    pub min: T,
    /// Upper bound, inclusive
    pub max: T,
}

impl<T> Interval<T> {
    /// Create a new `Interval` without checking its bounds.
    ///
    /// An interval with `min > max` is accepted here and by `IntervalMap::insert`.
    /// Use [`Interval::try_new`] to reject it.
    #[inline]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Clone> Interval<T> {
    /// Create the degenerate interval [key, key].
    ///
    /// # Example
    /// ```rust
    /// use range_dict::Interval;
    ///
    /// assert_eq!(Interval::point(7), Interval::new(7, 7));
    /// ```
    #[inline]
    pub fn point(key: T) -> Self {
        Self {
            min: key.clone(),
            max: key,
        }
    }
}

impl<T: Ord> Interval<T> {
    /// Create a new `Interval`, failing when `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the bounds are inverted.
    ///
    /// # Example
    /// ```rust
    /// use range_dict::{Error, Interval};
    ///
    /// assert!(Interval::try_new(1, 1).is_ok());
    /// assert_eq!(Interval::try_new(3, 1), Err(Error::InvalidInterval));
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Result<Self> {
        let interval = Self::new(min, max);
        if interval.is_valid() {
            Ok(interval)
        } else {
            Err(Error::InvalidInterval)
        }
    }

    /// Checks that `min <= max`
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Compares with another interval, reporting `Equal` unless both bounds
    /// are ordered the same way.
    ///
    /// # Example
    /// ```rust
    /// use std::cmp::Ordering;
    /// use range_dict::Interval;
    ///
    /// assert_eq!(Interval::new(1, 4).overlap_cmp(&Interval::new(5, 9)), Ordering::Less);
    /// assert_eq!(Interval::new(5, 9).overlap_cmp(&Interval::new(1, 4)), Ordering::Greater);
    /// assert_eq!(Interval::new(1, 9).overlap_cmp(&Interval::new(2, 4)), Ordering::Equal);
    /// ```
    #[inline]
    pub fn overlap_cmp(&self, other: &Self) -> Ordering {
        match (self.min.cmp(&other.min), self.max.cmp(&other.max)) {
            (Ordering::Less, Ordering::Less) => Ordering::Less,
            (Ordering::Greater, Ordering::Greater) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Locates a point relative to the interval: `Less` if the interval lies
    /// entirely before `point`, `Greater` if entirely after, `Equal` if it
    /// contains it.
    #[inline]
    pub fn cmp_point(&self, point: &T) -> Ordering {
        if &self.max < point {
            Ordering::Less
        } else if &self.min > point {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Checks if `point` lies within [min, max]
    #[inline]
    pub fn contains_point(&self, point: &T) -> bool {
        self.cmp_point(point) == Ordering::Equal
    }

    /// Checks if self encloses other, bounds inclusive
    ///
    /// # Example
    /// ```rust
    /// use range_dict::Interval;
    ///
    /// assert!(Interval::new(1, 10).contains(&Interval::new(2, 5)));
    /// assert!(!Interval::new(1, 10).contains(&Interval::new(0, 5)));
    /// ```
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Checks if self overlaps with other interval
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self { min, max }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}
