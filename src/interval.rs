//! The `Interval` stored in `RangeList` and represents the integer range [low, high)
//!
//! Intervals are ordered by `low` first and `high` second, so with a `RangeList`
//! holding only disjoint intervals this is the same as ordering by `low`:
//! - [1,4)<[6,9), because 1<6
//!
//! Only half-open intervals over `i64` are supported, i.e., [...,...).

use std::fmt;

use crate::relation::{Containment, Relation};

/// The interval stored in `RangeList` represents [low, high)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Interval {
    /// Low value, included
    pub low: i64,
    /// High value, excluded
    pub high: i64,
}

impl Interval {
    /// Create a new `Interval`
    ///
    /// # Panics
    ///
    /// This method panics when low >= high
    #[inline]
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        assert!(low < high, "invalid range");
        Self { low, high }
    }

    /// Create a new `Interval`, returning `None` when the range would be empty
    ///
    /// # Example
    /// ```rust
    /// use range_list::Interval;
    ///
    /// assert_eq!(Interval::try_new(1, 5), Some(Interval::new(1, 5)));
    /// assert_eq!(Interval::try_new(5, 5), None);
    /// assert_eq!(Interval::try_new(6, 5), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn try_new(low: i64, high: i64) -> Option<Self> {
        (low < high).then_some(Self { low, high })
    }

    /// Number of integers in the interval
    #[inline]
    #[must_use]
    pub fn width(&self) -> u64 {
        self.high.abs_diff(self.low)
    }

    /// Checks if `value` lies in [low, high)
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value < self.high
    }

    /// Checks if self overlaps with other interval
    #[inline]
    #[must_use]
    pub fn overlap(&self, other: &Self) -> bool {
        self.high > other.low && other.high > self.low
    }

    /// Checks if self overlaps or shares an endpoint with other interval,
    /// i.e. whether the two could be merged into one
    #[inline]
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.high >= other.low && other.high >= self.low
    }

    /// Classify how `self`, an incoming interval, relates to a `stored` one.
    ///
    /// Strict containment wins over the edge overlaps, so an incoming interval
    /// sharing an endpoint with `stored` is reported as an edge overlap.
    pub(crate) fn classify(&self, stored: &Self) -> Relation {
        let (lo, hi) = (self.low, self.high);
        let (r0, r1) = (stored.low, stored.high);
        if lo > r0 && hi < r1 {
            Relation::Contained(Containment::Within)
        } else if r0 > lo && r1 < hi {
            Relation::Contained(Containment::Engulfs)
        } else if lo > r1 {
            Relation::RightOf
        } else if hi < r0 {
            Relation::LeftOf
        } else if r1 <= hi {
            // lo <= r1 holds here, so r1 lies in [lo, hi]
            Relation::OverlapsUpper
        } else {
            // r1 > hi and not within, so r0 lies in [lo, hi]
            Relation::OverlapsLower
        }
    }
}

impl fmt::Display for Interval {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Interval;

    impl Serialize for Interval {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            (self.low, self.high).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Interval {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let (low, high) = <(i64, i64)>::deserialize(deserializer)?;
            Interval::try_new(low, high).ok_or_else(|| {
                D::Error::custom(format_args!("invalid range [{low}, {high})"))
            })
        }
    }
}
