use std::fmt;

use tracing::{debug, trace, warn};

use crate::bound::{sanitize, Bound};
use crate::error::BadInput;
use crate::interval::Interval;
use crate::iter::{IntoIter, Iter};
use crate::relation::{Classification, Containment, Relation};

/// A set of integers kept as sorted, disjoint and non-touching half-open intervals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeList {
    /// Stored intervals, ascending by low bound
    pub(crate) ranges: Vec<Interval>,
}

impl RangeList {
    /// Create an empty `RangeList`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates a new `RangeList` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    /// Add a raw range `[x, y]` to the list.
    ///
    /// The pair is swapped if descending and rounded to integers first. A pair
    /// that rounds to an empty range is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BadInput`] when `range` is not a pair of finite numbers fitting
    /// in `i64`. The list is left unchanged in that case.
    ///
    /// # Example
    /// ```rust
    /// use range_list::{BadInput, RangeList};
    ///
    /// let mut list = RangeList::new();
    /// list.add(&[1, 5]).unwrap();
    /// list.add(&[10, 20]).unwrap();
    /// list.add(&[20, 21]).unwrap();
    /// assert_eq!(list.render(), "[1, 5) [10, 21)");
    /// assert_eq!(list.add(&[1, 2, 3]), Err(BadInput::Arity { len: 3 }));
    /// ```
    #[inline]
    pub fn add<N: Bound>(&mut self, range: &[N]) -> Result<(), BadInput> {
        if let Some(interval) = Self::sanitize_logged("add", range)? {
            self.add_interval(interval);
        }
        Ok(())
    }

    /// Remove a raw range `[x, y]` from the list.
    ///
    /// Sanitization is the same as for [`RangeList::add`].
    ///
    /// # Errors
    ///
    /// Returns [`BadInput`] when `range` is not a pair of finite numbers fitting
    /// in `i64`. The list is left unchanged in that case.
    ///
    /// # Example
    /// ```rust
    /// use range_list::RangeList;
    ///
    /// let mut list = RangeList::new();
    /// list.add(&[1, 5]).unwrap();
    /// list.add(&[10, 21]).unwrap();
    /// list.remove(&[15, 19]).unwrap();
    /// assert_eq!(list.render(), "[1, 5) [10, 15) [19, 21)");
    /// ```
    #[inline]
    pub fn remove<N: Bound>(&mut self, range: &[N]) -> Result<(), BadInput> {
        if let Some(interval) = Self::sanitize_logged("remove", range)? {
            self.remove_interval(interval);
        }
        Ok(())
    }

    /// Render the list as `[low, high)` items separated by a space.
    ///
    /// # Example
    /// ```rust
    /// use range_list::RangeList;
    ///
    /// let mut list = RangeList::new();
    /// assert_eq!(list.render(), "");
    /// list.add(&[-4, 10]).unwrap();
    /// list.add(&[11, 15]).unwrap();
    /// assert_eq!(list.render(), "[-4, 10) [11, 15)");
    /// ```
    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Add an interval, merging it with every stored interval it overlaps or touches.
    ///
    /// # Example
    /// ```rust
    /// use range_list::{Interval, RangeList};
    ///
    /// let mut list = RangeList::new();
    /// list.add_interval(Interval::new(1, 5));
    /// list.add_interval(Interval::new(10, 21));
    /// list.add_interval(Interval::new(0, 6));
    /// assert_eq!(list.as_slice(), &[Interval::new(0, 6), Interval::new(10, 21)]);
    /// ```
    pub fn add_interval(&mut self, interval: Interval) {
        debug!(low = interval.low, high = interval.high, "add");
        if self.ranges.is_empty() {
            self.ranges.push(interval);
            return;
        }

        let relations = Classification::new(&interval, &self.ranges);
        if relations.first() == Some(Relation::LeftOf) {
            trace!("prepend");
            self.ranges.insert(0, interval);
            return;
        }
        if relations.last() == Some(Relation::RightOf) {
            trace!("append");
            self.ranges.push(interval);
            return;
        }
        if relations.all_contained(Containment::Engulfs) {
            trace!("engulfs every stored interval");
            self.ranges.clear();
            self.ranges.push(interval);
            return;
        }
        if let Some(idx) = relations.gap() {
            trace!(idx, "insert into gap");
            self.ranges.insert(idx, interval);
            return;
        }
        match relations.single() {
            Some((idx, Relation::Contained(Containment::Engulfs))) => {
                trace!(idx, "replace engulfed interval");
                self.ranges[idx] = interval;
                return;
            }
            Some((idx, Relation::Contained(Containment::Within))) => {
                trace!(idx, "already covered");
                return;
            }
            _ => {}
        }

        let Some((lower, upper)) = relations.intersection() else {
            return;
        };
        let merged = Interval {
            low: interval.low.min(self.ranges[lower].low),
            high: interval.high.max(self.ranges[upper].high),
        };
        trace!(lower, upper, %merged, "merge");
        self.ranges[lower] = merged;
        let _ignore = self.ranges.drain(lower + 1..=upper);
    }

    /// Remove an interval, truncating or splitting the stored intervals it overlaps.
    ///
    /// # Example
    /// ```rust
    /// use range_list::{Interval, RangeList};
    ///
    /// let mut list: RangeList = [Interval::new(-4, 10), Interval::new(11, 21)]
    ///     .into_iter()
    ///     .collect();
    /// list.remove_interval(Interval::new(3, 19));
    /// assert_eq!(list.as_slice(), &[Interval::new(-4, 3), Interval::new(19, 21)]);
    /// ```
    pub fn remove_interval(&mut self, interval: Interval) {
        debug!(low = interval.low, high = interval.high, "remove");
        if self.ranges.is_empty() {
            return;
        }

        let relations = Classification::new(&interval, &self.ranges);
        if relations.first() == Some(Relation::LeftOf)
            || relations.last() == Some(Relation::RightOf)
        {
            trace!("outside of stored intervals");
            return;
        }
        if relations.all_contained(Containment::Engulfs) {
            trace!("engulfs every stored interval");
            self.ranges.clear();
            return;
        }
        if relations.gap().is_some() {
            trace!("falls into a gap");
            return;
        }
        if let Some((idx, Relation::Contained(Containment::Within))) = relations.single() {
            let stored = self.ranges[idx];
            trace!(idx, %stored, "split");
            let _ignore = self.ranges.splice(
                idx..=idx,
                [
                    Interval {
                        low: stored.low,
                        high: interval.low,
                    },
                    Interval {
                        low: interval.high,
                        high: stored.high,
                    },
                ],
            );
            return;
        }

        let Some((lower, upper)) = relations.intersection() else {
            return;
        };
        // Only the outermost touched intervals can keep a piece, and a piece
        // may be empty when the removed interval reaches past its bound.
        let head = Interval::try_new(self.ranges[lower].low, interval.low);
        let tail = Interval::try_new(interval.high, self.ranges[upper].high);
        trace!(lower, upper, "truncate");
        let _ignore = self
            .ranges
            .splice(lower..=upper, head.into_iter().chain(tail));
    }

    /// Check if `value` is covered by one of the stored intervals.
    ///
    /// # Example
    /// ```rust
    /// use range_list::RangeList;
    ///
    /// let mut list = RangeList::new();
    /// list.add(&[1, 5]).unwrap();
    /// assert!(list.contains(1));
    /// assert!(list.contains(4));
    /// assert!(!list.contains(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        let idx = self.ranges.partition_point(|r| r.high <= value);
        self.ranges.get(idx).is_some_and(|r| r.contains(value))
    }

    /// Number of integers covered by the list.
    #[inline]
    #[must_use]
    pub fn covered_len(&self) -> u128 {
        self.ranges.iter().map(|r| u128::from(r.width())).sum()
    }

    /// Get an iterator over the stored intervals, ascending.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.ranges.iter(),
        }
    }

    /// The stored intervals, ascending.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.ranges
    }

    /// The lowest stored interval.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Interval> {
        self.ranges.first()
    }

    /// The highest stored interval.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Interval> {
        self.ranges.last()
    }

    /// Remove all intervals from the list
    #[inline]
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Return the number of stored intervals.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Return `true` if the list covers no integer.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sanitize `range`, logging the outcome for operation `op`.
    fn sanitize_logged<N: Bound>(op: &str, range: &[N]) -> Result<Option<Interval>, BadInput> {
        match sanitize(range) {
            Ok(None) => {
                debug!(op, "empty range ignored");
                Ok(None)
            }
            Ok(interval) => Ok(interval),
            Err(err) => {
                warn!(op, %err, "range rejected");
                Err(err)
            }
        }
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.ranges.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for interval in iter {
                write!(f, " {interval}")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<Interval> for RangeList {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut list = RangeList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Interval> for RangeList {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a Interval;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RangeList {
    type Item = Interval;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.ranges.into_iter(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RangeList;
    use crate::interval::Interval;

    impl Serialize for RangeList {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(&self.ranges)
        }
    }

    impl<'de> Deserialize<'de> for RangeList {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let ranges = Vec::<Interval>::deserialize(deserializer)?;
            Ok(ranges.into_iter().collect())
        }
    }
}
