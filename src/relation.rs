//! Relations between an incoming interval and the intervals already stored.
//!
//! Both `add` and `remove` classify the incoming interval against every stored
//! interval once, then pick a branch by looking at the resulting sequence.

use crate::interval::Interval;

/// Direction of a strict containment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Containment {
    /// The incoming interval lies strictly inside the stored one
    Within,
    /// The incoming interval strictly contains the stored one
    Engulfs,
}

/// How an incoming interval relates to one stored interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Relation {
    /// Entirely past the stored interval, not touching it
    RightOf,
    /// Entirely before the stored interval, not touching it
    LeftOf,
    /// Strict containment in either direction
    Contained(Containment),
    /// The stored upper bound falls within [low, high]
    OverlapsUpper,
    /// The stored lower bound falls within [low, high]
    OverlapsLower,
}

impl Relation {
    /// Whether the incoming interval overlaps or shares an endpoint with the stored one
    #[inline]
    pub(crate) fn touches(self) -> bool {
        match self {
            Relation::RightOf | Relation::LeftOf => false,
            Relation::Contained(_) | Relation::OverlapsUpper | Relation::OverlapsLower => true,
        }
    }
}

/// The relations of one incoming interval against a whole sorted set, in set order.
///
/// On a sorted, minimal set the `RightOf` entries form a prefix and the `LeftOf`
/// entries a suffix. Everything in between touches the incoming interval.
#[derive(Debug)]
pub(crate) struct Classification {
    /// One relation per stored interval
    relations: Vec<Relation>,
}

impl Classification {
    /// Classify `incoming` against each of `stored`.
    pub(crate) fn new(incoming: &Interval, stored: &[Interval]) -> Self {
        Self {
            relations: stored.iter().map(|s| incoming.classify(s)).collect(),
        }
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<Relation> {
        self.relations.first().copied()
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<Relation> {
        self.relations.last().copied()
    }

    /// Whether every stored interval is in the given containment with the incoming one
    pub(crate) fn all_contained(&self, containment: Containment) -> bool {
        !self.relations.is_empty()
            && self
                .relations
                .iter()
                .all(|&r| r == Relation::Contained(containment))
    }

    /// Index at which the incoming interval slots between two stored intervals
    /// without touching either of them.
    pub(crate) fn gap(&self) -> Option<usize> {
        self.relations
            .windows(2)
            .position(|w| matches!(w, [Relation::RightOf, Relation::LeftOf]))
            .map(|i| i + 1)
    }

    /// First and last index of the stored intervals touching the incoming one.
    ///
    /// The upper point is found scanning forward from the lower one for as long
    /// as the relations keep touching.
    pub(crate) fn intersection(&self) -> Option<(usize, usize)> {
        let lower = self.relations.iter().position(|r| r.touches())?;
        let run = self.relations[lower..]
            .iter()
            .take_while(|r| r.touches())
            .count();
        Some((lower, lower + run - 1))
    }

    /// The single stored interval touching the incoming one, if it is the only one
    pub(crate) fn single(&self) -> Option<(usize, Relation)> {
        match self.intersection()? {
            (lower, upper) if lower == upper => Some((lower, self.relations[lower])),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs.iter().map(|&(l, h)| Interval::new(l, h)).collect()
    }

    #[test]
    fn touching_run_is_contiguous() {
        let stored = set(&[(1, 3), (5, 6), (7, 10), (20, 30)]);
        let c = Classification::new(&Interval::new(2, 8), &stored);
        assert_eq!(
            c.relations,
            vec![
                Relation::OverlapsUpper,
                Relation::Contained(Containment::Engulfs),
                Relation::OverlapsLower,
                Relation::LeftOf,
            ]
        );
        assert_eq!(c.intersection(), Some((0, 2)));
        assert_eq!(c.single(), None);
        assert_eq!(c.gap(), None);
    }

    #[test]
    fn gap_is_found_between_neighbours() {
        let stored = set(&[(1, 5), (10, 21)]);
        let c = Classification::new(&Interval::new(6, 9), &stored);
        assert_eq!(c.gap(), Some(1));
        assert_eq!(c.intersection(), None);
    }

    #[test]
    fn all_contained_needs_every_entry() {
        let stored = set(&[(1, 5), (10, 21)]);
        let all = Classification::new(&Interval::new(-1, 30), &stored);
        assert!(all.all_contained(Containment::Engulfs));
        let some = Classification::new(&Interval::new(0, 6), &stored);
        assert!(!some.all_contained(Containment::Engulfs));
        let none = Classification::new(&Interval::new(0, 6), &[]);
        assert!(!none.all_contained(Containment::Engulfs));
    }

    #[test]
    fn single_reports_its_relation() {
        let stored = set(&[(1, 5), (10, 21)]);
        let c = Classification::new(&Interval::new(15, 19), &stored);
        assert_eq!(
            c.single(),
            Some((1, Relation::Contained(Containment::Within)))
        );
    }
}
