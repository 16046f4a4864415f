use std::iter::FusedIterator;
use std::{slice, vec};

use crate::interval::Interval;

/// An iterator over the intervals of a `RangeList`, ascending.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    pub(crate) inner: slice::Iter<'a, Interval>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Interval;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An into iterator over the intervals of a `RangeList`, ascending.
#[derive(Debug)]
pub struct IntoIter {
    pub(crate) inner: vec::IntoIter<Interval>,
}

impl Iterator for IntoIter {
    type Item = Interval;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
