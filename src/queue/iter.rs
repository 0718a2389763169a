use std::iter::FusedIterator;
use std::vec;

use fastqueue_core::heap::Ordered;
use fastqueue_core::Priority;

use super::{EntryKey, PriorityQueue};
use crate::types::{ExtractFlags, Extracted};

/// Non-destructive iterator over the entries of a [`PriorityQueue`] in extraction order.
///
/// Created by [`PriorityQueue::iter`]. The queue is borrowed, not drained: iterating again yields
/// the same sequence.
pub struct Iter<'a, T, P> {
    inner: Ordered<'a, EntryKey<P>, T>,
    flags: ExtractFlags,
}

impl<'a, T, P: Priority> Iter<'a, T, P> {
    pub(super) fn new(queue: &'a PriorityQueue<T, P>) -> Self {
        Self {
            inner: queue.heap.ordered(),
            flags: queue.flags,
        }
    }
}

impl<'a, T, P: Priority> Iterator for Iter<'a, T, P> {
    type Item = Extracted<&'a T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, data) = self.inner.next()?;
        Some(self.flags.shape(data, key.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P: Priority> ExactSizeIterator for Iter<'_, T, P> {}
impl<T, P: Priority> FusedIterator for Iter<'_, T, P> {}

impl<'a, T, P: Priority> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = Extracted<&'a T, P>;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator that yields the entries of a [`PriorityQueue`] in extraction order.
pub struct IntoIter<T, P> {
    inner: vec::IntoIter<(EntryKey<P>, T)>,
    flags: ExtractFlags,
}

impl<T, P> Iterator for IntoIter<T, P> {
    type Item = Extracted<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, data) = self.inner.next()?;
        Some(self.flags.shape(data, key.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> ExactSizeIterator for IntoIter<T, P> {}
impl<T, P> FusedIterator for IntoIter<T, P> {}

impl<T, P: Priority> IntoIterator for PriorityQueue<T, P> {
    type Item = Extracted<T, P>;
    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.heap.into_sorted_vec().into_iter(),
            flags: self.flags,
        }
    }
}

/// Explicit cursor over a [`PriorityQueue`], for callers that drive the iteration themselves.
///
/// The cursor starts at the first entry. [`key`](Cursor::key) is the logical index of the current
/// entry in extraction order, [`advance`](Cursor::advance) moves to the next entry and
/// [`rewind`](Cursor::rewind) returns to the first one. None of these operations modify the queue,
/// and all of them are valid on an empty queue.
///
/// # Example
/// ```
/// # use fastqueue::*;
/// let queue: PriorityQueue<_> = vec![("b", 1), ("a", 2)].into_iter().collect();
/// let mut cursor = queue.cursor();
///
/// while cursor.valid() {
///     println!("{}: {:?}", cursor.key(), cursor.current());
///     cursor.advance();
/// }
///
/// cursor.rewind();
/// assert_eq!(cursor.key(), 0);
/// assert_eq!(cursor.current(), Some(Extracted::Data(&"a")));
/// ```
pub struct Cursor<'a, T, P> {
    queue: &'a PriorityQueue<T, P>,
    iter: Iter<'a, T, P>,
    current: Option<Extracted<&'a T, P>>,
    index: usize,
}

impl<'a, T, P: Priority> Cursor<'a, T, P> {
    pub(super) fn new(queue: &'a PriorityQueue<T, P>) -> Self {
        let mut iter = queue.iter();
        let current = iter.next();

        Self {
            queue,
            iter,
            current,
            index: 0,
        }
    }

    pub fn rewind(&mut self) {
        *self = Self::new(self.queue);
    }

    /// Returns true if the cursor points at an entry.
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn key(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<Extracted<&'a T, P>> {
        self.current
    }

    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
            self.index += 1;
        }
    }
}
