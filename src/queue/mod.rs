//! The priority queue.
mod entry;
mod iter;

use std::fmt;

use fastqueue_core::util::Counter;
use fastqueue_core::{KeyedHeap, Priority};

use crate::prelude::*;
use crate::types::{ExtractFlags, Extracted, QueueConfig};

pub(crate) use self::entry::EntryKey;
pub use self::iter::*;

/// A max-priority queue that is stable among equal priorities: entries with the same priority are
/// extracted in the order they were inserted.
///
/// Entries can be inspected without removing them through [`PriorityQueue::iter`], which yields
/// the entries in extraction order and leaves the queue untouched. The shape of the values
/// returned by extraction and iteration is controlled by the [`ExtractFlags`] of the queue.
///
/// # Example
/// ```
/// # use fastqueue::*;
/// let mut queue = PriorityQueue::new();
/// queue.insert("low", 1);
/// queue.insert("high", 10);
/// queue.insert("also low", 1);
///
/// assert_eq!(queue.extract(), Some(Extracted::Data("high")));
/// assert_eq!(queue.extract(), Some(Extracted::Data("low")));
/// assert_eq!(queue.extract(), Some(Extracted::Data("also low")));
/// assert_eq!(queue.extract(), None);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, P = i64> {
    pub(crate) heap: KeyedHeap<EntryKey<P>, T>,
    pub(crate) serial: i64,
    pub(crate) flags: ExtractFlags,
}

impl<T, P> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: KeyedHeap::new(),
            serial: 0,
            flags: default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: KeyedHeap::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            flags: config.extract_flags,
            ..Self::with_capacity(config.capacity)
        }
    }

    /// Number of entries in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn extract_flags(&self) -> ExtractFlags {
        self.flags
    }

    pub fn set_extract_flags(&mut self, flags: ExtractFlags) {
        if flags != self.flags {
            debug!("extract flags changed from {} to {}", self.flags, flags);
        }

        self.flags = flags;
    }

    /// Set the extract flags from their raw numeric value. Any value other than 1 (data),
    /// 2 (priority) or 3 (both) is rejected and the current flags are kept.
    pub fn set_extract_flags_raw(&mut self, flags: u8) -> Result {
        let flags = ExtractFlags::from_raw(flags)?;
        self.set_extract_flags(flags);
        Ok(())
    }

    /// Remove all entries. The extract flags are kept.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Priority> PriorityQueue<T, P> {
    pub fn insert(&mut self, data: T, priority: P) {
        let serial = self.serial.get_and_decrement();
        trace!("insert entry {} with priority {:?}", serial, priority);

        self.heap.push(EntryKey { priority, serial }, data);
    }

    /// Remove the entry with the highest priority and return it, shaped according to the extract
    /// flags. Among entries of equal priority, the one inserted first is returned. Returns `None`
    /// if the queue is empty.
    pub fn extract(&mut self) -> Option<Extracted<T, P>> {
        let (key, data) = self.heap.pop()?;
        trace!("extract entry {} with priority {:?}", key.serial, key.priority);

        Some(self.flags.shape(data, key.priority))
    }

    /// The entry that [`extract`](Self::extract) would return next, without removing it.
    pub fn peek(&self) -> Option<Extracted<&T, P>> {
        let (key, data) = self.heap.peek()?;
        Some(self.flags.shape(data, key.priority))
    }

    /// Iterate over the entries in extraction order without removing them.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(self)
    }

    /// Explicit cursor over the entries in extraction order, see [`Cursor`].
    pub fn cursor(&self) -> Cursor<'_, T, P> {
        Cursor::new(self)
    }

    /// All entries in extraction order, shaped according to the extract flags. The queue is left
    /// unchanged.
    pub fn to_vec(&self) -> Vec<Extracted<T, P>>
    where
        T: Clone,
    {
        self.iter().map(Extracted::cloned).collect()
    }

    pub fn has_priority(&self, priority: P) -> bool {
        any(self.heap.iter_unordered(), |(key, _)| {
            key.priority.total_eq(&priority)
        })
    }

    pub fn contains<Q>(&self, data: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        any(self.heap.iter_unordered(), |(_, d)| d == data)
    }

    /// Remove one entry equal to `data`. If several entries match, the one that would be
    /// extracted first is removed. Returns `false` if there was no such entry.
    pub fn remove<Q>(&mut self, data: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let index = match self.heap.find(|_, d| d == data) {
            Some(index) => index,
            None => return false,
        };

        if let Some((key, _)) = self.heap.remove_at(index) {
            trace!("removed entry {} with priority {:?}", key.serial, key.priority);
        }

        true
    }
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Priority> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("flags", &self.flags)
            .field(
                "entries",
                &self
                    .heap
                    .ordered()
                    .map(|(key, data)| (data, key.priority))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T, P: Priority> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (data, priority) in iter {
            self.insert(data, priority);
        }
    }
}

impl<T, P: Priority> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
