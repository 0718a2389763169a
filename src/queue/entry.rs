use std::cmp::Ordering;

use fastqueue_core::Priority;

/// Ordering key of an entry: its priority, with ties broken by insertion serial.
///
/// Serials are handed out in decreasing order, so among equal priorities the entry inserted first
/// has the greatest key and leaves the max-heap first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryKey<P> {
    pub(crate) priority: P,
    pub(crate) serial: i64,
}

impl<P: Priority> Ord for EntryKey<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.serial.cmp(&other.serial))
    }
}

impl<P: Priority> PartialOrd for EntryKey<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl<P: Priority> Eq for EntryKey<P> {}
impl<P: Priority> PartialEq for EntryKey<P> {
    fn eq(&self, other: &Self) -> bool {
        Ord::cmp(self, other) == Ordering::Equal
    }
}
