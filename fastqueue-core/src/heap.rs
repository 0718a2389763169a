//! Binary max-heap over an explicit key, with positional removal and non-destructive ordered
//! traversal.
//!
//! `std::collections::BinaryHeap` does not expose the positions of its elements, so removing an
//! arbitrary element or walking the heap in order without draining it is not possible there. This
//! heap keeps the same layout (0-indexed, children of `i` at `2i+1` and `2i+2`) but makes the
//! storage available to the traversal below.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
}

#[derive(Clone)]
pub struct KeyedHeap<K, V> {
    nodes: Vec<Node<K, V>>,
}

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
fn left(index: usize) -> usize {
    2 * index + 1
}

impl<K, V> KeyedHeap<K, V> {
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// The greatest entry, if any.
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.nodes.first().map(|n| (&n.key, &n.value))
    }

    /// Iterate over the entries in storage order, which is *not* the order of `pop`.
    pub fn iter_unordered(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.nodes.iter().map(|n| (&n.key, &n.value))
    }
}

impl<K: Ord, V> KeyedHeap<K, V> {
    /// Build a heap from entries in any order in `O(n)` time. Entries that are already sorted
    /// greatest first form a valid heap and are left where they are.
    pub fn from_vec(entries: Vec<(K, V)>) -> Self {
        let mut heap = Self {
            nodes: entries
                .into_iter()
                .map(|(key, value)| Node { key, value })
                .collect(),
        };

        for index in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(index);
        }

        heap
    }

    pub fn push(&mut self, key: K, value: V) {
        self.nodes.push(Node { key, value });
        self.sift_up(self.nodes.len() - 1);
    }

    pub fn pop(&mut self) -> Option<(K, V)> {
        self.remove_at(0)
    }

    /// Remove the entry at storage position `index`. The last entry takes its place and is moved
    /// up or down, whichever restores the heap property.
    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        if index >= self.nodes.len() {
            return None;
        }

        let Node { key, value } = self.nodes.swap_remove(index);

        if index < self.nodes.len() {
            let index = self.sift_up(index);
            self.sift_down(index);
        }

        Some((key, value))
    }

    /// Storage position of the greatest entry for which `pred` returns true. This is the entry
    /// among the matches that `pop` would return first.
    pub fn find<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut best: Option<usize> = None;

        for (index, node) in self.nodes.iter().enumerate() {
            if !pred(&node.key, &node.value) {
                continue;
            }

            match best {
                Some(b) if self.nodes[b].key >= node.key => {}
                _ => best = Some(index),
            }
        }

        best
    }

    /// Walk the entries in the order in which `pop` would return them, without modifying the heap.
    /// For equal keys only the key sequence is guaranteed to match, not which value comes first.
    pub fn ordered(&self) -> Ordered<'_, K, V> {
        let mut frontier = BinaryHeap::new();
        if !self.nodes.is_empty() {
            frontier.push(Frontier {
                nodes: &self.nodes,
                index: 0,
            });
        }

        Ordered {
            nodes: &self.nodes,
            frontier,
            remaining: self.nodes.len(),
        }
    }

    /// Consume the heap and return all entries, greatest first.
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        let mut nodes = self.nodes;
        nodes.sort_by(|a, b| b.key.cmp(&a.key));
        nodes.into_iter().map(|n| (n.key, n.value)).collect()
    }

    /// Check that no entry is greater than its parent.
    pub fn check_integrity(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[parent(i)].key >= self.nodes[i].key)
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let p = parent(index);
            if self.nodes[index].key <= self.nodes[p].key {
                break;
            }

            self.nodes.swap(index, p);
            index = p;
        }

        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();

        loop {
            let l = left(index);
            let r = l + 1;
            let mut largest = index;

            if l < len && self.nodes[l].key > self.nodes[largest].key {
                largest = l;
            }
            if r < len && self.nodes[r].key > self.nodes[largest].key {
                largest = r;
            }

            if largest == index {
                break;
            }

            self.nodes.swap(index, largest);
            index = largest;
        }
    }
}

impl<K, V> Default for KeyedHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyedHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_unordered()).finish()
    }
}

// Storage position ordered by the key stored at that position. Note that positions never move
// while an `Ordered` is alive since it borrows the heap.
struct Frontier<'a, K, V> {
    nodes: &'a [Node<K, V>],
    index: usize,
}

impl<K: Ord, V> Frontier<'_, K, V> {
    fn key(&self) -> &K {
        &self.nodes[self.index].key
    }
}

impl<K: Ord, V> Ord for Frontier<'_, K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.key(), other.key())
    }
}

impl<K: Ord, V> PartialOrd for Frontier<'_, K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl<K: Ord, V> Eq for Frontier<'_, K, V> {}
impl<K: Ord, V> PartialEq for Frontier<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Lazy in-order traversal of a [`KeyedHeap`].
///
/// The root is the greatest entry. After an entry has been yielded, its children become
/// candidates for the next one. The candidates are kept in a small auxiliary heap, so yielding the
/// first `k` entries takes `O(k log k)` time, independent of the size of the heap.
pub struct Ordered<'a, K, V> {
    nodes: &'a [Node<K, V>],
    frontier: BinaryHeap<Frontier<'a, K, V>>,
    remaining: usize,
}

impl<'a, K: Ord, V> Iterator for Ordered<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.frontier.pop()?.index;
        let nodes = self.nodes;
        self.remaining -= 1;

        for child in [left(index), left(index) + 1].iter().copied() {
            if child < nodes.len() {
                self.frontier.push(Frontier {
                    nodes,
                    index: child,
                });
            }
        }

        let node = &nodes[index];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord, V> ExactSizeIterator for Ordered<'_, K, V> {}
