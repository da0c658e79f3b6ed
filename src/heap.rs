//! Comparator-driven binary heap
//!
//! An array-backed binary heap storing `(key, priority)` entries. The position
//! of an entry is decided by an injected [`HeapOrder`] over priorities; keys
//! are opaque payloads compared only by equality in [`Heap::contains_key`].
//!
//! The storage is a complete binary tree laid out in a `Vec`: the node at
//! index `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`. After every operation no child precedes its parent.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `push`          | O(log n)   |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//! | `contains_key`  | O(n)       |
//! | `from_entries`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use comparator_heaps::heap::{Heap, MaxHeap};
//!
//! let mut heap: MaxHeap<i32, i32> = MaxHeap::default();
//! heap.push(1, 11);
//! heap.push(2, 12);
//! heap.push(3, 13);
//!
//! assert_eq!(heap.next_key(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(13));
//! assert_eq!(heap.peek(), Ok(&12));
//!
//! // Any predicate over priorities can drive the order
//! let mut by_len = Heap::new(|a: &String, b: &String| a.len() > b.len());
//! by_len.push("short", "ab".to_string());
//! by_len.push("long", "abcdef".to_string());
//! assert_eq!(by_len.next_key(), Ok(&"long"));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::traits::{EmptyError, HeapOrder, MaxOrder, MinOrder};

/// A single heap slot: an opaque key and the priority that positions it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, P> {
    /// Caller-supplied payload, compared by equality only
    pub key: K,
    /// Value ranked by the heap's order
    pub priority: P,
}

impl<K, P> Entry<K, P> {
    /// Creates a new entry
    pub fn new(key: K, priority: P) -> Self {
        Self { key, priority }
    }
}

impl<K, P> From<(K, P)> for Entry<K, P> {
    fn from((key, priority): (K, P)) -> Self {
        Self { key, priority }
    }
}

/// A binary heap ordered by an injected [`HeapOrder`]
///
/// The order is fixed at construction and never replaced. Entries whose
/// priority `precedes` all others are nearest the root; ties are broken
/// arbitrarily.
#[derive(Clone)]
pub struct Heap<K, P, O> {
    /// Complete binary tree in level order
    storage: Vec<Entry<K, P>>,
    order: O,
}

/// Heap keeping the largest priority at the root
pub type MaxHeap<K, P> = Heap<K, P, MaxOrder>;

/// Heap keeping the smallest priority at the root
pub type MinHeap<K, P> = Heap<K, P, MinOrder>;

impl<K, P, O: HeapOrder<P>> Heap<K, P, O> {
    /// Creates an empty heap arranged by `order`
    pub fn new(order: O) -> Self {
        Self {
            storage: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from an initial collection of `(key, priority)` pairs
    ///
    /// Entries are stored in iteration order and the heap property is then
    /// restored bottom-up, sifting down from the last internal node to the
    /// root. This runs in O(n), unlike n successive pushes.
    pub fn from_entries<I>(order: O, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
    {
        let storage: Vec<Entry<K, P>> = entries.into_iter().map(Entry::from).collect();
        let mut heap = Self { storage, order };
        heap.heapify();
        heap
    }

    /// Returns the order this heap was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of entries in the heap
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Inserts `key` with `priority`
    ///
    /// The heap is unbounded, so this always succeeds and returns `true`.
    pub fn push(&mut self, key: K, priority: P) -> bool {
        self.storage.push(Entry { key, priority });
        self.sift_up(self.storage.len() - 1);
        true
    }

    /// Removes the root entry and returns its priority
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn pop(&mut self) -> Result<P, EmptyError> {
        self.pop_entry().map(|entry| entry.priority)
    }

    /// Removes the root entry and returns it whole
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn pop_entry(&mut self) -> Result<Entry<K, P>, EmptyError> {
        if self.storage.is_empty() {
            return Err(EmptyError);
        }

        // Move the last leaf into the root slot, then repair downward
        let root = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Returns the root priority without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn peek(&self) -> Result<&P, EmptyError> {
        self.peek_entry().map(|entry| &entry.priority)
    }

    /// Alias of [`peek`](Self::peek)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Result<&P, EmptyError> {
        self.peek()
    }

    /// Returns the key of the root entry without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn next_key(&self) -> Result<&K, EmptyError> {
        self.peek_entry().map(|entry| &entry.key)
    }

    /// Returns the root entry without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn peek_entry(&self) -> Result<&Entry<K, P>, EmptyError> {
        self.storage.first().ok_or(EmptyError)
    }

    /// Returns true if any entry holds a key equal to `key`
    ///
    /// This is a linear scan.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.storage.iter().any(|entry| entry.key == *key)
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        debug!("clearing heap of {} entries", self.storage.len());
        self.storage.clear();
    }

    /// Iterates over the entries in storage order (not pop order)
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, P>> {
        self.storage.iter()
    }

    /// Consumes the heap, returning its entries in pop order
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, P>> {
        let mut sorted = Vec::with_capacity(self.storage.len());
        while let Ok(entry) = self.pop_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the heap property over the whole storage
    ///
    /// Returns false if some child precedes its parent under the order.
    pub fn is_valid(&self) -> bool {
        (1..self.storage.len()).all(|index| {
            let parent = (index - 1) / 2;
            !self
                .order
                .precedes(&self.storage[index].priority, &self.storage[parent].priority)
        })
    }

    /// Restores the heap property over arbitrary storage, bottom-up
    fn heapify(&mut self) {
        let len = self.storage.len();
        trace!("heapify over {} entries", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.is_valid());
    }

    /// Returns true if the entry at `a` should sit above the entry at `b`
    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.order
            .precedes(&self.storage[a].priority, &self.storage[b].priority)
    }

    /// Move entry at index up while it precedes its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes(index, parent) {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down while some child precedes it
    ///
    /// When both children precede the entry, the one that precedes the
    /// other is promoted; on a tie the left child wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut top = index;

            if left < len && self.precedes(left, top) {
                top = left;
            }
            if right < len && self.precedes(right, top) {
                top = right;
            }

            if top == index {
                break;
            }
            self.storage.swap(index, top);
            index = top;
        }
    }
}

impl<K, P, O: HeapOrder<P> + Default> Default for Heap<K, P, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<K, P, O: HeapOrder<P> + Default> FromIterator<(K, P)> for Heap<K, P, O> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self::from_entries(O::default(), iter)
    }
}

impl<K, P, O: HeapOrder<P>> Extend<(K, P)> for Heap<K, P, O> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.push(key, priority);
        }
    }
}

impl<'a, K, P, O> IntoIterator for &'a Heap<K, P, O> {
    type Item = &'a Entry<K, P>;
    type IntoIter = std::slice::Iter<'a, Entry<K, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

// Closures are not Debug, so the order is left out
impl<K: fmt::Debug, P: fmt::Debug, O> fmt::Debug for Heap<K, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
