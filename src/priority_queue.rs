//! Priority queue adapter
//!
//! Wraps a [`Heap`] behind a queue vocabulary: items go in with a priority and
//! come out by priority. Unlike [`Heap::pop`], which yields the removed
//! priority, [`PriorityQueue::pop`] yields the removed item.
//!
//! # Example
//!
//! ```rust
//! use comparator_heaps::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new(|x: &i32, y: &i32| x > y);
//! pq.push("Important", 10);
//! pq.push("Not So Important", -2);
//! assert_eq!(pq.pop(), Ok("Important"));
//! ```

use crate::heap::Heap;
use crate::traits::{EmptyError, HeapOrder};

/// A priority queue ordered by an injected [`HeapOrder`]
///
/// # Type Parameters
/// - `K`: The item type handed back by `pop`
/// - `P`: The priority type ranked by `O`
/// - `O`: The order deciding which item leaves first
#[derive(Debug, Clone)]
pub struct PriorityQueue<K, P, O> {
    heap: Heap<K, P, O>,
}

impl<K, P, O: HeapOrder<P>> PriorityQueue<K, P, O> {
    /// Creates an empty queue arranged by `order`
    pub fn new(order: O) -> Self {
        Self {
            heap: Heap::new(order),
        }
    }

    /// Returns the number of queued items
    pub fn size(&self) -> usize {
        self.heap.size()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no items are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queues `item` with `priority`; always returns `true`
    pub fn push(&mut self, item: K, priority: P) -> bool {
        self.heap.push(item, priority)
    }

    /// Removes the highest-ranked item and returns it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<K, EmptyError> {
        self.heap.pop_entry().map(|entry| entry.key)
    }

    /// Returns the item `pop` would return, without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&K, EmptyError> {
        self.heap.next_key()
    }

    /// Returns the priority of the item `pop` would return
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_priority(&self) -> Result<&P, EmptyError> {
        self.heap.peek()
    }

    /// Returns true if `item` is queued
    pub fn contains(&self, item: &K) -> bool
    where
        K: PartialEq,
    {
        self.heap.contains_key(item)
    }

    /// Drops every queued item
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K, P, O: HeapOrder<P> + Default> Default for PriorityQueue<K, P, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}
