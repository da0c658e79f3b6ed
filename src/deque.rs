//! Double-ended queue
//!
//! A thin adapter over [`VecDeque`] with O(1) amortized push and pop at both
//! ends. Accessors on an empty deque return [`EmptyError`] instead of `None`,
//! matching the rest of the crate.
//!
//! # Example
//!
//! ```rust
//! use comparator_heaps::Deque;
//!
//! let mut deque: Deque<i32> = [2, 3].into_iter().collect();
//! deque.push_front(1);
//! deque.push_back(4);
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(4));
//! assert_eq!(deque.size(), 2);
//! ```

use std::collections::VecDeque;

use crate::traits::EmptyError;

/// A double-ended sequence container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Returns the number of elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the deque holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepends an element
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Appends an element
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the first element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        self.items.pop_front().ok_or(EmptyError)
    }

    /// Removes and returns the last element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        self.items.pop_back().ok_or(EmptyError)
    }

    /// Returns the first element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn peek_front(&self) -> Result<&T, EmptyError> {
        self.items.front().ok_or(EmptyError)
    }

    /// Returns the last element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn peek_back(&self) -> Result<&T, EmptyError> {
        self.items.back().ok_or(EmptyError)
    }

    /// Returns the element at `index`, counting from the front
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns true if an element equal to `item` is present
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates front to back
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
