//! FIFO queue built on [`Deque`]

use crate::deque::Deque;
use crate::traits::EmptyError;

/// A first-in, first-out queue
///
/// # Example
///
/// ```rust
/// use comparator_heaps::Queue;
///
/// let mut queue: Queue<&str> = ["first"].into_iter().collect();
/// queue.push("second");
/// assert_eq!(queue.pop(), Ok("first"));
/// assert_eq!(queue.peek(), Ok(&"second"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: Deque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.items.size()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element at the back
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the oldest element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop_front()
    }

    /// Returns the oldest element without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.peek_front()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
