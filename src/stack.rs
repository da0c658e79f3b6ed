//! LIFO stack built on `Vec`

use crate::traits::EmptyError;

/// A last-in, first-out stack
///
/// When built from a collection, the last element becomes the top.
///
/// # Example
///
/// ```rust
/// use comparator_heaps::Stack;
///
/// let mut stack: Stack<i32> = vec![1, 2].into_iter().collect();
/// stack.push(3);
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.peek(), Ok(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places an element on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the top element
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError)
    }

    /// Returns the top element without removing it
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.last().ok_or(EmptyError)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Iterates from top to bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
