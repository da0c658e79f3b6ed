//! Common traits for the containers in this crate
//!
//! This module provides the ordering capability injected into heaps and the
//! single error type shared by every container:
//!
//! - [`HeapOrder`]: decides whether one priority precedes another in heap order
//! - [`MaxOrder`] / [`MinOrder`]: the numeric descending / ascending orders
//! - [`EmptyError`]: returned by pop/peek-style accessors on an empty container
//!
//! Any closure `Fn(&P, &P) -> bool` is a [`HeapOrder`], so callers can inject
//! an arbitrary predicate without defining a type.

use std::fmt;

/// Error returned when an element is requested from an empty container
///
/// Emptiness is a precondition violation, never a transient condition:
/// check `is_empty()` first or handle the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is empty")
    }
}

impl std::error::Error for EmptyError {}

/// Ordering capability used to arrange heap entries
///
/// `precedes(a, b)` returns true when a priority `a` belongs closer to the
/// root than `b`. The relation must be a strict total preorder and must not
/// change for the lifetime of a heap.
///
/// # Example
///
/// ```rust
/// use comparator_heaps::{HeapOrder, MaxOrder};
///
/// assert!(MaxOrder.precedes(&7, &3));
/// assert!(!MaxOrder.precedes(&3, &3));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.precedes(&"ab", &"abc"));
/// ```
pub trait HeapOrder<P> {
    /// Returns true if `a` should sit above `b` in the heap
    fn precedes(&self, a: &P, b: &P) -> bool;
}

impl<P, F> HeapOrder<P> for F
where
    F: Fn(&P, &P) -> bool,
{
    #[inline]
    fn precedes(&self, a: &P, b: &P) -> bool {
        self(a, b)
    }
}

/// Numeric descending order: `a > b`
///
/// A heap configured with this order keeps its largest priority at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxOrder;

impl<P: PartialOrd> HeapOrder<P> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &P, b: &P) -> bool {
        a > b
    }
}

/// Numeric ascending order: `a < b`
///
/// A heap configured with this order keeps its smallest priority at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinOrder;

impl<P: PartialOrd> HeapOrder<P> for MinOrder {
    #[inline]
    fn precedes(&self, a: &P, b: &P) -> bool {
        a < b
    }
}
