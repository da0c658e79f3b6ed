//! Comparator-Driven Heaps and Containers for Rust
//!
//! This crate provides a binary heap whose order is injected by the caller,
//! a priority queue built on it, and a few linear sequence containers.
//!
//! # Features
//!
//! - **Heap**: Array-backed binary heap over `(key, priority)` entries, ordered by any [`HeapOrder`]
//! - **MaxHeap / MinHeap**: Heaps fixed to numeric descending / ascending order
//! - **PriorityQueue**: Queue vocabulary over a heap; `pop` hands back the item, not its priority
//! - **Deque / Queue / Stack**: O(1) amortized double-ended, FIFO, and LIFO containers
//!
//! Every accessor that needs an element returns [`EmptyError`] on an empty container.
//!
//! # Example
//!
//! ```rust
//! use comparator_heaps::{MaxHeap, PriorityQueue};
//!
//! let mut heap: MaxHeap<&str, i32> = MaxHeap::default();
//! heap.push("Kelly", 1);
//! heap.push("Ryan", 7);
//! assert_eq!(heap.next_key(), Ok(&"Ryan"));
//! assert_eq!(heap.pop(), Ok(7));
//!
//! let mut pq = PriorityQueue::new(|x: &i32, y: &i32| x > y);
//! pq.push("Important", 10);
//! pq.push("Not So Important", -2);
//! assert_eq!(pq.pop(), Ok("Important"));
//! ```

pub mod deque;
pub mod heap;
pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod traits;

// Re-export the main types for convenience
pub use deque::Deque;
pub use heap::{Entry, Heap, MaxHeap, MinHeap};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
pub use traits::{EmptyError, HeapOrder, MaxOrder, MinOrder};
