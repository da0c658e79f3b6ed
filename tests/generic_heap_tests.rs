//! Scenario tests for the heap, its numeric specializations, and the priority queue
//!
//! The helpers are generic over the order so the same scenario runs against
//! the built-in orders and equivalent closures.

use comparator_heaps::{EmptyError, Heap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder, PriorityQueue};

// Test helpers that work with any order

/// Test that an empty heap behaves correctly
fn test_empty_heap<O: HeapOrder<i32>>(order: O) {
    let mut heap: Heap<String, i32, O> = Heap::new(order);
    assert!(heap.is_empty());
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.peek(), Err(EmptyError));
    assert_eq!(heap.next_key(), Err(EmptyError));
    assert_eq!(heap.pop(), Err(EmptyError));

    heap.push("only".to_string(), 0);
    assert!(!heap.is_empty());
}

/// Push the given priorities and check the pop sequence is strictly ordered by `order`
fn test_sorted_extraction<O: HeapOrder<i32>>(order: O, priorities: &[i32]) {
    let mut heap = Heap::new(order);
    for (key, &priority) in priorities.iter().enumerate() {
        heap.push(key, priority);
    }

    let mut popped = Vec::new();
    while let Ok(priority) = heap.pop() {
        popped.push(priority);
    }

    assert_eq!(popped.len(), priorities.len());
    for pair in popped.windows(2) {
        assert!(
            heap.order().precedes(&pair[0], &pair[1]),
            "{} should precede {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_max_heap_properties() {
    let heap: MaxHeap<i32, i32> = MaxHeap::default();
    assert_eq!(heap.size(), 0);
    assert!(heap.is_empty());
}

#[test]
fn test_max_heap_push() {
    let mut heap: MaxHeap<i32, i32> = MaxHeap::default();
    heap.push(1, 11);
    heap.push(2, 12);
    heap.push(3, 13);

    assert!(!heap.is_empty());
    assert_eq!(heap.next_key(), Ok(&3));
    assert!(heap.contains_key(&2));
    assert!(!heap.contains_key(&42));
}

#[test]
fn test_max_heap_mixed_scenario() {
    init_logger();
    let mut heap: MaxHeap<i32, i32> = MaxHeap::default();
    heap.push(1, 11);
    heap.push(2, 12);
    heap.push(3, 13);

    assert_eq!(heap.pop(), Ok(13));
    assert_eq!(heap.pop(), Ok(12));
    assert!(heap.push(-1, 10));
    assert_eq!(heap.next(), Ok(&11));
    assert!(heap.push(100, 99));
    assert_eq!(heap.next(), Ok(&99));
    assert!(heap.contains_key(&100));
    assert!(!heap.contains_key(&101));
}

#[test]
fn test_min_heap_scenario() {
    let mut heap: MinHeap<&str, f64> = MinHeap::default();
    heap.push("b", 2.5);
    heap.push("a", -1.0);
    heap.push("c", 7.25);

    assert_eq!(heap.next_key(), Ok(&"a"));
    assert_eq!(heap.pop(), Ok(-1.0));
    assert_eq!(heap.pop(), Ok(2.5));
    assert_eq!(heap.pop(), Ok(7.25));
    assert_eq!(heap.pop(), Err(EmptyError));
}

#[test]
fn test_empty_heaps() {
    test_empty_heap(MaxOrder);
    test_empty_heap(MinOrder);
    test_empty_heap(|a: &i32, b: &i32| a > b);
}

#[test]
fn test_sorted_extraction_all_orders() {
    let priorities = [5, -3, 17, 0, 42, 8, -11, 23, 1, 9];
    test_sorted_extraction(MaxOrder, &priorities);
    test_sorted_extraction(MinOrder, &priorities);
    test_sorted_extraction(|a: &i32, b: &i32| a.abs() < b.abs(), &[3, -7, 1, 12, -20]);
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_initial_collection() {
    init_logger();
    let heap: MaxHeap<i32, i32> = vec![(1, 11), (2, 12), (3, 13)].into_iter().collect();
    assert_eq!(heap.size(), 3);
    assert_eq!(heap.peek(), Ok(&13));
    assert!(heap.is_valid());

    let heap = Heap::from_entries(MinOrder, vec![("x", 3), ("y", 1), ("z", 2)]);
    assert_eq!(heap.next_key(), Ok(&"y"));
}

#[test]
fn test_pop_returns_priority_not_key() {
    let mut heap: MaxHeap<&str, i32> = MaxHeap::default();
    heap.push("Kelly", 1);
    heap.push("Ryan", 7);
    assert_eq!(heap.next_key(), Ok(&"Ryan"));
    assert_eq!(heap.pop(), Ok(7));
    assert_eq!(heap.next_key(), Ok(&"Kelly"));
}

#[test]
fn test_keys_with_equal_priorities() {
    let mut heap: MinHeap<char, u8> = MinHeap::default();
    for key in ['a', 'b', 'c', 'd'] {
        heap.push(key, 1);
    }
    heap.push('z', 0);

    assert_eq!(heap.next_key(), Ok(&'z'));
    let mut keys: Vec<char> = heap.into_sorted_vec().into_iter().skip(1).map(|e| e.key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!['a', 'b', 'c', 'd']);
}

#[test]
fn test_priority_queue_scenario() {
    let mut pq = PriorityQueue::new(|x: &i32, y: &i32| (x > y) as i32 - (x < y) as i32 == 1);
    pq.push("Important", 10);
    pq.push("Not So Important", -2);
    assert_eq!(pq.pop(), Ok("Important"));
}

#[test]
fn test_priority_queue_and_heap_disagree_on_pop() {
    // Same entries, same order: heap yields the priority, queue yields the item
    let mut heap = Heap::new(MaxOrder);
    let mut pq = PriorityQueue::new(MaxOrder);
    for (item, priority) in [("low", 1), ("high", 9), ("mid", 5)] {
        heap.push(item, priority);
        pq.push(item, priority);
    }

    assert_eq!(heap.pop(), Ok(9));
    assert_eq!(pq.pop(), Ok("high"));
    assert_eq!(heap.size(), pq.size());
}

#[test]
fn test_priority_queue_empty_pop() {
    let mut pq: PriorityQueue<u32, u32, MinOrder> = PriorityQueue::default();
    assert!(pq.is_empty());
    assert_eq!(pq.pop(), Err(EmptyError));
}
