#![cfg(feature = "linear")]
//! Integration tests for ArrayDeque.
//!
//! Covers FIFO/LIFO discipline through the sequence traits, the tiered growth
//! policy at its boundaries, and rotation of wrapped contents.

use corral::prelude::*;
use rstest::rstest;

fn filled(capacity: usize, count: usize) -> ArrayDeque<usize> {
    let mut deque = ArrayDeque::with_capacity(capacity);
    for value in 0..count {
        deque.add_back(value);
    }
    deque
}

fn rotate<T>(deque: &mut ArrayDeque<T>, times: usize) {
    for _ in 0..times {
        let front = deque.remove_front().unwrap();
        deque.add_back(front);
    }
}

// =============================================================================
// Queue and stack discipline
// =============================================================================

#[rstest]
fn test_queue_view_is_fifo() {
    let mut deque = ArrayDeque::new();
    for value in 1..=5 {
        Queue::add(&mut deque, value);
    }

    let drained: Vec<i32> = std::iter::from_fn(|| Queue::remove(&mut deque).ok()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_stack_view_is_lifo() {
    let mut deque = ArrayDeque::new();
    for value in 1..=5 {
        Stack::push(&mut deque, value);
    }

    let drained: Vec<i32> = std::iter::from_fn(|| Stack::pop(&mut deque).ok()).collect();
    assert_eq!(drained, vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn test_generic_deque_consumer() {
    fn drain_both_ends<D: Deque<u8>>(deque: &mut D) -> (u8, u8) {
        (deque.remove_front().unwrap(), deque.remove_back().unwrap())
    }

    let mut deque: ArrayDeque<u8> = [1, 2, 3].into_iter().collect();
    assert_eq!(drain_both_ends(&mut deque), (1, 3));
    assert_eq!(deque.len(), 1);
}

#[rstest]
#[case::remove_front(ArrayDeque::remove_front as fn(&mut ArrayDeque<u8>) -> Result<u8, CollectionError>, "remove_front")]
#[case::remove_back(ArrayDeque::remove_back as fn(&mut ArrayDeque<u8>) -> Result<u8, CollectionError>, "remove_back")]
fn test_empty_removal_reports_operation(
    #[case] operation: fn(&mut ArrayDeque<u8>) -> Result<u8, CollectionError>,
    #[case] name: &str,
) {
    let mut deque = ArrayDeque::new();
    let error = operation(&mut deque).unwrap_err();
    assert_eq!(error.to_string(), format!("cannot {name} an empty ArrayDeque"));
}

// =============================================================================
// Growth policy
// =============================================================================

#[rstest]
#[case::at_capacity(10, 10, 10)]
#[case::one_past_capacity(10, 11, 20)]
#[case::twice_capacity(10, 20, 20)]
#[case::twice_capacity_plus_one(10, 21, 40)]
#[case::from_zero(0, 1, 10)]
#[case::doubling_limit(512, 513, 768)]
#[case::below_doubling_limit(511, 512, 1022)]
#[case::half_growth_limit(2048, 2049, 2560)]
#[case::below_half_growth_limit(2047, 2048, 3070)]
fn test_growth_tiers(#[case] initial: usize, #[case] count: usize, #[case] expected: usize) {
    let deque = filled(initial, count);
    assert_eq!(deque.capacity(), expected);
    assert_eq!(deque.len(), count);
    assert_eq!(deque.to_vec(), (0..count).collect::<Vec<_>>());
}

#[rstest]
fn test_growth_from_front_keeps_order() {
    let mut deque = ArrayDeque::with_capacity(4);
    for value in 0..9 {
        deque.add_front(value);
    }

    assert_eq!(deque.to_vec(), (0..9).rev().collect::<Vec<_>>());
    assert_eq!(deque.peek_back(), Ok(&0));
}

#[rstest]
fn test_growth_with_wrapped_contents() {
    let mut deque = filled(10, 10);
    rotate(&mut deque, 7);
    deque.add_back(100);

    assert_eq!(deque.capacity(), 20);
    assert_eq!(deque.to_vec(), vec![7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 100]);
}

// =============================================================================
// Rotation
// =============================================================================

#[rstest]
fn test_rotate_ten_by_five() {
    let mut deque: ArrayDeque<i32> = (1..=10).collect();
    rotate(&mut deque, 5);
    assert_eq!(deque.to_vec(), vec![6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
}

#[rstest]
fn test_rotate_odd_length_by_half() {
    let mut deque: ArrayDeque<i32> = (1..=9).collect();
    let half = deque.len() / 2;
    rotate(&mut deque, half);
    assert_eq!(deque.to_vec(), vec![5, 6, 7, 8, 9, 1, 2, 3, 4]);
}

#[rstest]
fn test_full_rotation_is_identity() {
    let mut deque: ArrayDeque<i32> = (1..=7).collect();
    rotate(&mut deque, 7);
    assert_eq!(deque.to_vec(), (1..=7).collect::<Vec<_>>());
}

// =============================================================================
// Iteration and formatting
// =============================================================================

#[rstest]
fn test_iteration_after_wrap() {
    let mut deque = filled(5, 5);
    rotate(&mut deque, 3);

    let forward: Vec<usize> = deque.iter().copied().collect();
    let backward: Vec<usize> = deque.iter().rev().copied().collect();
    assert_eq!(forward, vec![3, 4, 0, 1, 2]);
    assert_eq!(backward, vec![2, 1, 0, 4, 3]);
    assert_eq!(deque.iter().len(), 5);
}

#[rstest]
fn test_owned_iteration() {
    let deque: ArrayDeque<String> = ["a", "b"].into_iter().map(String::from).collect();
    let owned: Vec<String> = deque.into_iter().collect();
    assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn test_display() {
    let deque: ArrayDeque<i32> = (1..=3).collect();
    assert_eq!(deque.to_string(), "[1, 2, 3]");
    assert_eq!(ArrayDeque::<i32>::new().to_string(), "[]");
}

#[rstest]
fn test_clear_then_reuse() {
    let mut deque = filled(10, 30);
    deque.clear();

    assert!(deque.is_empty());
    assert_eq!(deque.capacity(), 0);
    deque.add_back(1);
    assert_eq!(deque.capacity(), 10);
}
