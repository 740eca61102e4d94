//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use predicate_heap::{BinaryHeap, Heap, MaxFirst, MinFirst, Predicate};

/// Checks the tree directly: no element may outrank its parent
fn assert_heap_property<T, P: Predicate<T>>(heap: &BinaryHeap<T, P>) -> Result<(), TestCaseError> {
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        prop_assert!(
            !heap.predicate().outranks(&data[i], &data[parent]),
            "index {} outranks its parent {}",
            i,
            parent
        );
    }
    Ok(())
}

/// Test that interleaved inserts and extracts keep the heap property
fn test_push_pop_invariant<P: Predicate<i32>>(
    predicate: P,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = BinaryHeap::new(predicate);

    for (should_pop, value) in ops {
        if should_pop {
            heap.extract();
        } else {
            heap.insert(value);
        }
        assert_heap_property(&heap)?;
        prop_assert!(heap.is_heap());
    }

    Ok(())
}

/// Test that len tracks inserts minus successful extracts
fn test_len_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = BinaryHeap::new(MinFirst::new());
    let mut inserted = 0usize;
    let mut extracted = 0usize;

    for (should_pop, value) in ops {
        if should_pop {
            if heap.extract().is_some() {
                extracted += 1;
            }
        } else {
            heap.insert(value);
            inserted += 1;
        }
        prop_assert_eq!(heap.len(), inserted - extracted);
        prop_assert_eq!(heap.is_empty(), inserted == extracted);
    }

    Ok(())
}

/// Test that the root is always the best element still in the heap
fn test_root_is_best(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a > b);
    let mut shadow: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            let popped = heap.extract();
            let expected = shadow.iter().copied().max();
            prop_assert_eq!(popped, expected);
            if let Some(pos) = expected.and_then(|max| shadow.iter().position(|&v| v == max)) {
                shadow.swap_remove(pos);
            }
        } else {
            heap.insert(value);
            shadow.push(value);
        }
        prop_assert_eq!(heap.peek().copied(), shadow.iter().copied().max());
    }

    Ok(())
}

/// Test that building then extracting everything sorts the input
fn test_round_trip<P: Predicate<i32>>(
    predicate: P,
    values: Vec<i32>,
    sort: fn(&mut Vec<i32>),
) -> Result<(), TestCaseError> {
    let mut expected = values.clone();
    sort(&mut expected);

    let heap = BinaryHeap::from_slice(predicate, &values);
    assert_heap_property(&heap)?;
    prop_assert_eq!(heap.len(), values.len());
    prop_assert_eq!(heap.into_sorted_vec(), expected);

    Ok(())
}

/// Test that peek with no mutation in between always agrees with itself
fn test_peek_idempotence(values: Vec<i32>) -> Result<(), TestCaseError> {
    let heap: BinaryHeap<i32, MinFirst<i32>> = values.into_iter().collect();
    let first = heap.peek().copied();
    let before = heap.as_slice().to_vec();

    for _ in 0..3 {
        prop_assert_eq!(heap.peek().copied(), first);
    }
    prop_assert_eq!(heap.as_slice(), before.as_slice());

    Ok(())
}

/// Test that no extracted element is outranked by one left behind
fn test_pop_order_invariant(values: Vec<(u8, u16)>) -> Result<(), TestCaseError> {
    // Ranks on the first field only, so many elements tie
    let by_rank = |a: &(u8, u16), b: &(u8, u16)| a.0 < b.0;
    let mut heap = BinaryHeap::from_vec(by_rank, values.clone());
    let mut out = Vec::with_capacity(values.len());

    while let Some(element) = heap.extract() {
        for remaining in heap.as_slice() {
            prop_assert!(!by_rank(remaining, &element));
        }
        out.push(element);
    }

    let mut expected = values;
    expected.sort();
    out.sort();
    prop_assert_eq!(out, expected);

    Ok(())
}

fn ascending(v: &mut Vec<i32>) {
    v.sort();
}

fn descending(v: &mut Vec<i32>) {
    v.sort_by(|a, b| b.cmp(a));
}

proptest! {
    #[test]
    fn test_min_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_push_pop_invariant(MinFirst::new(), ops)?;
    }

    #[test]
    fn test_max_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_push_pop_invariant(MaxFirst::new(), ops)?;
    }

    #[test]
    fn test_closure_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        // Orders by distance from 10, a strict weak order with many ties
        test_push_pop_invariant(|a: &i32, b: &i32| (a - 10).abs() < (b - 10).abs(), ops)?;
    }

    #[test]
    fn test_heap_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_len_invariant(ops)?;
    }

    #[test]
    fn test_max_root_is_best(ops in prop::collection::vec((prop::bool::ANY, -1000i32..1000), 0..200)) {
        test_root_is_best(ops)?;
    }

    #[test]
    fn test_min_round_trip(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_round_trip(MinFirst::new(), values, ascending)?;
    }

    #[test]
    fn test_max_round_trip(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_round_trip(|a: &i32, b: &i32| a > b, values, descending)?;
    }

    #[test]
    fn test_heap_peek_idempotence(values in prop::collection::vec(-50i32..50, 0..100)) {
        test_peek_idempotence(values)?;
    }

    #[test]
    fn test_heap_pop_order_invariant(values in prop::collection::vec((0u8..8, any::<u16>()), 0..150)) {
        test_pop_order_invariant(values)?;
    }
}
