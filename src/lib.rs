//! Predicate-ordered binary heaps for Rust
//!
//! This crate provides an array-backed binary heap whose order is decided by
//! a caller-supplied predicate instead of the `Ord` trait. The same
//! [`BinaryHeap`] is a min-heap, a max-heap, or a heap over any strict weak
//! ordering, depending only on the predicate it was built with.
//!
//! # Features
//!
//! - **Pluggable order**: closures, function pointers, or the zero-sized
//!   [`MinFirst`] / [`MaxFirst`] predicates
//! - **O(log n)** insert and extract, **O(1)** peek and size
//! - **O(n)** bulk construction from existing elements
//! - **Deterministic ties**: sift-down prefers the left child when neither
//!   child outranks the other
//!
//! # Example
//!
//! ```rust
//! use predicate_heap::{BinaryHeap, Heap};
//!
//! let mut heap = BinaryHeap::from_vec(|a: &i32, b: &i32| a < b, vec![2, 4, -53, 0]);
//! heap.insert(-1);
//!
//! assert_eq!(heap.extract(), Some(-53));
//! assert_eq!(heap.extract(), Some(-1));
//! assert_eq!(heap.peek(), Some(&0));
//! assert_eq!(heap.size(), 3);
//! ```

pub mod binary;
pub mod ordered;
pub mod predicate;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use ordered::{MaxHeap, MinHeap};
pub use predicate::{MaxFirst, MinFirst, Predicate};
pub use traits::{Heap, HeapError};
