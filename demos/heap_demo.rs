//! Predicate-ordered heap walkthrough
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=trace cargo run --example heap_demo
//! ```

use predicate_heap::{BinaryHeap, Heap, HeapError, MaxHeap, MinHeap};

#[derive(Debug)]
struct Task {
    name: &'static str,
    deadline: u32,
}

fn main() -> Result<(), HeapError> {
    env_logger::init();

    let data = [2, 4, 6, 7, -53, -1, 34, 68, 0, 0];

    let min: MinHeap<i32> = data.into();
    println!("min-heap order: {:?}", min.into_sorted_vec());

    let max: MaxHeap<i32> = data.into();
    println!("max-heap order: {:?}", max.into_sorted_vec());

    // Any closure can decide the order; here the earliest deadline wins
    let mut tasks = BinaryHeap::construct(
        Some(|a: &Task, b: &Task| a.deadline < b.deadline),
        [
            Task { name: "write report", deadline: 5 },
            Task { name: "reply to email", deadline: 1 },
            Task { name: "review patch", deadline: 3 },
        ],
    )?;
    tasks.insert(Task { name: "fix build", deadline: 0 });

    println!("next task: {:?}", tasks.try_peek()?);
    while let Some(task) = tasks.extract() {
        println!("  {:>2}  {}", task.deadline, task.name);
    }

    match BinaryHeap::<i32, fn(&i32, &i32) -> bool>::construct(None, data) {
        Ok(_) => println!("unexpectedly built a heap without a predicate"),
        Err(err) => println!("without a predicate: {}", err),
    }

    Ok(())
}
