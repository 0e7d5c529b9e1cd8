//! Work-list collections consumed by the graph algorithms.
//!
//! - `queue`: FIFO queue for breadth-first search
//! - `stack`: LIFO stack for depth-first search
//! - `priority_queue`: comparator-ordered min-heap for Dijkstra
//!
//! All three grow with `try_reserve` and report allocation failure as a
//! [`GraphError`](crate::GraphError) instead of aborting.

use crate::error::Result;

pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use priority_queue::MinPriorityQueue;
pub use queue::FifoQueue;
pub use stack::LifoStack;

/// Builds a vector of exactly `len` copies of `value` without aborting on OOM.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)?;
    cells.resize(len, value);
    Ok(cells)
}
