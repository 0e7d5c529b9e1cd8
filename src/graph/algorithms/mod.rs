//! Graph algorithms written once against [`EdgeIter`](crate::EdgeIter).
//!
//! None of them branch on the backing representation; the only observable
//! difference between backings is the order in which a vertex's neighbors are
//! enumerated, which decides tie-breaks.
//!
//! # Available Algorithms
//!
//! | Algorithm | Time Complexity (list / matrix) | Work list |
//! |-----------|---------------------------------|-----------|
//! | [`bfs`] | \(O(V + E)\) / \(O(V^2)\) | [`FifoQueue`](crate::collections::FifoQueue) |
//! | [`dfs`] | \(O(V + E)\) / \(O(V^2)\) | [`LifoStack`](crate::collections::LifoStack) |
//! | [`dijkstra`] | \(O((V + E) \log E)\) / \(O(V^2 + E \log E)\) | [`MinPriorityQueue`](crate::collections::MinPriorityQueue) |

mod shortest_path;
mod traversal;

pub use shortest_path::{dijkstra, shortest_paths, ShortestPaths};
pub use traversal::{bfs, bfs_order, dfs, dfs_order, is_connected_from};
