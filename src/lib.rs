//! # `commc-graph` - Fixed-Vertex Graph Store
//!
//! A weighted graph over the vertices `0..n` whose edges can live in either
//! of two interchangeable backings, plus the classical algorithms written once
//! against a single edge-iteration abstraction.
//!
//! ## Architecture
//!
//! Data flows strictly downward:
//!
//! 1. **Algorithms** ([`algorithms`]): breadth-first and depth-first
//!    traversal with a visit callback, and Dijkstra's single-source shortest
//!    paths with lazy deletion.
//! 2. **Edge iterator** ([`EdgeIter`]): a lazy, forward-only cursor over
//!    either one vertex's outgoing edges or every edge of the graph. It is the
//!    only component that knows how to skip empty lists or unset matrix cells.
//! 3. **Graph store** ([`Graph`]): vertex count, directedness, logical edge
//!    count, edge CRUD, degree queries and representation conversion.
//! 4. **Backings**: an adjacency list (per-vertex, insertion-ordered edge
//!    records) or an adjacency matrix (dense weights plus existence flags).
//!
//! The work lists the algorithms consume live in [`collections`].
//!
//! ## Choosing a representation
//!
//! | | `AdjacencyList` | `AdjacencyMatrix` |
//! |---|---|---|
//! | space | \(O(V + E)\) | \(O(V^2)\) |
//! | `has_edge` | \(O(\text{degree})\) | \(O(1)\) |
//! | neighbor scan | \(O(\text{degree})\) | \(O(V)\) |
//!
//! Both give identical edge sets and identical algorithm results up to the
//! order in which a vertex's neighbors are enumerated: insertion order for
//! lists, ascending destination for matrices.
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`]. Invalid arguments are
//! rejected before anything is modified; allocation failures are reported as
//! errors (the backings grow with `try_reserve`) and leave the graph intact.
//!
//! ## Logging
//!
//! Construction, conversion and algorithm runs emit `tracing` events at
//! `debug` level, individual edge updates at `trace`. The crate never installs
//! a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use commc_graph::{algorithms, Graph, GraphKind, Representation};
//!
//! let mut g = Graph::new(5, GraphKind::Undirected, Representation::AdjacencyList)?;
//! for v in 0..4 {
//!     g.add_edge_unweighted(v, v + 1)?;
//! }
//!
//! assert_eq!(algorithms::bfs_order(&g, 0)?, vec![0, 1, 2, 3, 4]);
//!
//! let dense = g.copy(Representation::AdjacencyMatrix)?;
//! assert_eq!(algorithms::dijkstra(&dense, 0)?, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), commc_graph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{ErrorKind, GraphError, Result};
pub use graph::algorithms;
pub use graph::{
    Edge, EdgeIter, EdgeRecord, Graph, GraphKind, Representation, DEFAULT_WEIGHT, NO_EDGE_WEIGHT,
};

