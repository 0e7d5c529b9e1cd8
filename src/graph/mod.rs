//! The graph store, its two backings, the edge iterator and the algorithms.
//!
//! - `store`: [`Graph`], edge CRUD, degrees and representation conversion
//! - `storage`: adjacency-list and adjacency-matrix backings
//! - `iter`: [`EdgeIter`], the representation-independent edge cursor
//! - `algorithms`: BFS, DFS and Dijkstra on top of `iter`

pub mod algorithms;
pub mod edge;
pub mod iter;
pub mod kind;
mod storage;
pub mod store;

pub use edge::{Edge, EdgeRecord, DEFAULT_WEIGHT, NO_EDGE_WEIGHT};
pub use iter::EdgeIter;
pub use kind::{GraphKind, Representation};
pub use store::Graph;
