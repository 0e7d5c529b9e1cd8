//! The fixed-vertex graph store.
//!
//! A [`Graph`] owns its vertex count, directedness and one backing
//! representation. Vertices are the indices `0..vertex_count`; only edges
//! change after construction.
//!
//! ### Performance Characteristics
//! | Operation | Adjacency list | Adjacency matrix |
//! |-----------|----------------|------------------|
//! | `new` | \(O(V)\) | \(O(V^2)\) |
//! | `add_edge` / `remove_edge` | \(O(\text{degree})\) | \(O(1)\) |
//! | `has_edge` / `edge_weight` | \(O(\text{degree})\) | \(O(1)\) |
//! | `degree` | \(O(1)\) | \(O(V)\) |
//! | `in_degree` (directed) | \(O(V + E)\) | \(O(V)\) |

use std::fmt;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, DEFAULT_WEIGHT, NO_EDGE_WEIGHT};
use crate::graph::iter::EdgeIter;
use crate::graph::kind::{GraphKind, Representation};
use crate::graph::storage::Storage;

/// A graph over the vertices `0..vertex_count` with weighted edges.
///
/// Between any ordered pair of vertices there is at most one edge; adding it
/// again overwrites the weight. In an undirected graph `add_edge(u, v, w)`
/// makes both `u -> v` and `v -> u` visible with weight `w`, and counts as a
/// single logical edge.
///
/// Mutation needs `&mut Graph` and iterators borrow `&Graph`, so an edge
/// iterator can never observe a graph that is being modified.
///
/// # Examples
///
/// ```
/// use commc_graph::{Graph, GraphKind, Representation};
///
/// let mut g = Graph::new(3, GraphKind::Undirected, Representation::AdjacencyMatrix)?;
/// g.add_edge(0, 1, 2.5)?;
/// g.add_edge_unweighted(1, 2)?;
///
/// assert!(g.has_edge(1, 0));
/// assert_eq!(g.edge_weight(0, 1), 2.5);
/// assert_eq!(g.edge_count(), 2);
/// # Ok::<(), commc_graph::GraphError>(())
/// ```
pub struct Graph {
    storage: Storage,
    vertex_count: usize,
    edge_count: usize,
    kind: GraphKind,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// - [`GraphError::ZeroVertices`] if `vertex_count == 0`.
    /// - A memory error if the backing cannot be allocated. Nothing is
    ///   leaked in that case.
    pub fn new(
        vertex_count: usize,
        kind: GraphKind,
        representation: Representation,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::ZeroVertices);
        }
        let storage = Storage::new(vertex_count, representation)?;
        debug!(vertex_count, %kind, %representation, "created graph");
        Ok(Self {
            storage,
            vertex_count,
            edge_count: 0,
            kind,
        })
    }

    /// Creates a graph and inserts every edge of `edges` in order.
    ///
    /// Later duplicates overwrite the weight of earlier ones.
    pub fn from_edges<I, E>(
        vertex_count: usize,
        kind: GraphKind,
        representation: Representation,
        edges: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(vertex_count, kind, representation)?;
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Number of vertices. Fixed at construction.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of logical edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph is directed or undirected.
    #[inline(always)]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for directed graphs.
    #[inline(always)]
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// The current backing representation.
    #[inline]
    pub fn representation(&self) -> Representation {
        self.storage.representation()
    }

    #[inline(always)]
    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns `true` if `vertex` is a valid index for this graph.
    #[inline(always)]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    #[inline]
    fn mirrors(&self, from: usize, to: usize) -> bool {
        !self.is_directed() && from != to
    }

    /// Adds the edge `from -> to` or overwrites its weight.
    ///
    /// Returns `true` if a new logical edge was created.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either endpoint is invalid; a
    /// memory error if an adjacency list cannot grow. In both cases the graph
    /// is unchanged.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let mirrored = self.mirrors(from, to);
        if mirrored {
            self.storage.reserve_for(&[from, to])?;
        } else {
            self.storage.reserve_for(&[from])?;
        }

        let created = self.storage.upsert(from, to, weight);
        if mirrored {
            self.storage.upsert(to, from, weight);
        }
        if created {
            self.edge_count += 1;
        }
        trace!(from, to, weight, created, "upserted edge");
        Ok(created)
    }

    /// Adds `from -> to` with weight `1.0`.
    pub fn add_edge_unweighted(&mut self, from: usize, to: usize) -> Result<bool> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Sets the weight of `from -> to`, creating the edge if it is absent.
    pub fn set_edge_weight(&mut self, from: usize, to: usize, weight: f64) -> Result<bool> {
        self.add_edge(from, to, weight)
    }

    /// Removes the edge `from -> to` if present.
    ///
    /// Removing a missing edge is not an error. Returns whether an edge was
    /// removed.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let removed = self.storage.remove(from, to);
        if self.mirrors(from, to) {
            self.storage.remove(to, from);
        }
        if removed {
            self.edge_count -= 1;
        }
        trace!(from, to, removed, "removed edge");
        Ok(removed)
    }

    /// Returns `true` if `from -> to` exists. Invalid indices yield `false`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.contains_vertex(from) && self.contains_vertex(to) && self.storage.contains(from, to)
    }

    /// Weight of `from -> to`, or [`NO_EDGE_WEIGHT`] (`-1.0`) if there is none.
    ///
    /// A stored weight of `-1.0` looks the same as a missing edge; use
    /// [`Graph::find_edge_weight`] or [`Graph::has_edge`] to tell them apart.
    pub fn edge_weight(&self, from: usize, to: usize) -> f64 {
        self.find_edge_weight(from, to).unwrap_or(NO_EDGE_WEIGHT)
    }

    /// Weight of `from -> to`, or `None` if there is no such edge.
    pub fn find_edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        if !(self.contains_vertex(from) && self.contains_vertex(to)) {
            return None;
        }
        self.storage.weight(from, to)
    }

    /// Number of outgoing edges of `vertex`.
    ///
    /// A self-loop contributes one.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.storage.out_degree(vertex))
    }

    /// Number of incoming edges of `vertex`.
    ///
    /// Equal to [`Graph::degree`] for undirected graphs. Directed graphs keep
    /// no reverse index, so this scans the whole backing.
    pub fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        if self.is_directed() {
            Ok(self.storage.in_degree(vertex))
        } else {
            Ok(self.storage.out_degree(vertex))
        }
    }

    /// Removes every edge. Vertex count, kind and representation are kept.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.edge_count = 0;
        debug!(vertex_count = self.vertex_count, "cleared graph");
    }

    /// Builds an edge-for-edge copy of this graph using `representation`.
    ///
    /// The copy is populated by iterating every edge of `self` and inserting
    /// it into a freshly created graph.
    pub fn copy(&self, representation: Representation) -> Result<Graph> {
        let mut target = Graph::new(self.vertex_count, self.kind, representation)?;
        for edge in self.edges() {
            target.add_edge(edge.from, edge.to, edge.weight)?;
        }
        debug!(
            from = %self.representation(),
            to = %representation,
            edge_count = target.edge_count,
            "copied graph"
        );
        Ok(target)
    }

    /// Switches this graph to `representation` in place.
    ///
    /// Does nothing if it already uses that representation. On failure the
    /// graph keeps its old backing.
    pub fn convert(&mut self, representation: Representation) -> Result<()> {
        if self.representation() != representation {
            *self = self.copy(representation)?;
        }
        Ok(())
    }

    /// Iterates the outgoing edges of `vertex` in backing-native order.
    pub fn neighbors(&self, vertex: usize) -> Result<EdgeIter<'_>> {
        self.check_vertex(vertex)?;
        Ok(EdgeIter::neighbors(self, vertex))
    }

    /// Iterates every stored edge, vertex by vertex.
    ///
    /// Undirected edges between distinct vertices are yielded once per direction.
    pub fn edges(&self) -> EdgeIter<'_> {
        EdgeIter::all(self)
    }

    /// Ratio of logical edges to the maximum this graph could hold.
    ///
    /// Self-loops count towards the maximum: \(V^2\) directed,
    /// \(V(V+1)/2\) undirected.
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let n = self.vertex_count as f64;
        let max = if self.is_directed() {
            n * n
        } else {
            n * (n + 1.0) / 2.0
        };
        self.edge_count as f64 / max
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edge_count)
            .field("kind", &self.kind)
            .field("representation", &self.representation())
            .finish()
    }
}
