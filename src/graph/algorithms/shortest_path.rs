//! Single-source shortest paths (Dijkstra) with lazy deletion.
//!
//! Instead of a decrease-key operation, every improvement pushes a fresh
//! `(vertex, distance)` entry. Superseded entries stay in the heap and are
//! discarded when popped because their vertex is already finalized.
//!
//! Edge weights must be non-negative. This is not checked; negative weights
//! give meaningless distances but never panic.

use core::cmp::Ordering;

use tracing::debug;

use crate::collections::{try_filled, MinPriorityQueue};
use crate::error::Result;
use crate::graph::iter::EdgeIter;
use crate::graph::store::Graph;

#[derive(Debug, Clone, Copy)]
struct Frontier {
    vertex: usize,
    distance: f64,
}

fn by_distance(a: &Frontier, b: &Frontier) -> Ordering {
    a.distance
        .partial_cmp(&b.distance)
        .unwrap_or(Ordering::Equal)
}

/// Result of a single-source shortest-path run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The vertex distances are measured from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to every vertex, indexed by vertex. Unreachable is `+∞`.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance to `vertex`, or `None` if `vertex` is not in the graph.
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Returns `true` if `vertex` has a finite distance.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some_and(f64::is_finite)
    }

    /// The vertex preceding `vertex` on its shortest path.
    ///
    /// `None` for the source, unreachable vertices and invalid indices.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Vertices on a shortest path from the source to `target`, both included.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Consumes the result, keeping only the distances.
    pub fn into_distances(self) -> Vec<f64> {
        self.distances
    }
}

/// Computes shortest distances and predecessors from `source`.
///
/// # Errors
/// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange) if
/// `source` is invalid; a memory error if scratch buffers or the priority
/// queue cannot grow. A partially relaxed result is never returned.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();

    let mut distances = try_filled(n, f64::INFINITY)?;
    let mut predecessors = try_filled(n, None)?;
    let mut finalized = try_filled(n, false)?;
    let mut frontier = MinPriorityQueue::new(by_distance);

    distances[source] = 0.0;
    frontier.insert(Frontier {
        vertex: source,
        distance: 0.0,
    })?;

    let mut settled = 0usize;
    let mut stale = 0usize;
    while let Some(Frontier { vertex: u, .. }) = frontier.extract_min() {
        if finalized[u] {
            stale += 1;
            continue;
        }
        finalized[u] = true;
        settled += 1;

        for edge in EdgeIter::neighbors(graph, u) {
            let v = edge.to;
            if finalized[v] {
                continue;
            }
            let candidate = distances[u] + edge.weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                frontier.insert(Frontier {
                    vertex: v,
                    distance: candidate,
                })?;
            }
        }
    }

    debug!(source, settled, stale, "dijkstra finished");
    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Shortest distance from `source` to every vertex.
///
/// Unreachable vertices get `f64::INFINITY`; `source` itself gets `0.0`.
///
/// # Examples
///
/// ```
/// use commc_graph::{algorithms::dijkstra, Graph, GraphKind, Representation};
///
/// let g = Graph::from_edges(
///     4,
///     GraphKind::Directed,
///     Representation::AdjacencyList,
///     [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 1.0)],
/// )?;
/// assert_eq!(dijkstra(&g, 0)?, vec![0.0, 1.0, 3.0, 4.0]);
/// # Ok::<(), commc_graph::GraphError>(())
/// ```
pub fn dijkstra(graph: &Graph, source: usize) -> Result<Vec<f64>> {
    shortest_paths(graph, source).map(ShortestPaths::into_distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphKind, Representation};

    const BOTH: [Representation; 2] = [
        Representation::AdjacencyList,
        Representation::AdjacencyMatrix,
    ];

    fn classic(repr: Representation) -> Graph {
        Graph::from_edges(
            4,
            GraphKind::Directed,
            repr,
            [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_classic_distances() {
        for repr in BOTH {
            assert_eq!(dijkstra(&classic(repr), 0).unwrap(), vec![0.0, 1.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn test_paths() {
        for repr in BOTH {
            let sp = shortest_paths(&classic(repr), 0).unwrap();
            assert_eq!(sp.source(), 0);
            assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));
            assert_eq!(sp.path_to(0), Some(vec![0]));
            assert_eq!(sp.predecessor(2), Some(1));
            assert_eq!(sp.predecessor(0), None);
            assert_eq!(sp.distance(9), None);
            assert_eq!(sp.path_to(9), None);
        }
    }

    #[test]
    fn test_unreachable_is_infinite() {
        for repr in BOTH {
            let sp = shortest_paths(&classic(repr), 2).unwrap();
            assert_eq!(sp.distances(), &[f64::INFINITY, f64::INFINITY, 0.0, 1.0]);
            assert!(!sp.is_reachable(0));
            assert_eq!(sp.path_to(1), None);
        }
    }

    #[test]
    fn test_undirected_and_zero_weights() {
        for repr in BOTH {
            let g = Graph::from_edges(
                4,
                GraphKind::Undirected,
                repr,
                [(0, 1, 0.0), (1, 2, 2.5), (2, 3, 0.5), (0, 3, 10.0)],
            )
            .unwrap();
            assert_eq!(dijkstra(&g, 3).unwrap(), vec![3.0, 3.0, 0.5, 0.0]);
        }
    }

    #[test]
    fn test_invalid_source() {
        for repr in BOTH {
            let err = dijkstra(&classic(repr), 4).unwrap_err();
            assert!(err.is_argument_error());
        }
    }

    #[test]
    fn test_single_vertex() {
        let g = Graph::new(1, GraphKind::Directed, Representation::AdjacencyMatrix).unwrap();
        assert_eq!(dijkstra(&g, 0).unwrap(), vec![0.0]);
    }
}
