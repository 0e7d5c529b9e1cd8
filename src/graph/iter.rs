//! Representation-independent edge cursor.
//!
//! [`EdgeIter`] is the only place that knows how to walk each backing: it
//! skips empty adjacency sequences for lists and unset cells for matrices, so
//! algorithms enumerate "outgoing edges of `v`" without looking at the
//! representation.
//!
//! Both modes are the same cursor over a half-open range of source vertices:
//! neighbor iteration is the range `v..v + 1`, edge iteration is
//! `0..vertex_count`.

use std::iter::FusedIterator;

use crate::graph::edge::Edge;
use crate::graph::storage::{AdjacencyList, AdjacencyMatrix, Storage};
use crate::graph::store::Graph;

enum Cursor<'g> {
    List {
        adj: &'g AdjacencyList,
        vertex: usize,
        pos: usize,
    },
    Matrix {
        adj: &'g AdjacencyMatrix,
        row: usize,
        col: usize,
    },
}

/// A lazy, forward-only sequence of edges borrowed from a [`Graph`].
///
/// Edges are produced by value. Vertices are scanned in increasing order;
/// within a vertex, lists yield in insertion order and matrices in ascending
/// destination order.
///
/// The iterator cannot be restarted; create a new one to scan again.
///
/// # Examples
///
/// ```
/// use commc_graph::{Graph, GraphKind, Representation};
///
/// let mut g = Graph::new(3, GraphKind::Directed, Representation::AdjacencyList)?;
/// g.add_edge(0, 2, 1.0)?;
/// g.add_edge(0, 1, 1.0)?;
///
/// let targets: Vec<usize> = g.neighbors(0)?.map(|e| e.to).collect();
/// assert_eq!(targets, vec![2, 1]);
/// # Ok::<(), commc_graph::GraphError>(())
/// ```
pub struct EdgeIter<'g> {
    cursor: Cursor<'g>,
    end: usize,
}

impl<'g> EdgeIter<'g> {
    fn over(graph: &'g Graph, start: usize, end: usize) -> Self {
        let cursor = match graph.storage() {
            Storage::List(adj) => Cursor::List {
                adj,
                vertex: start,
                pos: 0,
            },
            Storage::Matrix(adj) => Cursor::Matrix {
                adj,
                row: start,
                col: 0,
            },
        };
        Self { cursor, end }
    }

    /// Outgoing edges of `vertex`. The caller has validated `vertex`.
    pub(crate) fn neighbors(graph: &'g Graph, vertex: usize) -> Self {
        Self::over(graph, vertex, vertex + 1)
    }

    /// Every edge of the graph.
    pub(crate) fn all(graph: &'g Graph) -> Self {
        Self::over(graph, 0, graph.vertex_count())
    }

    /// Returns `true` if another edge is available.
    ///
    /// Does not consume an edge, but moves the cursor past empty vertices or
    /// unset matrix cells so the next call to [`Iterator::next`] is direct.
    pub fn has_next(&mut self) -> bool {
        let end = self.end;
        match &mut self.cursor {
            Cursor::List { adj, vertex, pos } => {
                while *vertex < end {
                    if *pos < adj.records(*vertex).len() {
                        return true;
                    }
                    *vertex += 1;
                    *pos = 0;
                }
                false
            }
            Cursor::Matrix { adj, row, col } => {
                while *row < end {
                    if let Some(offset) = adj.row(*row)[*col..].iter().position(|&set| set) {
                        *col += offset;
                        return true;
                    }
                    *row += 1;
                    *col = 0;
                }
                false
            }
        }
    }
}

impl Iterator for EdgeIter<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if !self.has_next() {
            return None;
        }
        match &mut self.cursor {
            Cursor::List { adj, vertex, pos } => {
                let record = adj.records(*vertex)[*pos];
                *pos += 1;
                Some(Edge::new(*vertex, record.to, record.weight))
            }
            Cursor::Matrix { adj, row, col } => {
                let edge = Edge::new(*row, *col, adj.raw_weight(*row, *col));
                *col += 1;
                Some(edge)
            }
        }
    }
}

impl FusedIterator for EdgeIter<'_> {}

#[cfg(test)]
mod tests {
    use crate::{Edge, Graph, GraphKind, Representation};

    fn sample(repr: Representation) -> Graph {
        let mut g = Graph::new(5, GraphKind::Directed, repr).unwrap();
        g.add_edge(3, 1, 3.1).unwrap();
        g.add_edge(0, 4, 0.4).unwrap();
        g.add_edge(0, 2, 0.2).unwrap();
        g.add_edge(3, 0, 3.0).unwrap();
        g
    }

    #[test]
    fn test_list_edges_follow_insertion_order() {
        let g = sample(Representation::AdjacencyList);
        let edges: Vec<Edge> = g.edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge::new(0, 4, 0.4),
                Edge::new(0, 2, 0.2),
                Edge::new(3, 1, 3.1),
                Edge::new(3, 0, 3.0),
            ]
        );
    }

    #[test]
    fn test_matrix_edges_follow_column_order() {
        let g = sample(Representation::AdjacencyMatrix);
        let edges: Vec<Edge> = g.edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge::new(0, 2, 0.2),
                Edge::new(0, 4, 0.4),
                Edge::new(3, 0, 3.0),
                Edge::new(3, 1, 3.1),
            ]
        );
    }

    #[test]
    fn test_neighbors_stay_on_one_vertex() {
        for repr in [Representation::AdjacencyList, Representation::AdjacencyMatrix] {
            let g = sample(repr);
            assert_eq!(g.neighbors(1).unwrap().count(), 0);
            assert_eq!(g.neighbors(2).unwrap().count(), 0);
            let from_three: Vec<usize> = g.neighbors(3).unwrap().map(|e| e.from).collect();
            assert_eq!(from_three, vec![3, 3]);
        }
    }

    #[test]
    fn test_has_next_does_not_consume() {
        for repr in [Representation::AdjacencyList, Representation::AdjacencyMatrix] {
            let g = sample(repr);
            let mut it = g.neighbors(0).unwrap();
            assert!(it.has_next());
            assert!(it.has_next());
            assert!(it.next().is_some());
            assert!(it.has_next());
            assert!(it.next().is_some());
            assert!(!it.has_next());
            assert_eq!(it.next(), None);
            assert_eq!(it.next(), None);
        }
    }

    #[test]
    fn test_empty_graph_yields_nothing() {
        for repr in [Representation::AdjacencyList, Representation::AdjacencyMatrix] {
            let g = Graph::new(3, GraphKind::Undirected, repr).unwrap();
            let mut it = g.edges();
            assert!(!it.has_next());
            assert_eq!(it.next(), None);
        }
    }

    #[test]
    fn test_last_vertex_last_column() {
        for repr in [Representation::AdjacencyList, Representation::AdjacencyMatrix] {
            let mut g = Graph::new(3, GraphKind::Directed, repr).unwrap();
            g.add_edge(2, 2, 9.0).unwrap();
            let edges: Vec<Edge> = g.edges().collect();
            assert_eq!(edges, vec![Edge::new(2, 2, 9.0)]);
        }
    }
}
