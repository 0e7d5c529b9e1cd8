//! Directedness and representation selectors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// `add_edge(u, v)` creates `u -> v` only.
    #[default]
    Directed,
    /// `add_edge(u, v)` creates one logical edge usable in both directions.
    Undirected,
}

impl GraphKind {
    /// Returns true if the graph is directed.
    #[inline]
    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
        })
    }
}

/// The backing layout of a graph.
///
/// | | `AdjacencyList` | `AdjacencyMatrix` |
/// |---|---|---|
/// | space | \(O(V + E)\) | \(O(V^2)\) |
/// | `has_edge` | \(O(\text{degree})\) | \(O(1)\) |
/// | neighbor scan | \(O(\text{degree})\) | \(O(V)\) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Per-vertex sequences of outgoing edges.
    #[default]
    AdjacencyList,
    /// Dense weight and existence grids.
    AdjacencyMatrix,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Representation::AdjacencyList => "adjacency_list",
            Representation::AdjacencyMatrix => "adjacency_matrix",
        })
    }
}
