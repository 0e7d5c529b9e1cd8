//! Edge value types.
//!
//! [`EdgeRecord`] is what adjacency lists store: the destination and weight of
//! one outgoing edge, with the source implied by which list holds it.
//! [`Edge`] is what iterators hand out: a self-contained `(from, to, weight)`
//! triple copied out of the backing storage.

use std::fmt;

/// Weight assigned by [`Graph::add_edge_unweighted`](crate::Graph::add_edge_unweighted).
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Value returned by [`Graph::edge_weight`](crate::Graph::edge_weight) for a missing edge.
///
/// Indistinguishable from a stored weight of `-1.0`; use
/// [`Graph::find_edge_weight`](crate::Graph::find_edge_weight) when negative
/// weights are in play.
pub const NO_EDGE_WEIGHT: f64 = -1.0;

/// One outgoing edge stored in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    /// Destination vertex.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

impl EdgeRecord {
    /// Creates a record pointing at `to`.
    #[inline]
    pub const fn new(to: usize, weight: f64) -> Self {
        Self { to, weight }
    }
}

/// A directed edge materialized by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source vertex.
    pub from: usize,
    /// Destination vertex.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

impl Edge {
    /// Creates an edge.
    #[inline]
    pub const fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The same edge pointing the other way.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Endpoints ordered so that the smaller index comes first.
    ///
    /// Two directional records of one undirected edge share the same key.
    #[inline]
    pub fn undirected_key(&self) -> (usize, usize) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((from, to, weight): (usize, usize, f64)) -> Self {
        Edge::new(from, to, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
