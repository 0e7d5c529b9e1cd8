//! Error type shared by the graph store, its collaborators and the algorithms.

use std::collections::TryReserveError;

use thiserror::Error;

/// Coarse classification of a [`GraphError`].
///
/// Every failure the crate reports falls in exactly one of these two buckets:
/// a bad input that was rejected before anything was touched, or an
/// allocation that could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an invalid argument (bad vertex, zero vertices, bad config).
    Argument,
    /// An allocation failed or a requested size cannot be represented.
    Memory,
}

/// The error type for all fallible graph operations.
///
/// Argument errors are always detected before any state is mutated, so a
/// graph that returned one of them is exactly as it was before the call.
/// Memory errors leave the graph in its last valid state as well.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with zero vertices.
    #[error("a graph must have at least one vertex")]
    ZeroVertices,

    /// A vertex index was outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// The number of vertices of the graph it was used with.
        vertex_count: usize,
    },

    /// A configuration document could not be parsed or described an invalid graph.
    #[error("invalid graph configuration: {0}")]
    InvalidConfig(String),

    /// The dense backing for this many vertices would not fit in the address space.
    #[error("an adjacency matrix for {vertex_count} vertices overflows usize")]
    CapacityOverflow {
        /// The vertex count that was requested.
        vertex_count: usize,
    },

    /// The allocator refused to provide the requested memory.
    #[error("memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl GraphError {
    /// Returns which category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroVertices | Self::VertexOutOfRange { .. } | Self::InvalidConfig(_) => {
                ErrorKind::Argument
            }
            Self::CapacityOverflow { .. } | Self::Allocation(_) => ErrorKind::Memory,
        }
    }

    /// Returns `true` for errors caused by invalid caller input.
    pub fn is_argument_error(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    /// Returns `true` for allocation failures.
    pub fn is_memory_error(&self) -> bool {
        self.kind() == ErrorKind::Memory
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
