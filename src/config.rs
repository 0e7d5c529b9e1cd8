//! Declarative graph construction settings.
//!
//! A [`GraphConfig`] describes the shape of a graph (vertex count, kind,
//! representation) and nothing else. It can be built fluently or read from
//! JSON:
//!
//! ```
//! use commc_graph::{GraphConfig, GraphKind, Representation};
//!
//! let cfg = GraphConfig::from_json(r#"{ "vertex_count": 8, "kind": "undirected" }"#)?;
//! assert_eq!(cfg, GraphConfig::new(8).undirected());
//! assert_eq!(cfg.representation, Representation::AdjacencyList);
//!
//! let g = cfg.matrix().build()?;
//! assert_eq!(g.representation(), Representation::AdjacencyMatrix);
//! # Ok::<(), commc_graph::GraphError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Representation};

/// Shape of a graph to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Number of vertices; must be positive.
    pub vertex_count: usize,
    /// Directedness. Defaults to directed.
    #[serde(default)]
    pub kind: GraphKind,
    /// Backing layout. Defaults to adjacency list.
    #[serde(default)]
    pub representation: Representation,
}

impl GraphConfig {
    /// A directed adjacency-list configuration with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            kind: GraphKind::default(),
            representation: Representation::default(),
        }
    }

    /// Sets the kind.
    #[must_use]
    pub fn kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `kind(GraphKind::Directed)`.
    #[must_use]
    pub fn directed(self) -> Self {
        self.kind(GraphKind::Directed)
    }

    /// Shorthand for `kind(GraphKind::Undirected)`.
    #[must_use]
    pub fn undirected(self) -> Self {
        self.kind(GraphKind::Undirected)
    }

    /// Sets the representation.
    #[must_use]
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Shorthand for `representation(Representation::AdjacencyList)`.
    #[must_use]
    pub fn list(self) -> Self {
        self.representation(Representation::AdjacencyList)
    }

    /// Shorthand for `representation(Representation::AdjacencyMatrix)`.
    #[must_use]
    pub fn matrix(self) -> Self {
        self.representation(Representation::AdjacencyMatrix)
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    /// [`GraphError::InvalidConfig`] for malformed JSON or unknown fields,
    /// [`GraphError::ZeroVertices`] for `"vertex_count": 0`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration without allocating a graph.
    pub fn validate(&self) -> Result<()> {
        if self.vertex_count == 0 {
            return Err(GraphError::ZeroVertices);
        }
        Ok(())
    }

    /// Creates an empty graph with this shape.
    pub fn build(&self) -> Result<Graph> {
        Graph::from_config(self)
    }
}

impl Graph {
    /// Creates an empty graph described by `config`.
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        Graph::new(config.vertex_count, config.kind, config.representation)
    }

    /// The configuration that would recreate this graph's shape.
    pub fn config(&self) -> GraphConfig {
        GraphConfig {
            vertex_count: self.vertex_count(),
            kind: self.kind(),
            representation: self.representation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let cfg = GraphConfig::new(3).undirected().matrix();
        assert_eq!(cfg.kind, GraphKind::Undirected);
        assert_eq!(cfg.representation, Representation::AdjacencyMatrix);
        let cfg = cfg.directed().list();
        assert_eq!(cfg, GraphConfig::new(3));
    }

    #[test]
    fn test_from_json_full() {
        let cfg = GraphConfig::from_json(
            r#"{"vertex_count": 5, "kind": "directed", "representation": "adjacency_matrix"}"#,
        )
        .unwrap();
        assert_eq!(cfg, GraphConfig::new(5).matrix());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GraphConfig::from_json("{"),
            Err(GraphError::InvalidConfig(_))
        ));
        assert!(matches!(
            GraphConfig::from_json(r#"{"vertex_count": 2, "weights": []}"#),
            Err(GraphError::InvalidConfig(_))
        ));
        assert!(matches!(
            GraphConfig::from_json(r#"{"vertex_count": 2, "kind": "sideways"}"#),
            Err(GraphError::InvalidConfig(_))
        ));
        assert_eq!(
            GraphConfig::from_json(r#"{"vertex_count": 0}"#),
            Err(GraphError::ZeroVertices)
        );
    }

    #[test]
    fn test_round_trip_through_graph() {
        let cfg = GraphConfig::new(4).undirected().matrix();
        let g = cfg.build().unwrap();
        assert_eq!(g.config(), cfg);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(GraphConfig::from_json(&json).unwrap(), cfg);
    }
}
