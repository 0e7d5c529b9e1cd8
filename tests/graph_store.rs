use commc_graph::{
    Edge, ErrorKind, Graph, GraphConfig, GraphError, GraphKind, Representation, Result,
    NO_EDGE_WEIGHT,
};
use std::collections::BTreeSet;

const BOTH: [Representation; 2] = [
    Representation::AdjacencyList,
    Representation::AdjacencyMatrix,
];

fn edge_set(g: &Graph) -> BTreeSet<(usize, usize, u64)> {
    g.edges().map(|e| (e.from, e.to, e.weight.to_bits())).collect()
}

#[test]
fn create_with_zero_vertices_fails_for_every_shape() {
    for repr in BOTH {
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            let err = Graph::new(0, kind, repr).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Argument);
        }
    }
}

#[test]
fn missing_edge_reports_sentinel() -> Result<()> {
    for repr in BOTH {
        let mut g = Graph::new(3, GraphKind::Directed, repr)?;
        g.add_edge(0, 1, 2.0)?;
        assert_eq!(g.edge_weight(1, 2), -1.0);
        assert_eq!(g.edge_weight(1, 2), NO_EDGE_WEIGHT);
        assert!(!g.has_edge(1, 2));
        assert_eq!(g.find_edge_weight(1, 2), None);
    }
    Ok(())
}

#[test]
fn undirected_symmetry_survives_mutation() -> Result<()> {
    for repr in BOTH {
        let mut g = Graph::new(4, GraphKind::Undirected, repr)?;
        g.add_edge(0, 1, 1.0)?;
        g.add_edge(2, 1, 2.0)?;
        g.add_edge(3, 0, 3.0)?;
        g.set_edge_weight(1, 0, 9.0)?;
        g.remove_edge(1, 2)?;

        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u), "({u},{v}) on {repr}");
                assert_eq!(g.edge_weight(u, v), g.edge_weight(v, u));
            }
        }
        assert_eq!(g.edge_weight(0, 1), 9.0);
        assert_eq!(g.edge_count(), 2);
    }
    Ok(())
}

#[test]
fn list_update_keeps_insertion_position() -> Result<()> {
    let mut g = Graph::new(4, GraphKind::Directed, Representation::AdjacencyList)?;
    g.add_edge(0, 3, 1.0)?;
    g.add_edge(0, 1, 1.0)?;
    g.add_edge(0, 2, 1.0)?;
    g.add_edge(0, 3, 5.0)?;

    let edges: Vec<Edge> = g.neighbors(0)?.collect();
    assert_eq!(
        edges,
        vec![Edge::new(0, 3, 5.0), Edge::new(0, 1, 1.0), Edge::new(0, 2, 1.0)]
    );
    Ok(())
}

#[test]
fn copy_is_set_equal_in_both_directions() -> Result<()> {
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        let source = Graph::from_edges(
            6,
            kind,
            Representation::AdjacencyList,
            [(0, 1, 0.5), (1, 2, 1.5), (2, 2, 2.0), (5, 0, 4.0), (3, 4, 0.0)],
        )?;
        for target in BOTH {
            let copy = source.copy(target)?;
            assert_eq!(copy.representation(), target);
            assert_eq!(copy.kind(), kind);
            assert_eq!(copy.edge_count(), source.edge_count());
            assert_eq!(edge_set(&copy), edge_set(&source));

            let back = copy.copy(Representation::AdjacencyList)?;
            assert_eq!(edge_set(&back), edge_set(&source));
        }
    }
    Ok(())
}

#[test]
fn edge_iteration_yields_both_directions_for_undirected() -> Result<()> {
    for repr in BOTH {
        let g = Graph::from_edges(3, GraphKind::Undirected, repr, [(0, 2, 1.0), (1, 1, 2.0)])?;
        let mut edges: Vec<(usize, usize)> = g.edges().map(|e| (e.from, e.to)).collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 2), (1, 1), (2, 0)]);
        assert_eq!(g.edge_count(), 2);
    }
    Ok(())
}

#[test]
fn invalid_vertices_leave_graph_untouched() -> Result<()> {
    for repr in BOTH {
        let mut g = Graph::new(3, GraphKind::Undirected, repr)?;
        g.add_edge(0, 1, 1.0)?;
        let before = edge_set(&g);

        assert!(matches!(
            g.add_edge(1, 3, 1.0),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(g.set_edge_weight(7, 0, 1.0).is_err());
        assert!(g.remove_edge(0, 3).is_err());

        assert_eq!(edge_set(&g), before);
        assert_eq!(g.edge_count(), 1);
    }
    Ok(())
}

#[test]
fn config_drives_construction() -> Result<()> {
    let cfg = GraphConfig::from_json(
        r#"{ "vertex_count": 3, "kind": "undirected", "representation": "adjacency_matrix" }"#,
    )?;
    let mut g = Graph::from_config(&cfg)?;
    g.add_edge_unweighted(0, 2)?;
    assert!(g.has_edge(2, 0));
    assert_eq!(g.representation(), Representation::AdjacencyMatrix);
    assert_eq!(g.config(), cfg);
    Ok(())
}

#[test]
fn convert_in_place_keeps_edges() -> Result<()> {
    let mut g = Graph::from_edges(
        4,
        GraphKind::Directed,
        Representation::AdjacencyMatrix,
        [(0, 1, 1.0), (1, 3, 2.0), (3, 0, 3.0)],
    )?;
    let before = edge_set(&g);
    g.convert(Representation::AdjacencyList)?;
    assert_eq!(g.representation(), Representation::AdjacencyList);
    assert_eq!(edge_set(&g), before);
    assert_eq!(g.in_degree(0)?, 1);
    assert_eq!(g.degree(1)?, 1);
    Ok(())
}
