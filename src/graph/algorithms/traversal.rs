//! Breadth-first and depth-first traversal.
//!
//! Both walk outgoing edges through [`EdgeIter`], so they behave the same on
//! either backing apart from the neighbor enumeration order the backing
//! defines. Each reachable vertex is passed to the `visit` callback exactly
//! once; vertices in other components are never touched.
//!
//! Scratch memory (the visited flags) is allocated up front and its failure is
//! reported. A neighbor that cannot be queued because the work list failed to
//! grow is skipped with a warning and the traversal carries on with what it
//! has, so under memory pressure some reachable vertices may go unvisited.

use tracing::{debug, warn};

use crate::collections::{try_filled, FifoQueue, LifoStack};
use crate::error::Result;
use crate::graph::iter::EdgeIter;
use crate::graph::store::Graph;

/// Breadth-first traversal from `start`.
///
/// A vertex is marked visited when it is queued, so it enters the queue at
/// most once. Siblings are visited in the order the backing enumerates
/// them, which is not necessarily ascending.
///
/// # Errors
/// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange) if
/// `start` is invalid; a memory error if the visited flags cannot be allocated.
///
/// # Examples
///
/// ```
/// use commc_graph::{algorithms::bfs, Graph, GraphKind, Representation};
///
/// let mut g = Graph::new(4, GraphKind::Undirected, Representation::AdjacencyList)?;
/// g.add_edge_unweighted(0, 1)?;
/// g.add_edge_unweighted(0, 2)?;
/// g.add_edge_unweighted(1, 3)?;
///
/// let mut order = Vec::new();
/// bfs(&g, 0, |v| order.push(v))?;
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// # Ok::<(), commc_graph::GraphError>(())
/// ```
pub fn bfs<F>(graph: &Graph, start: usize, mut visit: F) -> Result<()>
where
    F: FnMut(usize),
{
    graph.check_vertex(start)?;
    let mut visited = try_filled(graph.vertex_count(), false)?;
    let mut queue = FifoQueue::new();

    queue.enqueue(start)?;
    visited[start] = true;

    let mut visited_count = 0usize;
    while let Some(u) = queue.dequeue() {
        visit(u);
        visited_count += 1;

        for edge in EdgeIter::neighbors(graph, u) {
            let v = edge.to;
            if visited[v] {
                continue;
            }
            match queue.enqueue(v) {
                Ok(()) => visited[v] = true,
                Err(err) => warn!(vertex = v, %err, "bfs skipped a neighbor"),
            }
        }
    }

    debug!(start, visited = visited_count, "bfs finished");
    Ok(())
}

/// Iterative depth-first traversal from `start`.
///
/// A vertex is marked when it is popped, not when it is pushed, so the same
/// vertex can sit on the stack several times; later copies are discarded.
/// All unvisited neighbors are pushed in enumeration order, which makes the
/// last-enumerated neighbor the first one explored. This is the mirror image
/// of the order a recursive depth-first search would produce.
///
/// # Errors
/// Same as [`bfs`].
///
/// # Examples
///
/// ```
/// use commc_graph::{algorithms::dfs, Graph, GraphKind, Representation};
///
/// let mut g = Graph::new(4, GraphKind::Directed, Representation::AdjacencyList)?;
/// for v in 1..4 {
///     g.add_edge_unweighted(0, v)?;
/// }
///
/// let mut order = Vec::new();
/// dfs(&g, 0, |v| order.push(v))?;
/// assert_eq!(order, vec![0, 3, 2, 1]);
/// # Ok::<(), commc_graph::GraphError>(())
/// ```
pub fn dfs<F>(graph: &Graph, start: usize, mut visit: F) -> Result<()>
where
    F: FnMut(usize),
{
    graph.check_vertex(start)?;
    let mut visited = try_filled(graph.vertex_count(), false)?;
    let mut stack = LifoStack::new();

    stack.push(start)?;

    let mut visited_count = 0usize;
    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visit(u);
        visited_count += 1;

        for edge in EdgeIter::neighbors(graph, u) {
            let v = edge.to;
            if visited[v] {
                continue;
            }
            if let Err(err) = stack.push(v) {
                warn!(vertex = v, %err, "dfs skipped a neighbor");
            }
        }
    }

    debug!(start, visited = visited_count, "dfs finished");
    Ok(())
}

/// Vertices reachable from `start` in [`bfs`] order.
pub fn bfs_order(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let mut order = Vec::new();
    bfs(graph, start, |v| order.push(v))?;
    Ok(order)
}

/// Vertices reachable from `start` in [`dfs`] order.
pub fn dfs_order(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let mut order = Vec::new();
    dfs(graph, start, |v| order.push(v))?;
    Ok(order)
}

/// Returns `true` if every vertex of the graph is reachable from `start`.
///
/// For undirected graphs this is plain connectivity.
pub fn is_connected_from(graph: &Graph, start: usize) -> Result<bool> {
    let mut reached = 0usize;
    bfs(graph, start, |_| reached += 1)?;
    Ok(reached == graph.vertex_count())
}
