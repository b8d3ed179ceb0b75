//! Independent verification of Euler trails.

use crate::euler::error::TrailError;
use crate::graph::{EdgeMap, EulerGraph};

/// Checks that `edges`, walked from `start`, uses every edge of `graph` exactly once.
///
/// Checks run edge by edge, so the reported position is the first violation.
///
/// # Errors
/// - [`TrailError::Disconnected`] if an edge is not incident to the current walk vertex
/// - [`TrailError::Repeated`] if an edge appears twice
/// - [`TrailError::Incomplete`] if the walk is valid but misses edges
pub fn check_trail<G: EulerGraph>(
    graph: &G,
    start: G::Vertex,
    edges: &[G::Edge],
) -> Result<(), TrailError> {
    let mut used = EdgeMap::new(graph, false);
    let mut current = start;
    for (position, &edge) in edges.iter().enumerate() {
        if !graph.is_incident(edge, current) {
            return Err(TrailError::Disconnected { position });
        }
        if !used.try_mark(edge) {
            return Err(TrailError::Repeated { position });
        }
        current = graph.opposite(edge, current);
    }

    if edges.len() != graph.edge_count() {
        return Err(TrailError::Incomplete {
            used: edges.len(),
            total: graph.edge_count(),
        });
    }
    Ok(())
}
