//! Start-vertex selection by degree parity.
//!
//! Connectivity is deliberately not examined here: a disconnected graph with
//! a valid degree profile passes and is rejected after traversal, when fewer
//! edges than exist were covered.

use tracing::debug;

use crate::euler::error::EulerError;
use crate::euler::path::EulerKind;
use crate::graph::EulerGraph;

/// Picks the vertex a traversal must start from.
///
/// - two odd-degree vertices: the last odd vertex in enumeration order, [`EulerKind::Trail`]
/// - no odd-degree vertices: the first vertex with positive degree, [`EulerKind::Circuit`]
///
/// # Errors
/// - [`EulerError::EmptyGraph`] if the graph has no vertices
/// - [`EulerError::NotSemiEulerian`] if the odd-degree count is neither 0 nor 2
/// - [`EulerError::NoEdges`] if every vertex is isolated
pub fn select_start<G: EulerGraph>(graph: &G) -> Result<(G::Vertex, EulerKind), EulerError> {
    if graph.vertex_count() == 0 {
        return Err(EulerError::EmptyGraph);
    }

    let mut odd_vertices = 0usize;
    let mut candidate = None;
    for v in graph.vertices() {
        if graph.degree(v) % 2 != 0 {
            odd_vertices += 1;
            candidate = Some(v);
        }
    }

    match (odd_vertices, candidate) {
        (0, _) => {
            let start = graph
                .vertices()
                .find(|&v| graph.degree(v) > 0)
                .ok_or(EulerError::NoEdges {
                    vertices: graph.vertex_count(),
                })?;
            debug!(?start, "all degrees even, searching for a circuit");
            Ok((start, EulerKind::Circuit))
        }
        (2, Some(start)) => {
            debug!(?start, "two odd-degree vertices, searching for an open trail");
            Ok((start, EulerKind::Trail))
        }
        _ => Err(EulerError::NotSemiEulerian { odd_vertices }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{UndirectedGraph, VertexId};

    #[test]
    fn empty_graph() {
        let g = UndirectedGraph::new();
        assert_eq!(select_start(&g), Err(EulerError::EmptyGraph));
    }

    #[test]
    fn isolated_vertices_have_no_edges() {
        let g = UndirectedGraph::with_vertices(4);
        assert_eq!(select_start(&g), Err(EulerError::NoEdges { vertices: 4 }));
    }

    #[test]
    fn even_degrees_pick_first_non_isolated_vertex() {
        // v0 isolated; triangle on 1, 2, 3.
        let g = UndirectedGraph::from_edges(4, &[(1, 2), (2, 3), (3, 1)]);
        assert_eq!(select_start(&g), Ok((VertexId(1), EulerKind::Circuit)));
    }

    #[test]
    fn two_odd_vertices_pick_the_last_one() {
        // Path 0 - 1 - 2: odd vertices are 0 and 2.
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(select_start(&g), Ok((VertexId(2), EulerKind::Trail)));
    }

    #[test]
    fn four_odd_vertices_are_rejected() {
        // Star with three leaves: centre and leaves all odd.
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(
            select_start(&g),
            Err(EulerError::NotSemiEulerian { odd_vertices: 4 })
        );
    }

    #[test]
    fn self_loop_keeps_parity() {
        let g = UndirectedGraph::from_edges(1, &[(0, 0)]);
        assert_eq!(select_start(&g), Ok((VertexId(0), EulerKind::Circuit)));
    }
}
