//! Hierholzer's edge-marking depth-first traversal.
//!
//! From the current vertex, each incident edge that is still unmarked is
//! marked, the walk continues at its opposite endpoint, and the edge is
//! emitted once everything beyond it has been explored. Emission is therefore
//! post-order; reversing the emitted sequence yields the trail from the start
//! vertex.
//!
//! An edge is emitted iff it was marked by the step that emits it, so every
//! edge ends up either marked and emitted exactly once, or never marked (when
//! it is unreachable from the start).

use crate::euler::options::TraversalStrategy;
use crate::graph::{EdgeMap, EulerGraph};

/// Statistics gathered during a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TraversalStats {
    /// Deepest frame stack (iterative) or call depth (recursive) reached.
    pub max_depth: usize,
}

/// Runs the traversal from `start` and returns the edges in trail order.
///
/// `visited` must cover every edge of `graph`; edges already marked are
/// treated as used.
pub(crate) fn find_trail<G: EulerGraph>(
    graph: &G,
    start: G::Vertex,
    visited: &mut EdgeMap<'_, G, bool>,
    strategy: TraversalStrategy,
) -> (Vec<G::Edge>, TraversalStats) {
    let mut path = Vec::with_capacity(graph.edge_count());
    let stats = match strategy {
        TraversalStrategy::Iterative => walk_iterative(graph, start, visited, &mut path),
        TraversalStrategy::Recursive => {
            let mut stats = TraversalStats::default();
            walk_recursive(graph, start, visited, &mut path, 1, &mut stats);
            stats
        }
    };
    path.reverse();
    (path, stats)
}

struct Frame<V, E, I> {
    vertex: V,
    /// Edge used to enter this frame; emitted when the frame is popped.
    via: Option<E>,
    edges: I,
}

fn walk_iterative<G: EulerGraph>(
    graph: &G,
    start: G::Vertex,
    visited: &mut EdgeMap<'_, G, bool>,
    path: &mut Vec<G::Edge>,
) -> TraversalStats {
    let mut stats = TraversalStats::default();
    let mut stack = vec![Frame {
        vertex: start,
        via: None,
        edges: graph.incident_edges(start),
    }];

    while let Some(frame) = stack.last_mut() {
        let next = frame.edges.by_ref().find(|&e| !visited.is_marked(e));
        match next {
            Some(edge) => {
                visited.set(edge, true);
                let vertex = graph.opposite(edge, frame.vertex);
                stack.push(Frame {
                    vertex,
                    via: Some(edge),
                    edges: graph.incident_edges(vertex),
                });
                stats.max_depth = stats.max_depth.max(stack.len());
            }
            None => {
                if let Some(edge) = stack.pop().and_then(|f| f.via) {
                    path.push(edge);
                }
            }
        }
    }
    stats.max_depth = stats.max_depth.max(1);
    stats
}

fn walk_recursive<G: EulerGraph>(
    graph: &G,
    current: G::Vertex,
    visited: &mut EdgeMap<'_, G, bool>,
    path: &mut Vec<G::Edge>,
    depth: usize,
    stats: &mut TraversalStats,
) {
    stats.max_depth = stats.max_depth.max(depth);
    for edge in graph.incident_edges(current) {
        if visited.try_mark(edge) {
            let next = graph.opposite(edge, current);
            walk_recursive(graph, next, visited, path, depth + 1, stats);
            path.push(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, UndirectedGraph, VertexId};

    fn run(g: &UndirectedGraph, start: usize, strategy: TraversalStrategy) -> Vec<EdgeId> {
        let mut visited = EdgeMap::new(g, false);
        find_trail(g, VertexId(start), &mut visited, strategy).0
    }

    #[test]
    fn triangle_is_walked_in_incidence_order() {
        // e0: 0-1, e1: 1-2, e2: 2-0
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let expected = vec![EdgeId(0), EdgeId(1), EdgeId(2)];
        assert_eq!(run(&g, 0, TraversalStrategy::Iterative), expected);
        assert_eq!(run(&g, 0, TraversalStrategy::Recursive), expected);
    }

    #[test]
    fn detours_are_spliced_in() {
        // Two triangles sharing vertex 0: 0-1-2-0 and 0-3-4-0.
        let g = UndirectedGraph::from_edges(
            5,
            &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)],
        );
        let iterative = run(&g, 0, TraversalStrategy::Iterative);
        assert_eq!(iterative.len(), 6);
        assert_eq!(iterative, run(&g, 0, TraversalStrategy::Recursive));
    }

    #[test]
    fn dead_end_first_still_yields_trail_order() {
        // Odd vertices 0 and 3; from 0 the walk reaches 3 before the triangle.
        // e0: 0-1, e1: 1-3, e2: 1-2, e3: 2-4, e4: 4-1
        let g = UndirectedGraph::from_edges(5, &[(0, 1), (1, 3), (1, 2), (2, 4), (4, 1)]);
        let trail = run(&g, 0, TraversalStrategy::Iterative);
        assert_eq!(
            trail,
            vec![EdgeId(0), EdgeId(2), EdgeId(3), EdgeId(4), EdgeId(1)]
        );
        assert_eq!(trail, run(&g, 0, TraversalStrategy::Recursive));
    }

    #[test]
    fn unreachable_edges_stay_unmarked() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]);
        let mut visited = EdgeMap::new(&g, false);
        let (trail, _) = find_trail(&g, VertexId(0), &mut visited, TraversalStrategy::Iterative);
        assert_eq!(trail.len(), 2);
        assert!(!visited.is_marked(EdgeId(2)));
        assert!(!visited.is_marked(EdgeId(3)));
    }

    #[test]
    fn depth_is_reported() {
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut visited = EdgeMap::new(&g, false);
        let (_, stats) = find_trail(&g, VertexId(0), &mut visited, TraversalStrategy::Iterative);
        // start frame plus one per edge along the single cycle
        assert_eq!(stats.max_depth, 4);
    }
}
