use serde::{Deserialize, Serialize};

use crate::graph::EulerGraph;

/// Shape of an Euler traversal, decided by degree parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerKind {
    /// Every vertex has even degree; the walk returns to its start.
    Circuit,
    /// Exactly two vertices have odd degree; the walk ends at the other one.
    Trail,
}

/// An Euler path: a start vertex and every edge of the graph, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerPath<V, E> {
    start: V,
    edges: Vec<E>,
    kind: EulerKind,
}

impl<V: Copy, E: Copy> EulerPath<V, E> {
    pub(crate) fn new(start: V, edges: Vec<E>, kind: EulerKind) -> Self {
        Self { start, edges, kind }
    }

    /// Vertex the walk starts from.
    #[inline]
    pub fn start(&self) -> V {
        self.start
    }

    /// Edges in walk order.
    #[inline]
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of edges walked.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false` for a path returned by the algorithm, which requires at least one edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the graph was classified as a circuit or an open trail.
    #[inline]
    pub fn kind(&self) -> EulerKind {
        self.kind
    }

    /// Splits the path into its start vertex and edge sequence.
    pub fn into_parts(self) -> (V, Vec<E>) {
        (self.start, self.edges)
    }

    /// Returns the vertex sequence of the walk, `len() + 1` entries long.
    pub fn vertices<G>(&self, graph: &G) -> Vec<V>
    where
        G: EulerGraph<Vertex = V, Edge = E>,
    {
        let mut walk = Vec::with_capacity(self.edges.len() + 1);
        let mut current = self.start;
        walk.push(current);
        for &edge in &self.edges {
            current = graph.opposite(edge, current);
            walk.push(current);
        }
        walk
    }

    /// Returns the vertex the walk ends at.
    pub fn end<G>(&self, graph: &G) -> V
    where
        G: EulerGraph<Vertex = V, Edge = E>,
    {
        self.edges
            .iter()
            .fold(self.start, |current, &edge| graph.opposite(edge, current))
    }

    /// Returns `true` if the walk ends where it started.
    pub fn is_closed<G>(&self, graph: &G) -> bool
    where
        G: EulerGraph<Vertex = V, Edge = E>,
        V: PartialEq,
    {
        self.end(graph) == self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, UndirectedGraph, VertexId};

    #[test]
    fn walk_accessors() {
        let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let path = EulerPath::new(VertexId(0), vec![EdgeId(0), EdgeId(1)], EulerKind::Trail);

        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.vertices(&g), vec![VertexId(0), VertexId(1), VertexId(2)]);
        assert_eq!(path.end(&g), VertexId(2));
        assert!(!path.is_closed(&g));
        assert_eq!(path.into_parts(), (VertexId(0), vec![EdgeId(0), EdgeId(1)]));
    }
}
