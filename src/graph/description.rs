//! Serializable graph descriptions.
//!
//! A [`GraphSpec`] is the plain-data form of an [`UndirectedGraph`]: a vertex
//! count plus endpoint pairs for edges and arcs. It is what fixtures and
//! callers holding graphs as JSON deserialize into before building.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::traits::EulerGraph;
use crate::graph::undirected::{ArcId, UndirectedGraph, VertexId};

/// Plain-data description of a mixed multigraph.
///
/// ```json
/// { "vertices": 3, "edges": [[0, 1], [1, 2], [2, 0]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Number of vertices; ids are `0..vertices`.
    pub vertices: usize,
    /// Undirected edges as endpoint pairs.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
    /// Directed arcs as `(from, to)` pairs.
    #[serde(default)]
    pub arcs: Vec<(usize, usize)>,
}

/// Errors produced while loading or building a [`GraphSpec`].
#[derive(Debug, Error)]
pub enum GraphSpecError {
    /// The input is not a valid JSON graph description.
    #[error("malformed graph description: {0}")]
    Parse(#[from] serde_json::Error),
    /// An edge or arc names a vertex that does not exist.
    #[error("{kind} {index} references vertex {vertex}, but the graph has {vertices} vertices")]
    VertexOutOfRange {
        /// `"edge"` or `"arc"`.
        kind: &'static str,
        /// Position of the offending entry in its list.
        index: usize,
        /// The out-of-range vertex.
        vertex: usize,
        /// Declared vertex count.
        vertices: usize,
    },
}

impl GraphSpec {
    /// Parses a JSON graph description.
    ///
    /// # Errors
    /// Returns [`GraphSpecError::Parse`] if `json` is not a valid description.
    pub fn from_json(json: &str) -> Result<Self, GraphSpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Captures the topology of `graph`.
    pub fn from_graph(graph: &UndirectedGraph) -> Self {
        let pair = |(a, b): (VertexId, VertexId)| (a.index(), b.index());
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().map(|e| pair(graph.endpoints(e))).collect(),
            arcs: (0..graph.arc_count())
                .map(|i| pair(graph.arc_endpoints(ArcId(i))))
                .collect(),
        }
    }

    /// Builds the described graph.
    ///
    /// Edges and arcs keep their listed order, so vertex incidence order (and
    /// therefore traversal order) is reproducible from the description.
    ///
    /// # Errors
    /// Returns [`GraphSpecError::VertexOutOfRange`] for the first edge or arc
    /// naming a vertex `>= vertices`.
    pub fn build(&self) -> Result<UndirectedGraph, GraphSpecError> {
        self.check_endpoints("edge", &self.edges)?;
        self.check_endpoints("arc", &self.arcs)?;

        let mut g = UndirectedGraph::with_capacity(self.vertices, self.edges.len());
        g.add_vertices(self.vertices);
        for &(u, v) in &self.edges {
            g.add_edge(VertexId(u), VertexId(v));
        }
        for &(u, v) in &self.arcs {
            g.add_arc(VertexId(u), VertexId(v));
        }
        Ok(g)
    }

    fn check_endpoints(
        &self,
        kind: &'static str,
        pairs: &[(usize, usize)],
    ) -> Result<(), GraphSpecError> {
        for (index, &(u, v)) in pairs.iter().enumerate() {
            if let Some(vertex) = [u, v].into_iter().find(|&x| x >= self.vertices) {
                return Err(GraphSpecError::VertexOutOfRange {
                    kind,
                    index,
                    vertex,
                    vertices: self.vertices,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_builds() {
        let spec = GraphSpec::from_json(r#"{"vertices": 3, "edges": [[0,1],[1,2]], "arcs": [[2,0]]}"#)
            .unwrap();
        let g = spec.build().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.arc_count(), 1);
        assert_eq!(GraphSpec::from_graph(&g), spec);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let spec = GraphSpec::from_json(r#"{"vertices": 2}"#).unwrap();
        assert!(spec.edges.is_empty());
        assert!(spec.arcs.is_empty());
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let spec = GraphSpec {
            vertices: 2,
            edges: vec![(0, 1), (1, 5)],
            arcs: vec![],
        };
        match spec.build() {
            Err(GraphSpecError::VertexOutOfRange {
                kind,
                index,
                vertex,
                vertices,
            }) => {
                assert_eq!((kind, index, vertex, vertices), ("edge", 1, 5, 2));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GraphSpec::from_json("{\"vertices\": -1}"),
            Err(GraphSpecError::Parse(_))
        ));
    }
}
