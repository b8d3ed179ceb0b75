//! An append-only mixed multigraph.
//!
//! `UndirectedGraph` stores undirected edges in a dense pool and keeps, per
//! vertex, the list of incident edge ids in insertion order. Directed arcs
//! are stored in a separate pool: they don't participate in incidence, but
//! they are counted so algorithms that only accept undirected input can
//! reject mixed graphs.
//!
//! Self-loops and parallel edges are allowed; every inserted edge gets its
//! own [`EdgeId`].

use core::fmt;
use core::iter::Copied;
use core::ops::Range;
use core::slice;

use serde::{Deserialize, Serialize};

use crate::graph::access::MapRegistry;
use crate::graph::traits::EulerGraph;

/// Identifies a vertex of an [`UndirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub usize);

/// Identifies an undirected edge of an [`UndirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

/// Identifies a directed arc of an [`UndirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcId(pub usize);

impl VertexId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct VertexSlot {
    incident: Vec<EdgeId>,
    degree: usize,
}

/// A mixed multigraph with undirected edges and directed arcs.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the vertex pool |
/// | `add_edge` | \(O(1)\) amortized | Appends to the edge pool and up to two incidence lists |
/// | `add_arc` | \(O(1)\) amortized | Arcs are not indexed by vertex |
/// | `degree` | \(O(1)\) | Cached per vertex |
/// | `incident_edges` | \(O(\deg)\) | Insertion order |
#[derive(Debug, Default)]
pub struct UndirectedGraph {
    vertices: Vec<VertexSlot>,
    edges: Vec<(VertexId, VertexId)>,
    arcs: Vec<(VertexId, VertexId)>,
    maps: MapRegistry,
}

impl UndirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut g = Self::with_capacity(vertex_count, 0);
        g.add_vertices(vertex_count);
        g
    }

    /// Creates an empty graph with preallocated room for vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            arcs: Vec::new(),
            maps: MapRegistry::new(),
        }
    }

    /// Builds a graph with `vertex_count` vertices and one undirected edge per pair.
    ///
    /// # Panics
    /// Panics if any endpoint is out of bounds.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_capacity(vertex_count, edges.len());
        g.add_vertices(vertex_count);
        for &(u, v) in edges {
            g.add_edge(VertexId(u), VertexId(v));
        }
        g
    }

    /// Adds an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexSlot::default());
        id
    }

    /// Adds `count` isolated vertices and returns their ids.
    pub fn add_vertices(&mut self, count: usize) -> Vec<VertexId> {
        self.vertices.reserve(count);
        (0..count).map(|_| self.add_vertex()).collect()
    }

    /// Adds an undirected edge `u -- v`.
    ///
    /// A self-loop (`u == v`) is listed once among `u`'s incident edges and
    /// adds 2 to its degree.
    ///
    /// # Panics
    /// Panics if `u` or `v` are out of bounds.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> EdgeId {
        self.assert_vertex(u);
        self.assert_vertex(v);
        let id = EdgeId(self.edges.len());
        self.edges.push((u, v));

        let slot = &mut self.vertices[u.0];
        slot.incident.push(id);
        slot.degree += 1;
        if u == v {
            slot.degree += 1;
        } else {
            let slot = &mut self.vertices[v.0];
            slot.incident.push(id);
            slot.degree += 1;
        }
        id
    }

    /// Adds one undirected edge from `u` to each vertex in `targets`, in order.
    ///
    /// # Panics
    /// Panics if any vertex is out of bounds.
    pub fn add_edges(&mut self, u: VertexId, targets: &[VertexId]) -> Vec<EdgeId> {
        targets.iter().map(|&v| self.add_edge(u, v)).collect()
    }

    /// Adds a directed arc `from -> to`.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn add_arc(&mut self, from: VertexId, to: VertexId) -> ArcId {
        self.assert_vertex(from);
        self.assert_vertex(to);
        let id = ArcId(self.arcs.len());
        self.arcs.push((from, to));
        id
    }

    /// Returns `true` if `v` belongs to this graph.
    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.0 < self.vertices.len()
    }

    /// Returns the endpoints of `edge` in insertion order.
    ///
    /// # Panics
    /// Panics if `edge` is out of bounds.
    #[inline]
    pub fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        self.edges[edge.0]
    }

    /// Returns the `(from, to)` endpoints of `arc`.
    ///
    /// # Panics
    /// Panics if `arc` is out of bounds.
    #[inline]
    pub fn arc_endpoints(&self, arc: ArcId) -> (VertexId, VertexId) {
        self.arcs[arc.0]
    }

    /// Iterates over all undirected edge ids in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Returns how many edge maps over this graph are currently alive.
    #[inline]
    pub fn live_maps(&self) -> usize {
        self.maps.live()
    }

    #[inline]
    fn assert_vertex(&self, v: VertexId) {
        assert!(
            self.contains_vertex(v),
            "vertex {v} out of bounds for n={}",
            self.vertices.len()
        );
    }
}

impl Clone for UndirectedGraph {
    /// Clones the topology. Live maps belong to the original and are not carried over.
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            arcs: self.arcs.clone(),
            maps: MapRegistry::new(),
        }
    }
}

impl EulerGraph for UndirectedGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;
    type Vertices<'a> = core::iter::Map<Range<usize>, fn(usize) -> VertexId>
    where
        Self: 'a;
    type IncidentEdges<'a> = Copied<slice::Iter<'a, EdgeId>>
    where
        Self: 'a;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    fn vertices(&self) -> Self::Vertices<'_> {
        (0..self.vertices.len()).map(VertexId as fn(usize) -> VertexId)
    }

    #[inline]
    fn degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.0].degree
    }

    #[inline]
    fn incident_edges(&self, vertex: VertexId) -> Self::IncidentEdges<'_> {
        self.vertices[vertex.0].incident.iter().copied()
    }

    #[inline]
    fn opposite(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        let (a, b) = self.edges[edge.0];
        if a == vertex {
            b
        } else {
            a
        }
    }

    #[inline]
    fn is_incident(&self, edge: EdgeId, vertex: VertexId) -> bool {
        let (a, b) = self.edges[edge.0];
        a == vertex || b == vertex
    }

    #[inline]
    fn edge_index(&self, edge: EdgeId) -> usize {
        edge.0
    }

    #[inline]
    fn edge_index_bound(&self) -> usize {
        self.edges.len()
    }

    fn map_registry(&self) -> Option<&MapRegistry> {
        Some(&self.maps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_follow_incidence() {
        let mut g = UndirectedGraph::with_vertices(3);
        let e0 = g.add_edge(VertexId(0), VertexId(1));
        let e1 = g.add_edge(VertexId(1), VertexId(2));

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(VertexId(0)), 1);
        assert_eq!(g.degree(VertexId(1)), 2);
        assert_eq!(
            g.incident_edges(VertexId(1)).collect::<Vec<_>>(),
            vec![e0, e1]
        );
    }

    #[test]
    fn self_loop_counts_twice_but_is_listed_once() {
        let mut g = UndirectedGraph::with_vertices(1);
        let e = g.add_edge(VertexId(0), VertexId(0));

        assert_eq!(g.degree(VertexId(0)), 2);
        assert_eq!(g.incident_edges(VertexId(0)).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.opposite(e, VertexId(0)), VertexId(0));
        assert!(g.is_incident(e, VertexId(0)));
    }

    #[test]
    fn parallel_edges_are_distinct() {
        let mut g = UndirectedGraph::with_vertices(2);
        let ids = g.add_edges(VertexId(0), &[VertexId(1), VertexId(1)]);

        assert_ne!(ids[0], ids[1]);
        assert_eq!(g.degree(VertexId(0)), 2);
        assert_eq!(g.endpoints(ids[1]), (VertexId(0), VertexId(1)));
    }

    #[test]
    fn opposite_and_incidence() {
        let g = UndirectedGraph::from_edges(3, &[(0, 2)]);
        let e = EdgeId(0);
        assert_eq!(g.opposite(e, VertexId(0)), VertexId(2));
        assert_eq!(g.opposite(e, VertexId(2)), VertexId(0));
        assert!(!g.is_incident(e, VertexId(1)));
    }

    #[test]
    fn arcs_are_counted_not_incident() {
        let mut g = UndirectedGraph::with_vertices(2);
        let a = g.add_arc(VertexId(0), VertexId(1));

        assert_eq!(g.arc_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(VertexId(0)), 0);
        assert_eq!(g.arc_endpoints(a), (VertexId(0), VertexId(1)));
    }

    #[test]
    fn vertices_enumerate_in_insertion_order() {
        let g = UndirectedGraph::with_vertices(4);
        let vs: Vec<_> = g.vertices().collect();
        assert_eq!(vs, (0..4).map(VertexId).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn edge_to_missing_vertex_panics() {
        let mut g = UndirectedGraph::with_vertices(1);
        g.add_edge(VertexId(0), VertexId(3));
    }

    #[test]
    fn clone_starts_with_fresh_registry() {
        let g = UndirectedGraph::from_edges(2, &[(0, 1)]);
        let _map = crate::graph::EdgeMap::new(&g, false);
        let copy = g.clone();
        assert_eq!(g.live_maps(), 1);
        assert_eq!(copy.live_maps(), 0);
        assert_eq!(copy.edge_count(), 1);
    }

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(VertexId(3).to_string(), "v3");
        assert_eq!(EdgeId(0).to_string(), "e0");
        assert_eq!(ArcId(1).to_string(), "a1");
    }
}
