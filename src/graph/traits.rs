//! The graph surface consumed by the Euler path algorithms.
//!
//! Algorithms in [`crate::euler`] never construct or mutate a graph; they only
//! read degrees and incidences through this trait. Any structure that can hand
//! out small copyable vertex and edge handles, plus a dense index per edge, can
//! be traversed.

use core::fmt::Debug;

use crate::graph::access::MapRegistry;

/// Read-only access to a (possibly mixed) graph for Euler path computation.
///
/// Undirected edges and directed arcs are counted separately. Only undirected
/// edges take part in incidence queries; the arc count exists so callers can
/// reject mixed graphs before any traversal work happens.
///
/// Iteration uses associated iterator types so implementations avoid boxing.
///
/// ### Conventions
/// | Query | Self-loop at `v` | Parallel edges |
/// |-------|------------------|----------------|
/// | [`degree`](Self::degree) | contributes 2 | each counted |
/// | [`incident_edges`](Self::incident_edges) | yielded once | each yielded |
/// | [`opposite`](Self::opposite) | returns `v` | per edge |
pub trait EulerGraph {
    /// Vertex handle.
    type Vertex: Copy + Eq + Debug;
    /// Undirected edge handle.
    type Edge: Copy + Eq + Debug;

    /// Iterator over all vertices in enumeration order.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Iterator over the undirected edges incident to one vertex.
    type IncidentEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns the number of directed arcs.
    fn arc_count(&self) -> usize;

    /// Enumerates vertices.
    ///
    /// The order must be stable for a given graph instance; start-vertex
    /// tie-breaks depend on it.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of undirected edges incident to `vertex`.
    fn degree(&self, vertex: Self::Vertex) -> usize;

    /// Enumerates the undirected edges incident to `vertex`, in a stable order.
    fn incident_edges(&self, vertex: Self::Vertex) -> Self::IncidentEdges<'_>;

    /// Returns the endpoint of `edge` that is not `vertex`.
    ///
    /// For a self-loop this is `vertex` itself. Behaviour is unspecified if
    /// `vertex` is not an endpoint of `edge`.
    fn opposite(&self, edge: Self::Edge, vertex: Self::Vertex) -> Self::Vertex;

    /// Returns `true` if `vertex` is an endpoint of `edge`.
    fn is_incident(&self, edge: Self::Edge, vertex: Self::Vertex) -> bool;

    /// Dense index of `edge`, strictly below [`edge_index_bound`](Self::edge_index_bound).
    fn edge_index(&self, edge: Self::Edge) -> usize;

    /// Exclusive upper bound for [`edge_index`](Self::edge_index).
    fn edge_index_bound(&self) -> usize;

    /// Registry that tracks live per-edge maps created over this graph.
    ///
    /// Graphs that don't track map lifetimes return `None`.
    fn map_registry(&self) -> Option<&MapRegistry> {
        None
    }
}
