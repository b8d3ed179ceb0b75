use thiserror::Error;

/// Why a graph admits no Euler path.
///
/// Variants are listed in the order the checks run: arcs, then vertex and
/// degree conditions, then connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EulerError {
    /// The graph contains directed arcs.
    #[error("graph contains {arcs} arc(s); only undirected graphs are supported")]
    ArcsPresent {
        /// Number of arcs found.
        arcs: usize,
    },
    /// The graph has no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// The graph has vertices but no vertex has positive degree.
    #[error("graph has {vertices} vertices but no edges")]
    NoEdges {
        /// Number of (isolated) vertices.
        vertices: usize,
    },
    /// More than two vertices have odd degree.
    #[error("graph is not semi-Eulerian: {odd_vertices} vertices have odd degree")]
    NotSemiEulerian {
        /// Number of odd-degree vertices.
        odd_vertices: usize,
    },
    /// Degree conditions hold, but the edges are not all reachable from the start.
    #[error("graph is not connected: traversal covered {covered} of {total} edges")]
    NotConnected {
        /// Edges reached from the start vertex.
        covered: usize,
        /// Total edge count.
        total: usize,
    },
}

/// Why an edge sequence is not an Euler trail of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrailError {
    /// The edge at `position` is not incident to the vertex the walk has reached.
    #[error("edge at position {position} does not continue the walk")]
    Disconnected {
        /// Index into the edge sequence.
        position: usize,
    },
    /// The edge at `position` was already used earlier in the walk.
    #[error("edge at position {position} is used more than once")]
    Repeated {
        /// Index into the edge sequence.
        position: usize,
    },
    /// The walk is valid but does not use every edge.
    #[error("walk uses {used} of {total} edges")]
    Incomplete {
        /// Edges in the walk.
        used: usize,
        /// Total edge count.
        total: usize,
    },
}
