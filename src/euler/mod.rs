//! Euler paths and circuits over undirected graphs.
//!
//! [`compute_euler_path`] runs, in order:
//! 1. arc check: any directed arc rejects the graph
//! 2. start selection by degree parity ([`select_start`])
//! 3. Hierholzer traversal over a scoped visited [`EdgeMap`](crate::graph::EdgeMap)
//! 4. completeness check: fewer covered edges than exist means the graph is disconnected
//!
//! The order is observable: arc and degree problems are reported before
//! connectivity problems, and connectivity is only known after traversal.
//!
//! ```rust
//! use eulerian::euler::{compute_euler_path, EulerKind};
//! use eulerian::graph::UndirectedGraph;
//!
//! let g = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
//! let path = compute_euler_path(&g).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.kind(), EulerKind::Circuit);
//! assert!(path.is_closed(&g));
//! ```

mod error;
mod options;
mod path;
mod start;
mod traversal;
mod validate;

pub use error::{EulerError, TrailError};
pub use options::{EulerOptions, TraversalStrategy};
pub use path::{EulerKind, EulerPath};
pub use start::select_start;
pub use validate::check_trail;

use tracing::{debug, debug_span, trace};

use crate::graph::{EdgeMap, EulerGraph};

/// Computes an Euler path of `graph` with the default (iterative) traversal.
///
/// Deterministic: repeated calls on an unchanged graph return the same path.
///
/// # Errors
/// See [`EulerError`]; checks run in variant order.
pub fn compute_euler_path<G: EulerGraph>(
    graph: &G,
) -> Result<EulerPath<G::Vertex, G::Edge>, EulerError> {
    compute_euler_path_with(graph, &EulerOptions::default())
}

/// Computes an Euler path of `graph` using `options`.
///
/// # Errors
/// See [`EulerError`]; checks run in variant order.
pub fn compute_euler_path_with<G: EulerGraph>(
    graph: &G,
    options: &EulerOptions,
) -> Result<EulerPath<G::Vertex, G::Edge>, EulerError> {
    let span = debug_span!(
        "euler_path",
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        strategy = ?options.strategy
    );
    let _guard = span.enter();

    let result = run(graph, options);
    if let Err(err) = &result {
        debug!(%err, "no euler path");
    }
    result
}

fn run<G: EulerGraph>(
    graph: &G,
    options: &EulerOptions,
) -> Result<EulerPath<G::Vertex, G::Edge>, EulerError> {
    let arcs = graph.arc_count();
    if arcs > 0 {
        return Err(EulerError::ArcsPresent { arcs });
    }

    let (start, kind) = select_start(graph)?;

    let mut visited = EdgeMap::new(graph, false);
    let (edges, stats) = traversal::find_trail(graph, start, &mut visited, options.strategy);
    visited.dispose();

    let total = graph.edge_count();
    trace!(covered = edges.len(), total, max_depth = stats.max_depth, "traversal finished");
    if edges.len() < total {
        return Err(EulerError::NotConnected {
            covered: edges.len(),
            total,
        });
    }

    Ok(EulerPath::new(start, edges, kind))
}
