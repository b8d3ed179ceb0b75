//! # `eulerian` - Euler Paths over Undirected Multigraphs
//!
//! Computes Euler paths and circuits (walks that use every edge exactly once)
//! with Hierholzer's edge-marking depth-first traversal.
//!
//! ## Key Features
//!
//! - **Trait-based input**: any graph implementing [`EulerGraph`] can be traversed;
//!   [`UndirectedGraph`] is the bundled implementation
//! - **Stack-safe traversal**: the default traversal keeps an explicit frame stack,
//!   so call depth does not grow with edge count
//! - **Scoped scratch state**: per-edge visited markers live in an [`EdgeMap`] that is
//!   released on every exit path, observable through [`MapRegistry`]
//! - **Typed failures**: every rejection is an [`EulerError`] variant
//!
//! ## Guarantees
//!
//! - Directed arcs are rejected before any traversal work.
//! - Degree parity is checked before connectivity; connectivity is detected after
//!   traversal, by comparing covered edges to the edge count.
//! - Results are deterministic: start-vertex tie-breaks follow the graph's
//!   vertex enumeration order, and edges are explored in incidence order.
//! - Self-loops and parallel edges are ordinary edges with their own identity.
//!
//! ## Example
//!
//! ```rust
//! use eulerian::{compute_euler_path, check_trail, EulerKind, UndirectedGraph, VertexId};
//!
//! // Path 0 - 1 - 2 with a triangle hanging off vertex 1.
//! let mut g = UndirectedGraph::with_vertices(5);
//! g.add_edges(VertexId(1), &[VertexId(0), VertexId(2), VertexId(3), VertexId(4)]);
//! g.add_edge(VertexId(3), VertexId(4));
//!
//! let path = compute_euler_path(&g).unwrap();
//! assert_eq!(path.kind(), EulerKind::Trail);
//! assert_eq!(path.len(), 5);
//! assert!(check_trail(&g, path.start(), path.edges()).is_ok());
//! assert_eq!(g.live_maps(), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod euler;
pub mod graph;

pub use euler::{
    check_trail, compute_euler_path, compute_euler_path_with, select_start, EulerError,
    EulerKind, EulerOptions, EulerPath, TrailError, TraversalStrategy,
};
pub use graph::{
    ArcId, EdgeId, EdgeMap, EulerGraph, GraphSpec, GraphSpecError, MapRegistry, UndirectedGraph,
    VertexId,
};
