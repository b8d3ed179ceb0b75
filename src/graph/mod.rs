//! Graph storage and the read-only surface Euler algorithms traverse.
//!
//! - `traits`: the [`EulerGraph`] collaborator trait
//! - `undirected`: [`UndirectedGraph`], an append-only mixed multigraph
//! - `description`: [`GraphSpec`], a serializable description used to build graphs
//! - `access`: scoped per-edge maps ([`EdgeMap`]) and their [`MapRegistry`]

pub mod access;
pub mod description;
pub mod traits;
pub mod undirected;

pub use access::{EdgeMap, MapRegistry};
pub use description::{GraphSpec, GraphSpecError};
pub use traits::EulerGraph;
pub use undirected::{ArcId, EdgeId, UndirectedGraph, VertexId};
