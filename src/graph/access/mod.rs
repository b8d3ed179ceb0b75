//! Per-edge scratch storage shared by graph algorithms.
//!
//! Maps created here are scoped to a single algorithm invocation and are
//! tracked by the owning graph's [`MapRegistry`], so leaks are observable.

mod edge_map;

pub use edge_map::{EdgeMap, MapRegistry};
