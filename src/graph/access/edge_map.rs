//! Scoped per-edge maps for graph traversals.
//!
//! This provides two building blocks:
//! - `EdgeMap`: a dense edge-indexed vector of values, borrowed from the graph
//! - `MapRegistry`: an atomic count of live maps, owned by the graph
//!
//! An `EdgeMap` is acquired at the start of an algorithm and released when it
//! goes out of scope. Release happens in `Drop`, so early returns and panics
//! tear it down exactly like the normal exit.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::traits::EulerGraph;

/// Counts the edge maps currently alive over one graph.
#[derive(Debug, Default)]
pub struct MapRegistry {
    live: AtomicUsize,
}

impl MapRegistry {
    /// Creates a registry with no live maps.
    pub const fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
        }
    }

    /// Returns the number of maps that have been created and not yet released.
    #[inline]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    #[inline]
    fn acquire(&self) {
        self.live.fetch_add(1, Ordering::AcqRel);
    }

    #[inline]
    fn release(&self) {
        self.live.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A map from the edges of one graph to values of type `T`.
///
/// Every edge starts at the default value given to [`EdgeMap::new`]. The map
/// borrows its graph, so it can never outlive it, and releases its storage
/// when dropped or [disposed](EdgeMap::dispose).
pub struct EdgeMap<'g, G: EulerGraph, T> {
    graph: &'g G,
    slots: Vec<T>,
}

impl<'g, G: EulerGraph, T: Clone> EdgeMap<'g, G, T> {
    /// Creates a map over all edges of `graph`, each set to `default`.
    pub fn new(graph: &'g G, default: T) -> Self {
        let slots = vec![default; graph.edge_index_bound()];
        if let Some(registry) = graph.map_registry() {
            registry.acquire();
        }
        Self { graph, slots }
    }
}

impl<'g, G: EulerGraph, T> EdgeMap<'g, G, T> {
    /// Returns the number of slots, one per edge index.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the graph had no edges when the map was created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value stored for `edge`.
    ///
    /// # Panics
    /// Panics if `edge` was added to the graph after the map was created.
    #[inline]
    pub fn get(&self, edge: G::Edge) -> &T {
        &self.slots[self.graph.edge_index(edge)]
    }

    /// Stores `value` for `edge`.
    ///
    /// # Panics
    /// Panics if `edge` was added to the graph after the map was created.
    #[inline]
    pub fn set(&mut self, edge: G::Edge, value: T) {
        let idx = self.graph.edge_index(edge);
        self.slots[idx] = value;
    }

    /// Stores `value` for `edge` and returns the previous value.
    #[inline]
    pub fn replace(&mut self, edge: G::Edge, value: T) -> T {
        let idx = self.graph.edge_index(edge);
        core::mem::replace(&mut self.slots[idx], value)
    }

    /// Counts the slots whose value satisfies `pred`.
    pub fn count_where(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.slots.iter().filter(|v| pred(v)).count()
    }

    /// Releases the map.
    ///
    /// Equivalent to dropping it; provided so call sites can make the release
    /// point explicit.
    #[inline]
    pub fn dispose(self) {}
}

impl<'g, G: EulerGraph> EdgeMap<'g, G, bool> {
    /// Marks `edge` and returns `true` iff it was not marked before.
    #[inline]
    pub fn try_mark(&mut self, edge: G::Edge) -> bool {
        !self.replace(edge, true)
    }

    /// Returns `true` if `edge` is marked.
    #[inline]
    pub fn is_marked(&self, edge: G::Edge) -> bool {
        *self.get(edge)
    }
}

impl<'g, G: EulerGraph, T> Drop for EdgeMap<'g, G, T> {
    fn drop(&mut self) {
        if let Some(registry) = self.graph.map_registry() {
            registry.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    fn triangle() -> UndirectedGraph {
        UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn defaults_and_updates() {
        let g = triangle();
        let e: Vec<_> = g.edges().collect();
        let mut map = EdgeMap::new(&g, 0u32);
        assert_eq!(map.len(), 3);
        assert_eq!(*map.get(e[1]), 0);

        map.set(e[1], 7);
        assert_eq!(*map.get(e[1]), 7);
        assert_eq!(map.replace(e[1], 9), 7);
        assert_eq!(map.count_where(|&v| v == 0), 2);
    }

    #[test]
    fn try_mark_reports_first_visit_only() {
        let g = triangle();
        let e = g.edges().next().unwrap();
        let mut visited = EdgeMap::new(&g, false);
        assert!(!visited.is_marked(e));
        assert!(visited.try_mark(e));
        assert!(!visited.try_mark(e));
        assert!(visited.is_marked(e));
    }

    #[test]
    fn registry_tracks_drop_and_dispose() {
        let g = triangle();
        assert_eq!(g.live_maps(), 0);

        let a = EdgeMap::new(&g, false);
        let b = EdgeMap::new(&g, 0u8);
        assert_eq!(g.live_maps(), 2);

        a.dispose();
        assert_eq!(g.live_maps(), 1);
        drop(b);
        assert_eq!(g.live_maps(), 0);
    }

    #[test]
    fn registry_released_on_unwind() {
        let g = triangle();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _map = EdgeMap::new(&g, false);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(g.live_maps(), 0);
    }
}
