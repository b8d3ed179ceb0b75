use serde::{Deserialize, Serialize};

/// How the edge-marking traversal is executed.
///
/// Both strategies visit edges in the same order and produce identical paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    /// Explicit stack of frames; call depth stays constant regardless of edge count.
    #[default]
    Iterative,
    /// Direct recursion; call depth grows with the longest trail explored.
    ///
    /// Only suitable for small graphs.
    Recursive,
}

/// Options for [`compute_euler_path_with`](crate::euler::compute_euler_path_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerOptions {
    /// Traversal implementation.
    pub strategy: TraversalStrategy,
}

impl EulerOptions {
    /// Returns the default options (iterative traversal).
    pub const fn new() -> Self {
        Self {
            strategy: TraversalStrategy::Iterative,
        }
    }

    /// Sets the traversal strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: TraversalStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
