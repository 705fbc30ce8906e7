//! Options for tour construction

use std::sync::Arc;

/// Progress callback function type, called with `(scanned, total)` segments
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// How the greedy loop decides whether a candidate segment would close a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityOracle {
    /// Fresh breadth-first search from one endpoint per candidate
    Bfs,
    /// Incremental union-find over the accepted segments
    #[default]
    UnionFind,
}

/// Options for tour construction
#[derive(Clone, Default)]
pub struct TourOptions {
    /// Cycle check used by the greedy loop
    pub oracle: ConnectivityOracle,

    /// Optional progress callback
    pub progress: Option<ProgressCallback>,
}

impl TourOptions {
    pub fn with_oracle(oracle: ConnectivityOracle) -> Self {
        Self {
            oracle,
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for TourOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourOptions")
            .field("oracle", &self.oracle)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
