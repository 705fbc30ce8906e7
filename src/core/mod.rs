//! Core library modules for greedy-tsp
//!
//! Graph, FIFO queue, breadth-first search, stable segment sort, union-find and
//! the greedy tour builder that ties them together.

pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod options;
pub mod queue;
pub mod search;
pub mod segment;
pub mod sort;

// Re-export main types for internal use
pub use greedy::{greedy_tour, Decision, Tour, TourBuilder};
pub use options::{ConnectivityOracle, ProgressCallback, TourOptions};
pub use segment::{complete_segments, Segment};
