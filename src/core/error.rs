//! Error types for the greedy-tsp library
//!
//! Every contract violation in the graph, queue and search layers is reported
//! as a value of [`Error`]; nothing in the library panics on bad indices.

use thiserror::Error;

/// Main error type for greedy-tsp operations
#[derive(Debug, Error)]
pub enum Error {
    /// A graph was requested with no vertices
    #[error("graph must contain at least one vertex")]
    EmptyGraph,

    /// A vertex index outside `[0, n)`
    #[error("vertex {vertex} out of range for graph of {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// An edge from a vertex to itself
    #[error("self-loop on vertex {0} rejected")]
    SelfLoop(usize),

    /// Adjacency storage for a vertex could not grow
    #[error("adjacency list for vertex {0} could not grow")]
    CapacityExhausted(usize),

    /// `dequeue` called on an empty queue
    #[error("dequeue from empty queue")]
    EmptyQueue,

    /// A segment distance that is negative or NaN
    #[error("invalid distance {distance} for segment ({from}, {to})")]
    InvalidDistance { from: usize, to: usize, distance: f64 },

    /// Fewer than two cities were declared
    #[error("too few cities: need at least 2, got {0}")]
    TooFewCities(usize),

    /// Construction did not leave exactly two open path endpoints
    #[error("expected 2 open path endpoints after construction, found {found}")]
    UnexpectedEndpoints { found: usize },

    /// The closing segment between the two endpoints was not supplied
    #[error("no segment between endpoints {0} and {1}")]
    MissingSegment(usize, usize),

    /// Malformed input file contents
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience result type for greedy-tsp operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::VertexOutOfRange { vertex: 7, size: 4 };
        assert_eq!(err.to_string(), "vertex 7 out of range for graph of 4 vertices");

        assert_eq!(Error::TooFewCities(1).to_string(), "too few cities: need at least 2, got 1");
        assert_eq!(Error::SelfLoop(3).to_string(), "self-loop on vertex 3 rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
