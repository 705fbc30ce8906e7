//! # greedy-tsp Library
//!
//! Approximates a Traveling Salesman tour by greedily assembling a Hamiltonian
//! path from the shortest city-to-city segments, then closing it into a cycle.
//!
//! ## Features
//!
//! - **Greedy-edge heuristic**: shortest segments first, degree capped at 2, no
//!   premature cycles
//! - **Deterministic**: ties between equal distances are broken by input order
//! - **Two cycle checks**: per-candidate BFS or incremental union-find, with
//!   identical results
//! - **Progress tracking**: optional callback during the segment scan
//!
//! ## Basic Usage
//!
//! ```rust
//! use greedy_tsp::{complete_segments, greedy_tour, TourOptions};
//!
//! # fn main() -> greedy_tsp::Result<()> {
//! let d = [
//!     [0.0, 1.0, 3.0, 4.0],
//!     [1.0, 0.0, 2.0, 5.0],
//!     [3.0, 2.0, 0.0, 1.0],
//!     [4.0, 5.0, 1.0, 0.0],
//! ];
//! let segments = complete_segments(4, |i, j| d[i][j])?;
//! let tour = greedy_tour(4, &segments, &TourOptions::default())?;
//!
//! assert_eq!(tour.order, vec![0, 3, 2, 1, 0]);
//! assert_eq!(tour.total_distance, 8.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Geographic Input
//!
//! ```rust
//! # fn main() -> greedy_tsp::Result<()> {
//! let cities = greedy_tsp::parse_cities_str("3  A B C  0 0  0 1  1 0")?;
//! let tour = greedy_tsp::solve(&cities, &greedy_tsp::TourOptions::default())?;
//! assert_eq!(tour.order.len(), 4);
//! # Ok(())
//! # }
//! ```

pub use crate::core::disjoint_set::DisjointSet;
pub use crate::core::error::{Error, Result};
pub use crate::core::graph::Graph;
pub use crate::core::queue::Queue;
pub use crate::core::search::{connected, Search};
pub use crate::core::sort::{merge_sort_by, sort_segments};
pub use crate::core::{
    complete_segments, greedy_tour, ConnectivityOracle, Decision, ProgressCallback, Segment,
    Tour, TourBuilder, TourOptions,
};
pub use crate::geo::{haversine_km, Location};
pub use crate::input::{parse_cities, parse_cities_str, City};

pub mod core;
pub mod geo;
pub mod input;

/// Build a greedy tour over `cities` using great-circle distances in kilometres
///
/// # Examples
/// ```rust
/// use greedy_tsp::{solve, City, Location, TourOptions};
///
/// let cities = vec![
///     City { name: "A".into(), location: Location::new(0.0, 0.0) },
///     City { name: "B".into(), location: Location::new(0.0, 1.0) },
/// ];
/// let tour = solve(&cities, &TourOptions::default()).unwrap();
/// assert_eq!(tour.order, vec![0, 1, 0]);
/// ```
pub fn solve(cities: &[City], options: &TourOptions) -> Result<Tour> {
    if cities.len() < 2 {
        return Err(Error::TooFewCities(cities.len()));
    }

    let segments = complete_segments(cities.len(), |i, j| {
        haversine_km(&cities[i].location, &cities[j].location)
    })?;
    greedy_tour(cities.len(), &segments, options)
}
