//! Greedy-edge tour construction
//!
//! Segments are scanned shortest first. A segment is kept when both of its
//! endpoints still have degree below 2 and they are not yet connected, so the
//! kept segments always form a set of vertex-disjoint simple paths. After the
//! scan a single path spans every vertex; its two open ends are joined by the
//! closing segment, which is counted in the total but never added to the graph.
//! The visiting order is then read off the path with a BFS and rotated to
//! start at vertex 0.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::disjoint_set::DisjointSet;
use crate::core::error::{Error, Result};
use crate::core::graph::Graph;
use crate::core::options::{ConnectivityOracle, TourOptions};
use crate::core::search::Search;
use crate::core::segment::Segment;
use crate::core::sort::sort_segments;

/// Maximum degree of any vertex on the path being built
const MAX_DEGREE: usize = 2;

/// Number of scanned segments between progress callbacks
const PROGRESS_INTERVAL: u64 = 4096;

/// A closed tour and its length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// `n + 1` vertex indices starting and ending at vertex 0
    pub order: Vec<usize>,
    /// Sum of all kept segments plus the closing segment
    pub total_distance: f64,
}

impl Tour {
    /// Number of distinct vertices visited
    pub fn city_count(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}

/// Outcome of offering one segment to a [`TourBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    /// An endpoint already has two neighbors
    RejectedDegree,
    /// The endpoints are already joined by a path
    RejectedCycle,
}

/// Incremental greedy construction over a fixed vertex set
#[derive(Debug)]
pub struct TourBuilder {
    graph: Graph,
    oracle: ConnectivityOracle,
    components: Option<DisjointSet>,
    path_distance: f64,
    accepted: usize,
}

impl TourBuilder {
    pub fn new(n: usize, options: &TourOptions) -> Result<Self> {
        let graph = Graph::new(n)?;
        let components = match options.oracle {
            ConnectivityOracle::UnionFind => Some(DisjointSet::new(n)),
            ConnectivityOracle::Bfs => None,
        };

        Ok(Self {
            graph,
            oracle: options.oracle,
            components,
            path_distance: 0.0,
            accepted: 0,
        })
    }

    /// Offer `segment` to the path under construction
    pub fn consider(&mut self, segment: &Segment) -> Result<Decision> {
        let (u, v) = (segment.from, segment.to);

        if self.graph.degree(u)? >= MAX_DEGREE || self.graph.degree(v)? >= MAX_DEGREE {
            trace!("Skip ({u}, {v}): degree limit");
            return Ok(Decision::RejectedDegree);
        }

        if self.already_connected(u, v)? {
            trace!("Skip ({u}, {v}): would close a cycle");
            return Ok(Decision::RejectedCycle);
        }

        self.graph.add_edge(u, v)?;
        if let Some(components) = self.components.as_mut() {
            components.union(u, v)?;
        }
        self.path_distance += segment.distance;
        self.accepted += 1;

        trace!("Keep ({u}, {v}) at {:.3}", segment.distance);
        Ok(Decision::Accepted)
    }

    fn already_connected(&mut self, u: usize, v: usize) -> Result<bool> {
        match self.components.as_mut() {
            Some(components) => components.same_set(u, v),
            None => Search::run(&self.graph, u)?.reachable(v),
        }
    }

    /// The path fragments built so far
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Length of the kept segments, excluding the closing segment
    pub fn path_distance(&self) -> f64 {
        self.path_distance
    }

    /// Number of segments kept so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// True once the kept segments form a single path over every vertex
    pub fn is_spanning(&self) -> bool {
        self.accepted + 1 == self.graph.size()
    }

    /// The two vertices with degree below 2, in ascending index order
    fn open_endpoints(&self) -> Result<(usize, usize)> {
        let mut first = None;
        let mut second = None;
        let mut found = 0;

        for v in 0..self.graph.size() {
            if self.graph.degree(v)? < MAX_DEGREE {
                found += 1;
                if first.is_none() {
                    first = Some(v);
                } else if second.is_none() {
                    second = Some(v);
                }
            }
        }

        match (first, second) {
            (Some(a), Some(b)) if found == 2 => Ok((a, b)),
            _ => Err(Error::UnexpectedEndpoints { found }),
        }
    }

    /// Close the path into a tour.
    ///
    /// `segments` must contain the segment joining the two open endpoints.
    pub fn finish(self, segments: &[Segment]) -> Result<Tour> {
        let (first, last) = self.open_endpoints()?;
        debug!("Open endpoints: {first} and {last}");

        let closing = segments
            .iter()
            .find(|s| s.joins(first, last))
            .ok_or(Error::MissingSegment(first, last))?;
        let total_distance = self.path_distance + closing.distance;

        let n = self.graph.size();
        let path = Search::run(&self.graph, last)?
            .path_to(first)?
            .filter(|path| path.len() == n)
            .ok_or(Error::UnexpectedEndpoints { found: 2 })?;

        let start = path.iter().position(|&v| v == 0).unwrap_or(0);
        let order: Vec<usize> = (0..=n).map(|i| path[(start + i) % n]).collect();

        debug!("Tour over {n} vertices, total distance {total_distance:.2}");
        Ok(Tour {
            order,
            total_distance,
        })
    }
}

/// Build a greedy tour over vertices `0..n` from their pairwise segments.
///
/// `segments` is normally the output of
/// [`complete_segments`](crate::core::segment::complete_segments); ties in
/// distance are broken by position in this list.
pub fn greedy_tour(n: usize, segments: &[Segment], options: &TourOptions) -> Result<Tour> {
    if n < 2 {
        return Err(Error::TooFewCities(n));
    }

    let sorted = sort_segments(segments);
    let total = sorted.len() as u64;
    debug!(
        "Greedy construction over {n} vertices, {total} segments, {:?} oracle",
        options.oracle
    );

    let mut builder = TourBuilder::new(n, options)?;
    for (i, segment) in sorted.iter().enumerate() {
        builder.consider(segment)?;

        let scanned = i as u64 + 1;
        if let Some(progress) = &options.progress {
            if scanned % PROGRESS_INTERVAL == 0 || scanned == total {
                progress(scanned, total);
            }
        }

        if builder.is_spanning() {
            // Every remaining segment would hit the degree limit or close a cycle
            debug!("Path spans all vertices after {scanned} of {total} segments");
            match &options.progress {
                Some(progress) if scanned < total => progress(total, total),
                _ => {}
            }
            break;
        }
    }

    builder.finish(&sorted)
}
