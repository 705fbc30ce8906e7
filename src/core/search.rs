//! Breadth-first search over a [`Graph`]
//!
//! A [`Search`] records, for one source vertex, the hop distance and BFS
//! predecessor of every vertex in the graph as it was at the time of the call.
//! Unreached vertices have neither. A search borrows its graph, so it cannot
//! outlive it and cannot observe later mutations.

use crate::core::error::Result;
use crate::core::graph::Graph;
use crate::core::queue::Queue;

/// Result of a breadth-first search from a single source
#[derive(Debug)]
pub struct Search<'g> {
    graph: &'g Graph,
    source: usize,
    dist: Vec<Option<usize>>,
    pred: Vec<Option<usize>>,
}

impl<'g> Search<'g> {
    /// Run BFS on `graph` from `source`
    pub fn run(graph: &'g Graph, source: usize) -> Result<Self> {
        graph.check_vertex(source)?;

        let n = graph.size();
        let mut dist = vec![None; n];
        let mut pred = vec![None; n];
        let mut queue = Queue::new();

        dist[source] = Some(0);
        queue.enqueue(source);

        while !queue.is_empty() {
            let curr = queue.dequeue()?;
            let next_dist = dist[curr].map(|d| d + 1);

            for &sink in graph.neighbors(curr)? {
                if dist[sink].is_none() {
                    dist[sink] = next_dist;
                    pred[sink] = Some(curr);
                    queue.enqueue(sink);
                }
            }
        }

        Ok(Self {
            graph,
            source,
            dist,
            pred,
        })
    }

    /// Vertex the search started from
    pub fn source(&self) -> usize {
        self.source
    }

    /// Minimum hop count from the source to `v`, `None` when unreachable
    pub fn distance_to(&self, v: usize) -> Result<Option<usize>> {
        self.graph.check_vertex(v)?;
        Ok(self.dist[v])
    }

    /// BFS predecessor of `v`; `None` for the source and unreached vertices
    pub fn predecessor(&self, v: usize) -> Result<Option<usize>> {
        self.graph.check_vertex(v)?;
        Ok(self.pred[v])
    }

    pub fn reachable(&self, v: usize) -> Result<bool> {
        Ok(self.distance_to(v)?.is_some())
    }

    /// Shortest-hop path `source, ..., v`, or `None` when `v` is unreachable.
    ///
    /// The returned path has `distance_to(v) + 1` entries.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        let Some(hops) = self.distance_to(v)? else {
            return Ok(None);
        };

        let mut path = Vec::with_capacity(hops + 1);
        let mut curr = Some(v);
        while let Some(vertex) = curr {
            path.push(vertex);
            curr = self.pred[vertex];
        }
        path.reverse();

        debug_assert_eq!(path.len(), hops + 1);
        debug_assert_eq!(path.first(), Some(&self.source));
        Ok(Some(path))
    }
}

/// True iff `v` is reachable from `u` in the current graph.
///
/// Runs a fresh search from `u` each call.
pub fn connected(graph: &Graph, u: usize, v: usize) -> Result<bool> {
    graph.check_vertex(v)?;
    Search::run(graph, u)?.reachable(v)
}
