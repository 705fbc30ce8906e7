//! Undirected graph with per-vertex adjacency lists
//!
//! The vertex count is fixed at creation. Each vertex owns a growable list of
//! neighbor indices kept in insertion order; degree is the list length.
//! Duplicate edges are not detected: adding the same pair twice records the
//! neighbor twice and counts it twice in the degree.

use log::warn;

use crate::core::error::{Error, Result};

/// Initial capacity of every adjacency list; `Vec` doubles it on overflow
pub const ADJ_LIST_INITIAL_CAPACITY: usize = 4;

/// Undirected graph over vertices `0..n`
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `n` isolated vertices.
    ///
    /// Fails with [`Error::EmptyGraph`] when `n < 1`.
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::EmptyGraph);
        }

        let adj = (0..n)
            .map(|_| Vec::with_capacity(ADJ_LIST_INITIAL_CAPACITY))
            .collect();

        Ok(Self { adj })
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.adj.len()
    }

    /// Add the undirected edge `{u, v}`.
    ///
    /// Both half edges are recorded or neither: room for the two appends is
    /// reserved before either list is touched, so a failed growth leaves the
    /// graph exactly as it was.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(Error::SelfLoop(u));
        }

        for vertex in [u, v] {
            if self.adj[vertex].try_reserve(1).is_err() {
                warn!("Refusing edge ({u}, {v}): adjacency list of {vertex} cannot grow");
                return Err(Error::CapacityExhausted(vertex));
            }
        }

        self.adj[u].push(v);
        self.adj[v].push(u);
        Ok(())
    }

    /// True iff `v` appears in `u`'s adjacency list.
    ///
    /// A self-pair is never an edge. O(degree(u)).
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(u != v && self.adj[u].contains(&v))
    }

    /// Current degree of `v`, O(1)
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Neighbors of `v` in discovery order
    pub fn neighbors(&self, v: usize) -> Result<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Number of undirected edges currently stored
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.size() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex: v,
                size: self.size(),
            })
        }
    }
}
