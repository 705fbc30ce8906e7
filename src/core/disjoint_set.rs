//! Disjoint Set (Union-Find) over vertex indices
//!
//! Path compression and union by rank keep `find` and `union` nearly constant
//! time. The greedy builder uses it to answer "are these two vertices already
//! on the same path fragment" without running a BFS per candidate segment.

use crate::core::error::{Error, Result};

/// A Disjoint Set (Union-Find) data structure over `0..n`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Finds the representative of the set containing `id`, with path compression
    pub fn find(&mut self, id: usize) -> Result<usize> {
        self.check(id)?;

        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        Ok(root)
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        Ok(true)
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, id: usize) -> Result<()> {
        if id < self.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex: id,
                size: self.len(),
            })
        }
    }
}
