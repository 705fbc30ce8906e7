//! Weighted city-pair segments and the complete edge list

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// An undirected pair of vertices with a precomputed distance.
///
/// [`Segment::new`] normalises to `from < to` and rejects self-loops and
/// negative or NaN distances. The fields are public, so a segment built
/// literally or deserialized skips those checks. [`TourBuilder::consider`]
/// still turns such a self-loop into a cycle rejection and an out-of-range
/// vertex into an error.
///
/// [`TourBuilder::consider`]: crate::core::greedy::TourBuilder::consider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

impl Segment {
    pub fn new(a: usize, b: usize, distance: f64) -> Result<Self> {
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        let (from, to) = if a < b { (a, b) } else { (b, a) };
        if distance.is_nan() || distance < 0.0 {
            return Err(Error::InvalidDistance { from, to, distance });
        }

        Ok(Self { from, to, distance })
    }

    /// True if this segment joins `a` and `b`, in either order
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Every unordered pair of `0..n`, in `(0,1), (0,2), ..., (1,2), ...` order,
/// with distances supplied by `distance`.
pub fn complete_segments<F>(n: usize, mut distance: F) -> Result<Vec<Segment>>
where
    F: FnMut(usize, usize) -> f64,
{
    let mut segments = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            segments.push(Segment::new(i, j, distance(i, j))?);
        }
    }
    Ok(segments)
}
