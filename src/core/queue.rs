//! FIFO queue of vertex indices used by breadth-first search

use std::collections::VecDeque;

use crate::core::error::{Error, Result};

/// First-in first-out queue of vertex indices.
///
/// Only the BFS engine uses this; nothing outside `core::search` should need it.
#[derive(Debug, Default)]
pub struct Queue {
    items: VecDeque<usize>,
}

impl Queue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the back, amortized O(1)
    pub fn enqueue(&mut self, value: usize) {
        self.items.push_back(value);
    }

    /// Remove and return the front value.
    ///
    /// Callers are expected to check [`Queue::is_empty`] first; dequeuing an
    /// empty queue is reported as [`Error::EmptyQueue`].
    pub fn dequeue(&mut self) -> Result<usize> {
        self.items.pop_front().ok_or(Error::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
