//! Fixed-capacity FIFO window used to bound memory while scanning a source.

use std::collections::VecDeque;

/// Keeps the most recent `capacity` items pushed into it, oldest first.
///
/// Pushing into a full window evicts the oldest item, so a scan over an
/// arbitrarily long stream never holds more than `capacity` items.
#[derive(Debug, Clone)]
pub struct TailWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TailWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            // Capacity comes straight from the request; cap the up-front allocation.
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the window, yielding items oldest to newest.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T> Extend<T> for TailWindow<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
