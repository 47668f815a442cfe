//! Frontier selection policies.
//!
//! A frontier only decides which pending item comes out next; staleness and
//! admission are the traversal's business.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

pub(crate) trait Frontier<T> {
    /// Queue `item`. Policies without an ordering ignore `priority`.
    fn push(&mut self, item: T, priority: f64);

    /// Remove the next item according to the policy.
    fn pop(&mut self) -> Option<T>;
}

/// Oldest first.
pub(crate) struct Fifo<T>(VecDeque<T>);

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Newest first.
pub(crate) struct Lifo<T>(Vec<T>);

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// Smallest priority first, earliest insertion among equals.
pub(crate) struct MinFirst<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for MinFirst<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> Frontier<T> for MinFirst<T> {
    fn push(&mut self, item: T, priority: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }
}

/// Heap entry ordered by `(priority, seq)` only.
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // smallest seq, first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
