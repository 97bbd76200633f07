use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    weight: f64,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Min-heap on (weight, seq).
    fn cmp(&self, other: &Self) -> Ordering {
        other.key_cmp(self)
    }
}

/// Weight-ordered collection yielding the lightest item first.
///
/// Equal weights come out in insertion order. The reference tree builder and the merge replay
/// both seed it with leaves in ascending symbol order, so they pop the same pairs.
pub struct MergeQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for MergeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MergeQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `item` with `weight`.
    pub fn push(&mut self, weight: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { weight, seq, item });
    }

    /// Remove the lightest item.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.weight, e.item))
    }

    /// Remove the two lightest items, or nothing when fewer than two remain.
    pub fn pop_pair(&mut self) -> Option<((f64, T), (f64, T))> {
        if self.heap.len() < 2 {
            return None;
        }
        let a = self.pop()?;
        let b = self.pop()?;
        Some((a, b))
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/queue.rs"]
mod tests;
