use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    priority: f64,
    value: usize,
    seq: u64,
}

// BinaryHeap is a max-heap, so the comparison is reversed: lower priority
// first, then lower value, then earlier insertion.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.value.cmp(&self.value))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Min-priority queue of node indices keyed by tentative distance.
///
/// There is no decrease-key; callers push a fresh entry and skip stale ones
/// when they come out.
#[derive(Debug, Default, Clone)]
pub struct PriorityQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, value: usize, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueueEntry {
            priority,
            value,
            seq,
        });
    }

    /// Removes the entry with the smallest priority, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<(usize, f64)> {
        self.heap.pop().map(|entry| (entry.value, entry.priority))
    }

    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.peek().map(|entry| (entry.value, entry.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(4, 3.5);
        queue.enqueue(1, 0.25);
        queue.enqueue(9, 2.0);
        queue.enqueue(2, 10.0);
        let order: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(order, vec![(1, 0.25), (9, 2.0), (4, 3.5), (2, 10.0)]);
    }

    #[test]
    fn empty_queue_signals_none() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn equal_priorities_prefer_lower_value() {
        let mut queue = PriorityQueue::with_capacity(3);
        queue.enqueue(7, 1.0);
        queue.enqueue(3, 1.0);
        queue.enqueue(5, 1.0);
        assert_eq!(queue.dequeue(), Some((3, 1.0)));
        assert_eq!(queue.dequeue(), Some((5, 1.0)));
        assert_eq!(queue.dequeue(), Some((7, 1.0)));
    }

    #[test]
    fn keeps_stale_duplicates() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(2, 5.0);
        queue.enqueue(2, 1.0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some((2, 1.0)));
        assert_eq!(queue.dequeue(), Some((2, 5.0)));
    }
}
