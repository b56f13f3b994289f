use crate::Cost;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the queue, ordered in reverse by its priority so that the max-heap
/// [`BinaryHeap`] pops the smallest priority first.
#[derive(Debug)]
struct Element<T>(T, Cost);
impl<T> PartialEq for Element<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.1 == rhs.1
    }
}
impl<T> Eq for Element<T> {}
impl<T> PartialOrd for Element<T> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<T> Ord for Element<T> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1)
    }
}

/// A binary min-heap of items keyed by a numeric priority.
///
/// The same item may be pushed any number of times; every push is a separate entry. Items with
/// equal priorities come out in heap order, which is deterministic for the same sequence of
/// operations but not first-in-first-out.
///
/// ## Examples
/// ```
/// # use trace_pathfinding::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push('b', 7);
/// queue.push('a', 2);
/// queue.push('b', 1);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.pop(), Some('b'));
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.pop(), Some('b'));
/// assert_eq!(queue.pop(), None);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Element<T>>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds `item` with the given priority
    pub fn push(&mut self, item: T, priority: Cost) {
        self.heap.push(Element(item, priority));
    }

    /// Removes and returns the item with the smallest priority, or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Element(item, _)| item)
    }

    /// Like [`pop`](PriorityQueue::pop), but also returns the priority of the item
    pub fn pop_with_priority(&mut self) -> Option<(T, Cost)> {
        self.heap.pop().map(|Element(item, priority)| (item, priority))
    }

    /// The number of entries, counting duplicates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if there are no entries left
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> PriorityQueue<T> {
        PriorityQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = PriorityQueue::new();
        for (item, priority) in [(0, 5), (1, 3), (2, 9), (3, 0), (4, 3), (5, 1)] {
            queue.push(item, priority);
        }
        let mut priorities = vec![];
        while let Some((_, priority)) = queue.pop_with_priority() {
            priorities.push(priority);
        }
        assert_eq!(priorities, vec![0, 1, 3, 3, 5, 9]);
    }

    #[test]
    fn keeps_duplicates() {
        let mut queue = PriorityQueue::with_capacity(4);
        queue.push("x", 4);
        queue.push("x", 2);
        queue.push("x", 4);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_with_priority(), Some(("x", 2)));
        assert_eq!(queue.pop_with_priority(), Some(("x", 4)));
        assert_eq!(queue.pop_with_priority(), Some(("x", 4)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn ties_are_not_asserted() {
        // equal priorities come out in heap order; only the set of items is stable
        let mut queue = PriorityQueue::new();
        for item in 0..6 {
            queue.push(item, 1);
        }
        let mut items: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        items.sort_unstable();
        assert_eq!(items, vec![0, 1, 2, 3, 4, 5]);
    }
}
