//! `MinPriorityQueue` — a binary min-heap ordered by a caller-supplied comparator.
//!
//! The comparator is a value owned by the queue, so different queues can order
//! the same item type differently and no ordering state is shared between them.
//!
//! Items that compare equal come out in the order they were inserted. Every
//! entry carries a monotonically increasing sequence number that breaks ties,
//! which makes extraction order a pure function of the insertion sequence.

use core::cmp::Ordering;
use core::fmt;

use crate::error::Result;

struct Entry<T> {
    seq: u64,
    item: T,
}

/// A priority queue that always yields its smallest item first.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert` | \(O(\log n)\) |
/// | `extract_min` | \(O(\log n)\) |
/// | `peek` | \(O(1)\) |
pub struct MinPriorityQueue<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    data: Vec<Entry<T>>,
    compare: F,
    next_seq: u64,
}

impl<T, F> MinPriorityQueue<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates an empty queue ordered by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            data: Vec::new(),
            compare,
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize, compare: F) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve(capacity)?;
        Ok(Self {
            data,
            compare,
            next_seq: 0,
        })
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an item.
    ///
    /// On allocation failure the item is dropped and the heap is unchanged.
    pub fn insert(&mut self, item: T) -> Result<()> {
        self.data.try_reserve(1)?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.data.push(Entry { seq, item });
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes and returns the smallest item.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    /// Returns the smallest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|e| &e.item)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Strict "a comes out before b": comparator first, insertion order on ties.
    fn less(&mut self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.data[a], &self.data[b]);
        match (self.compare)(&ea.item, &eb.item) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => ea.seq < eb.seq,
        }
    }
}

impl<T, F> fmt::Debug for MinPriorityQueue<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinPriorityQueue")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order() {
        let mut heap = MinPriorityQueue::new(|a: &i32, b: &i32| a.cmp(b));
        for x in [5, 1, 10, 2, 8, 3, 7] {
            heap.insert(x).unwrap();
        }
        assert_eq!(heap.peek(), Some(&1));
        let mut result = Vec::new();
        while let Some(x) = heap.extract_min() {
            result.push(x);
        }
        assert_eq!(result, vec![1, 2, 3, 5, 7, 8, 10]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_comparator_is_per_queue() {
        let mut max_first = MinPriorityQueue::new(|a: &u8, b: &u8| b.cmp(a));
        for x in [3, 9, 1] {
            max_first.insert(x).unwrap();
        }
        assert_eq!(max_first.extract_min(), Some(9));
        assert_eq!(max_first.extract_min(), Some(3));
        assert_eq!(max_first.extract_min(), Some(1));
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut heap =
            MinPriorityQueue::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
        heap.insert((2, 'a')).unwrap();
        heap.insert((1, 'b')).unwrap();
        heap.insert((2, 'c')).unwrap();
        heap.insert((1, 'd')).unwrap();
        heap.insert((2, 'e')).unwrap();

        let order: Vec<char> = std::iter::from_fn(|| heap.extract_min())
            .map(|(_, c)| c)
            .collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c', 'e']);
    }

    #[test]
    fn test_float_keys() {
        let mut heap =
            MinPriorityQueue::with_capacity(4, |a: &f64, b: &f64| a.total_cmp(b)).unwrap();
        heap.insert(2.5).unwrap();
        heap.insert(f64::INFINITY).unwrap();
        heap.insert(0.0).unwrap();
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_min(), Some(0.0));
        assert_eq!(heap.extract_min(), Some(2.5));
        assert_eq!(heap.extract_min(), Some(f64::INFINITY));
        assert_eq!(heap.extract_min(), None);
    }
}
