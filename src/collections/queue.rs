//! `FifoQueue` — the first-in, first-out work list used by breadth-first search.
//!
//! Backed by `std::collections::VecDeque`. Growth goes through `try_reserve`, so
//! an exhausted allocator surfaces as a [`GraphError`] instead of an abort and the
//! caller decides whether to skip the item or give up.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};

/// A growable FIFO queue with fallible insertion.
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue. Does not allocate.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = VecDeque::new();
        items.try_reserve(capacity)?;
        Ok(Self { items })
    }

    /// Number of queued items.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` at the back of the queue.
    ///
    /// On allocation failure the item is dropped and the queue is unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        self.items.try_reserve(1).map_err(GraphError::from)?;
        self.items.push_back(item);
        Ok(())
    }

    /// Removes and returns the item at the front, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the item that `dequeue` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes every queued item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FifoQueue")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = FifoQueue::new();
        for i in 0..5 {
            q.enqueue(i).unwrap();
        }
        assert_eq!(q.len(), 5);
        assert_eq!(q.peek(), Some(&0));

        let drained: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_interleaved() {
        let mut q = FifoQueue::with_capacity(2).unwrap();
        q.enqueue('a').unwrap();
        q.enqueue('b').unwrap();
        assert_eq!(q.dequeue(), Some('a'));
        q.enqueue('c').unwrap();
        assert_eq!(q.dequeue(), Some('b'));
        assert_eq!(q.dequeue(), Some('c'));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_clear() {
        let mut q: FifoQueue<u32> = FifoQueue::default();
        q.enqueue(1).unwrap();
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn test_with_capacity_overflow_is_memory_error() {
        let err = FifoQueue::<u64>::with_capacity(usize::MAX).unwrap_err();
        assert!(err.is_memory_error());
    }
}
