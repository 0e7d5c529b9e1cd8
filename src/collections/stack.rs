//! `LifoStack` — the last-in, first-out work list used by depth-first search.

use crate::error::Result;

/// A growable LIFO stack with fallible insertion.
pub struct LifoStack<T> {
    items: Vec<T>,
}

impl<T> LifoStack<T> {
    /// Creates an empty stack. Does not allocate.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity)?;
        Ok(Self { items })
    }

    /// Number of items on the stack.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `item` on top of the stack.
    ///
    /// On allocation failure the item is dropped and the stack is unchanged.
    pub fn push(&mut self, item: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Pops the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes every item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for LifoStack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LifoStack")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = LifoStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        s.push(4).unwrap();
        assert_eq!(s.pop(), Some(4));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut s = LifoStack::with_capacity(4).unwrap();
        s.push(7).unwrap();
        s.push(7).unwrap();
        assert_eq!(s.len(), 2);
        s.clear();
        assert!(s.is_empty());
    }
}
