// packages/plugin-stats/src/recording/bounded.rs
//! Fixed-capacity FIFO ring
//!
//! `push` is the only way in, and it evicts the oldest item once the ring
//! is full, so `len() <= capacity()` holds after every operation.

use std::collections::VecDeque;

/// Bounded first-in first-out buffer
#[derive(Debug, Clone)]
pub struct BoundedLog<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedLog<T> {
    /// Create a ring holding at most `capacity` items (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, returning the evicted oldest item if the ring was full
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// The last `n` items, oldest first
    pub fn last(&self, n: usize) -> impl Iterator<Item = &T> {
        let skip = self.items.len().saturating_sub(n);
        self.items.iter().skip(skip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_until_full() {
        let mut ring = BoundedLog::new(3);
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert!(ring.is_full());

        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut ring = BoundedLog::new(0);
        assert_eq!(ring.capacity(), 1);
        ring.push("a");
        assert_eq!(ring.push("b"), Some("a"));
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_last() {
        let mut ring = BoundedLog::new(5);
        for i in 0..5 {
            ring.push(i);
        }
        assert_eq!(ring.last(2).copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(ring.last(10).count(), 5);
        assert_eq!(ring.last(0).count(), 0);
    }

    proptest! {
        #[test]
        fn prop_keeps_most_recent(capacity in 1usize..64, items in prop::collection::vec(any::<u32>(), 0..200)) {
            let mut ring = BoundedLog::new(capacity);
            for (i, item) in items.iter().enumerate() {
                ring.push(*item);
                prop_assert!(ring.len() <= capacity);
                prop_assert_eq!(ring.len(), (i + 1).min(capacity));
            }

            let start = items.len().saturating_sub(capacity);
            let kept: Vec<u32> = ring.iter().copied().collect();
            prop_assert_eq!(kept, items[start..].to_vec());
        }
    }
}
