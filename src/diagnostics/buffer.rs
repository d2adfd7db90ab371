// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for diagnostic event storage.
//!
//! A memory-bounded ring buffer that automatically evicts the oldest
//! entries when capacity is reached.

use std::collections::VecDeque;

use crate::config::defaults::{
    DEFAULT_EVENT_BUFFER_CAPACITY, MAX_EVENT_BUFFER_CAPACITY, MIN_EVENT_BUFFER_CAPACITY,
};

/// Validated buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping into the valid range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(MIN_EVENT_BUFFER_CAPACITY, MAX_EVENT_BUFFER_CAPACITY))
    }

    /// Returns the raw capacity value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_EVENT_BUFFER_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates over elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no elements are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all stored elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_EVENT_BUFFER_CAPACITY);
        assert_eq!(
            BufferCapacity::new(usize::MAX).value(),
            MAX_EVENT_BUFFER_CAPACITY
        );
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(MIN_EVENT_BUFFER_CAPACITY));
        for i in 0..MIN_EVENT_BUFFER_CAPACITY + 3 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), MIN_EVENT_BUFFER_CAPACITY);
        assert_eq!(buffer.iter().next(), Some(&3));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = CircularBuffer::default();
        buffer.push("event");
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());
    }
}
