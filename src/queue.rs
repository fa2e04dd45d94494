use alloc::vec::Vec;

use crate::buffer::SlotBuffer;
use crate::error::CollectionError;
use crate::iter::{QueueIntoIter, QueueIter};

const DEFAULT_CAPACITY: usize = 4;

/// First-in first-out collection backed by a growable slot buffer.
///
/// Live elements occupy slots `head..head + len`. Dequeuing advances `head`
/// and leaves the vacated slot empty; the buffer never wraps around. When
/// the write position reaches the end of the buffer, the live elements are
/// moved to the front: in place if they fill at most half the buffer,
/// otherwise into a buffer of twice the capacity.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    buffer: SlotBuffer<T>,
    head: usize,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue with room for four elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: SlotBuffer::vacant(DEFAULT_CAPACITY),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidConfiguration` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        Ok(Self {
            buffer: SlotBuffer::with_capacity(capacity)?,
            head: 0,
            len: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Index of the slot the next `enqueue` writes to.
    fn write_index(&self) -> usize {
        self.head + self.len
    }

    fn make_room(&mut self) {
        if self.head > 0 && self.len * 2 <= self.buffer.capacity() {
            self.buffer.compact(self.head, self.len);
        } else {
            self.buffer.grow(self.head, self.len);
        }
        self.head = 0;
    }

    /// Adds `value` at the back of the queue. Amortized O(1).
    pub fn enqueue(&mut self, value: T) {
        if self.write_index() == self.buffer.capacity() {
            self.make_room();
        }
        self.buffer.put(self.write_index(), value);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// The vacated slot is cleared before returning.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyQueue` if the queue is empty. The queue
    /// is left untouched.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyQueue);
        }
        let value = self
            .buffer
            .take(self.head)
            .ok_or(CollectionError::EmptyQueue)?;
        self.len -= 1;
        // An emptied queue writes from the start of its buffer again
        self.head = if self.len == 0 { 0 } else { self.head + 1 };
        Ok(value)
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyQueue` if the queue is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyQueue);
        }
        self.buffer.get(self.head).ok_or(CollectionError::EmptyQueue)
    }

    /// Removes every element, releasing each one immediately. O(capacity).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.head = 0;
        self.len = 0;
    }

    /// Returns `true` if any element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns an iterator from the front of the queue to the back.
    #[must_use]
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter::new(self.buffer.live(self.head, self.len))
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    /// Seeds the buffer directly with `values`; the first value is the front.
    ///
    /// An empty vector yields a queue with the default capacity.
    fn from(values: Vec<T>) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        let len = values.len();
        Self {
            buffer: SlotBuffer::from_vec(values),
            head: 0,
            len,
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = QueueIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        QueueIntoIter::new(self)
    }
}
