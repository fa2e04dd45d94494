use crate::buffer::SlotBuffer;
use crate::error::CollectionError;
use crate::iter::{StackIntoIter, StackIter};

const DEFAULT_CAPACITY: usize = 1;

/// Last-in first-out collection backed by a growable slot buffer.
///
/// Elements occupy slots `0..len`; the top of the stack is slot `len - 1`.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    buffer: SlotBuffer<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack with room for one element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: SlotBuffer::vacant(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty stack with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidConfiguration` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        Ok(Self {
            buffer: SlotBuffer::with_capacity(capacity)?,
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

    /// Pushes `value` onto the top of the stack.
    ///
    /// Doubles the buffer first when it is full. Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.len == self.buffer.capacity() {
            self.buffer.grow(0, self.len);
        }
        self.buffer.put(self.len, value);
        self.len += 1;
    }

    /// Removes and returns the top element.
    ///
    /// The vacated slot is cleared before returning.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyStack` if the stack is empty. The stack
    /// is left untouched.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let top = self.len.checked_sub(1).ok_or(CollectionError::EmptyStack)?;
        let value = self.buffer.take(top).ok_or(CollectionError::EmptyStack)?;
        self.len = top;
        Ok(value)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyStack` if the stack is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        let top = self.len.checked_sub(1).ok_or(CollectionError::EmptyStack)?;
        self.buffer.get(top).ok_or(CollectionError::EmptyStack)
    }

    /// Removes every element, releasing each one immediately. O(capacity).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.len = 0;
    }

    /// Returns `true` if any element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns an iterator from the top of the stack to the bottom.
    ///
    /// The iterator covers the elements present when it was created.
    #[must_use]
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter::new(self.buffer.live(0, self.len))
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = StackIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        StackIntoIter::new(self)
    }
}
