use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::error::{destination_window, CollectionError};
use crate::iter::{LinkedListIntoIter, LinkedListIter};

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Moves a new node to the heap and hands its ownership to the caller
    /// as a raw pointer. The node must later be released with `Box::from_raw`.
    fn allocate(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

/// Singly linked list with head and tail pointers.
///
/// Every node is a leaked `Box` that the list owns through raw pointers:
/// `head` reaches the whole chain, `tail` is a second pointer to the last
/// node, which keeps `add_tail` O(1). Nodes are reclaimed with
/// `Box::from_raw` exactly once, when they are unlinked. No pointer is ever
/// derived from a live `Box`, so moving nodes around never invalidates
/// `tail`. Removing from the tail still walks from the head.
///
/// Invariant: `head.is_none() == tail.is_none() == (len == 0)`.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first value, or `None` if the list is empty.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.value_of(self.head)
    }

    /// Returns the last value, or `None` if the list is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.value_of(self.tail)
    }

    fn value_of(&self, node: Option<NonNull<Node<T>>>) -> Option<&T> {
        let node = node?;
        // Safety: `node` belongs to this list and stays allocated while
        // `self` is borrowed.
        #[allow(unsafe_code)]
        let node = unsafe { node.as_ref() };
        Some(&node.value)
    }

    /// Adds `value` at the start of the list. O(1).
    pub fn add_head(&mut self, value: T) {
        let node = Node::allocate(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Adds `value` at the end of the list. O(1).
    pub fn add_tail(&mut self, value: T) {
        let node = Node::allocate(value, None);
        match self.tail {
            // Safety: `tail` is the last node of this list, and `&mut self`
            // guarantees no reference to it is alive.
            #[allow(unsafe_code)]
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Adds `value` at the start of the list. Same as [`LinkedList::add_head`].
    pub fn add(&mut self, value: T) {
        self.add_head(value);
    }

    /// Removes the first value. O(1).
    ///
    /// Always returns `true`, including on an empty list.
    pub fn remove_head(&mut self) -> bool {
        self.take_head();
        true
    }

    /// Detaches the head node and returns its value.
    pub(crate) fn take_head(&mut self) -> Option<T> {
        let head = self.head?;
        // Safety: `head` came from `Node::allocate` and is owned by this
        // list alone; clearing the link below makes this its only release.
        #[allow(unsafe_code)]
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Detaches the successor of `before` and returns its value.
    fn take_after(&mut self, before: NonNull<Node<T>>) -> Option<T> {
        // Safety: `before` belongs to this list and `&mut self` guarantees
        // no reference into the chain is alive. Its successor is owned by
        // the list and is released only here, after being unlinked.
        #[allow(unsafe_code)]
        let removed = unsafe {
            let removed = (*before.as_ptr()).next?;
            Box::from_raw(removed.as_ptr())
        };
        let Node { value, next } = *removed;
        #[allow(unsafe_code)]
        unsafe {
            (*before.as_ptr()).next = next;
        }
        if next.is_none() {
            self.tail = Some(before);
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes the last value. O(n): the node before the tail is found by
    /// walking from the head.
    ///
    /// Always returns `true`, including on an empty list.
    pub fn remove_tail(&mut self) -> bool {
        match self.len {
            0 => {}
            1 => self.clear(),
            len => {
                if let Some(before_tail) = self.node_at(len - 2) {
                    self.take_after(before_tail);
                }
            }
        }
        true
    }

    /// Removes the first node whose value equals `value`. O(n).
    ///
    /// Returns whether a node was found and removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut before = None;
        let mut current = self.head;
        while let Some(node) = current {
            // Safety: `node` belongs to this list; the reference ends before
            // anything is unlinked.
            #[allow(unsafe_code)]
            let (found, next) = unsafe {
                let node = node.as_ref();
                (node.value == *value, node.next)
            };
            if found {
                match before {
                    Some(before) => self.take_after(before),
                    None => self.take_head(),
                };
                return true;
            }
            before = Some(node);
            current = next;
        }
        false
    }

    /// Returns `true` if any value equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Clones every value into `dest`, head first, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DestinationTooSmall` if `dest` has fewer than
    /// `len()` slots from `offset` on. Nothing is written in that case.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        let window = destination_window(dest, offset, self.len)?;
        for (slot, value) in window.iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Removes every value, one node at a time. O(n).
    pub fn clear(&mut self) {
        while self.take_head().is_some() {}
    }

    /// Returns an iterator from head to tail.
    #[must_use]
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter::new(self.head, self.len)
    }

    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut current = self.head;
        for _ in 0..index {
            let node = current?;
            // Safety: `node` belongs to this list and `self` is borrowed.
            #[allow(unsafe_code)]
            let next = unsafe { node.as_ref().next };
            current = next;
        }
        current
    }
}

// Safety: the list exclusively owns every node reachable from `head`,
// including the one `tail` points at, so it is as thread-safe as a
// `Box<T>` chain.
#[allow(unsafe_code)]
unsafe impl<T: Send> Send for LinkedList<T> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain as `5 -> 10 -> 20 -> NULL`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_tail(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds a list in iteration order: the first value becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIter::new(self)
    }
}
