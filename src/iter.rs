use core::iter::{FusedIterator, Rev};
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use crate::doubly_linked_list::DoublyLinkedList;
use crate::linked_list::{LinkedList, Node};
use crate::queue::Queue;
use crate::stack::Stack;

/// Iterator over a `LinkedList`, head to tail
///
/// This iterator implements `Clone`.
pub struct LinkedListIter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> LinkedListIter<'a, T> {
    pub(crate) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            next: head,
            remaining: len,
            marker: PhantomData,
        }
    }
}

impl<T> Clone for LinkedListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for LinkedListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // Safety: the iterator borrows the list for `'a`, so every node
        // stays allocated and unmodified until the borrow ends.
        #[allow(unsafe_code)]
        let node: &'a Node<T> = unsafe { node.as_ref() };
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIter<'_, T> {}
impl<T> FusedIterator for LinkedListIter<'_, T> {}

// Safety: the iterator only hands out shared references into a borrowed list.
#[allow(unsafe_code)]
unsafe impl<T: Sync> Send for LinkedListIter<'_, T> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for LinkedListIter<'_, T> {}

/// Owning iterator over a `LinkedList`, head to tail
pub struct LinkedListIntoIter<T> {
    list: LinkedList<T>,
}

impl<T> LinkedListIntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for LinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.take_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIter<T> {}

/// Iterator over a `DoublyLinkedList`
///
/// Walks `next` links from the front and `prev` links from the back; the
/// two ends stop when they meet.
pub struct DoublyLinkedListIter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> DoublyLinkedListIter<'a, T> {
    pub(crate) fn new(
        list: &'a DoublyLinkedList<T>,
        front: Option<usize>,
        back: Option<usize>,
        len: usize,
    ) -> Self {
        Self {
            list,
            front,
            back,
            remaining: len,
        }
    }
}

impl<T> Clone for DoublyLinkedListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for DoublyLinkedListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DoublyLinkedListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for DoublyLinkedListIter<'_, T> {}
impl<T> FusedIterator for DoublyLinkedListIter<'_, T> {}

/// Owning iterator over a `DoublyLinkedList`, head to tail
pub struct DoublyLinkedListIntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> DoublyLinkedListIntoIter<T> {
    pub(crate) fn new(list: DoublyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for DoublyLinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.take_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for DoublyLinkedListIntoIter<T> {}

/// Iterator over a `Stack`, top to bottom
///
/// Covers the slots that were live when the iterator was created.
pub struct StackIter<'a, T> {
    slots: Rev<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> StackIter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self {
            slots: live.iter().rev(),
        }
    }
}

impl<T> Clone for StackIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for StackIter<'_, T> {}

/// Owning iterator over a `Stack`, popping from the top
pub struct StackIntoIter<T> {
    stack: Stack<T>,
}

impl<T> StackIntoIter<T> {
    pub(crate) fn new(stack: Stack<T>) -> Self {
        Self { stack }
    }
}

impl<T> Iterator for StackIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<T> ExactSizeIterator for StackIntoIter<T> {}

/// Iterator over a `Queue`, front to back
pub struct QueueIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> QueueIter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<T> Clone for QueueIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

/// Owning iterator over a `Queue`, dequeuing from the front
pub struct QueueIntoIter<T> {
    queue: Queue<T>,
}

impl<T> QueueIntoIter<T> {
    pub(crate) fn new(queue: Queue<T>) -> Self {
        Self { queue }
    }
}

impl<T> Iterator for QueueIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for QueueIntoIter<T> {}
