use core::fmt;
use core::mem;

use alloc::vec::Vec;

use crate::error::{destination_window, CollectionError};
use crate::iter::{DoublyLinkedListIntoIter, DoublyLinkedListIter};

/// Handle to a node of a [`DoublyLinkedList`], returned by
/// [`DoublyLinkedList::find`] and the `add_*` methods.
///
/// A handle stays valid until its node is removed. After that every method
/// taking the handle treats it as absent, even once the node's storage slot
/// has been reused for another value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Doubly linked list over an arena of nodes addressed by index.
///
/// Each node stores the index of its successor and predecessor. The
/// predecessor link is a plain index used for traversal and unlinking;
/// ownership of every value rests with the arena, so the back links form no
/// ownership cycle. Freed slots are chained into a free list and reused by
/// later insertions.
///
/// Invariants:
/// - `head.is_none() == tail.is_none() == (len == 0)`
/// - the head has no `prev`, the tail has no `next`
/// - for every node `n` with a successor `s`, `s.prev == n`
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    /// Generation given to newly pushed slots; above every generation
    /// handed out before the last `clear`.
    epoch: u32,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            epoch: 0,
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
        self.head.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    /// Returns the last value, or `None` if the list is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.tail.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    pub(crate) fn node(&self, index: usize) -> Option<&Node<T>> {
        match &self.slots.get(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        match &mut self.slots.get_mut(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    fn handle(&self, index: usize) -> Option<NodeRef> {
        let slot = self.slots.get(index)?;
        Some(NodeRef {
            index,
            generation: slot.generation,
        })
    }

    fn resolve(&self, node: NodeRef) -> Option<&Node<T>> {
        let slot = self.slots.get(node.index)?;
        if slot.generation != node.generation {
            return None;
        }
        match &slot.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Vacant { .. } => None,
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.free {
            if let Some(slot) = self.slots.get_mut(index) {
                if let Entry::Vacant { next_free } = slot.entry {
                    self.free = next_free;
                    slot.entry = Entry::Occupied(node);
                    return index;
                }
            }
        }
        self.slots.push(Slot {
            generation: self.epoch,
            entry: Entry::Occupied(node),
        });
        self.slots.len() - 1
    }

    /// Adds `value` at the start of the list. O(1).
    pub fn add_head(&mut self, value: T) -> NodeRef {
        let old_head = self.head;
        let index = self.allocate(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head.and_then(|head| self.node_mut(head)) {
            Some(head) => head.prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
        NodeRef {
            index,
            generation: self.slots.get(index).map_or(0, |slot| slot.generation),
        }
    }

    /// Adds `value` at the end of the list. O(1).
    pub fn add_tail(&mut self, value: T) -> NodeRef {
        let old_tail = self.tail;
        let index = self.allocate(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        NodeRef {
            index,
            generation: self.slots.get(index).map_or(0, |slot| slot.generation),
        }
    }

    /// Adds `value` at the start of the list. Same as [`DoublyLinkedList::add_head`].
    pub fn add(&mut self, value: T) -> NodeRef {
        self.add_head(value)
    }

    /// Removes the first value. O(1).
    ///
    /// Always returns `true`, including on an empty list.
    pub fn remove_head(&mut self) -> bool {
        if let Some(head) = self.head {
            self.unlink_index(head);
        }
        true
    }

    /// Removes the last value. O(1) through the tail's back link.
    ///
    /// Always returns `true`, including on an empty list.
    pub fn remove_tail(&mut self) -> bool {
        if let Some(tail) = self.tail {
            self.unlink_index(tail);
        }
        true
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// O(n) to find the node, O(1) to unlink it. Returns whether a node was
    /// found and removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Some(node) => self.unlink(node).is_some(),
            None => false,
        }
    }

    /// Returns a handle to the first node whose value equals `value`. O(n).
    pub fn find(&self, value: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index)?;
            if node.value == *value {
                return self.handle(index);
            }
            current = node.next;
        }
        None
    }

    /// Returns `true` if any value equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns the value of `node`, or `None` for a stale handle.
    #[must_use]
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.resolve(node).map(|node| &node.value)
    }

    /// Returns the value of `node` mutably, or `None` for a stale handle.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.resolve(node)?;
        self.node_mut(node.index).map(|node| &mut node.value)
    }

    /// Returns the handle of the node after `node`.
    #[must_use]
    pub fn next_node(&self, node: NodeRef) -> Option<NodeRef> {
        self.resolve(node)?.next.and_then(|index| self.handle(index))
    }

    /// Returns the handle of the node before `node`.
    #[must_use]
    pub fn prev_node(&self, node: NodeRef) -> Option<NodeRef> {
        self.resolve(node)?.prev.and_then(|index| self.handle(index))
    }

    /// Removes `node` from the list in O(1) and returns its value.
    ///
    /// Returns `None` if the handle is stale.
    pub fn unlink(&mut self, node: NodeRef) -> Option<T> {
        self.resolve(node)?;
        self.unlink_index(node.index)
    }

    /// Detaches the occupied node at `index`, repairing its neighbours' links
    /// and recycling the slot.
    fn unlink_index(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }
        let entry = mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free = Some(index);

        let Entry::Occupied(node) = entry else {
            return None;
        };
        match node.prev.and_then(|prev| self.node_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.value)
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

    /// Removes every value, invalidates every handle and releases the node
    /// storage. O(capacity).
    pub fn clear(&mut self) {
        self.epoch = self
            .slots
            .iter()
            .map(|slot| slot.generation)
            .fold(self.epoch, u32::max)
            .wrapping_add(1);
        self.slots = Vec::new();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator from head to tail. Reversing it walks the back
    /// links from tail to head.
    #[must_use]
    pub fn iter(&self) -> DoublyLinkedListIter<'_, T> {
        DoublyLinkedListIter::new(self, self.head, self.tail, self.len)
    }

    pub(crate) fn take_head(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink_index(head)
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the chain as `5 -> 10 -> 20 -> NULL`.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_tail(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    /// Builds a list in iteration order: the first value becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = DoublyLinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = DoublyLinkedListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        DoublyLinkedListIntoIter::new(self)
    }
}
