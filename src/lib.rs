#![cfg_attr(not(test), no_std)]

//! `algocoll`: textbook linked lists, a growable stack and a growable queue.
//!
//! The crate provides four independent single-threaded containers:
//!
//! - [`LinkedList`]: singly linked, head and tail pointers
//! - [`DoublyLinkedList`]: doubly linked, nodes kept in an index arena
//! - [`Stack`]: LIFO over a growable slot buffer
//! - [`Queue`]: FIFO over a growable slot buffer
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! | Operation | `LinkedList` | `DoublyLinkedList` | `Stack` | `Queue` |
//! |---|---|---|---|---|
//! | add/push/enqueue | O(1) | O(1) | O(1) amortized | O(1) amortized |
//! | remove head / pop / dequeue | O(1) | O(1) | O(1) | O(1) |
//! | remove tail | O(n) | O(1) | - | - |
//! | remove by value, contains | O(n) | O(n) | O(n) | O(n) |
//! | clear | O(n) | O(capacity) | O(capacity) | O(capacity) |
//!
//! Stack and queue buffers double when they run out of room. A removed
//! element leaves its container at the moment of removal: list nodes are
//! unlinked and dropped, buffer slots are vacated.
//!
//! # Linked Lists
//!
//! ```
//! # use algocoll::LinkedList;
//! let mut list = LinkedList::new();
//! list.add_tail(10);
//! list.add_tail(20);
//! list.add_head(5);
//! list.add_tail(30);
//! assert_eq!(list.to_string(), "5 -> 10 -> 20 -> 30 -> NULL");
//!
//! assert!(list.remove(&20));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 30]);
//!
//! // Removing from an empty list still reports success
//! let mut empty: LinkedList<u8> = LinkedList::new();
//! assert!(empty.remove_head());
//! assert!(empty.remove_tail());
//! ```
//!
//! The doubly linked list hands out node handles. Unlinking through a handle
//! is O(1):
//!
//! ```
//! # use algocoll::DoublyLinkedList;
//! let mut list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
//!
//! let b = list.find(&"b").unwrap();
//! assert_eq!(list.next_node(b).and_then(|c| list.get(c)), Some(&"c"));
//! assert_eq!(list.unlink(b), Some("b"));
//!
//! // The handle is stale once its node is gone
//! assert_eq!(list.get(b), None);
//! assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&"c", &"a"]);
//! ```
//!
//! # Stack and Queue
//!
//! ```
//! # use algocoll::{CollectionError, Stack};
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! stack.push(30);
//!
//! assert_eq!(stack.peek(), Ok(&30));
//! assert_eq!(stack.pop(), Ok(30));
//! assert_eq!(stack.pop(), Ok(20));
//! assert_eq!(stack.iter().collect::<Vec<_>>(), vec![&10]);
//!
//! stack.clear();
//! assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
//! ```
//!
//! ```
//! # use algocoll::{CollectionError, Queue};
//! let mut queue = Queue::from(vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
//!
//! assert_eq!(queue.peek(), Ok(&10));
//! assert_eq!(queue.dequeue(), Ok(10));
//! assert_eq!(queue.dequeue(), Ok(20));
//! assert_eq!(queue.len(), 8);
//!
//! queue.clear();
//! assert_eq!(queue.dequeue(), Err(CollectionError::EmptyQueue));
//! ```

extern crate alloc;

mod buffer;
mod doubly_linked_list;
mod error;
mod iter;
mod linked_list;
mod queue;
mod stack;

// Re-export public types and traits
pub use doubly_linked_list::{DoublyLinkedList, NodeRef};
pub use error::CollectionError;
pub use iter::{
    DoublyLinkedListIntoIter, DoublyLinkedListIter, LinkedListIntoIter, LinkedListIter,
    QueueIntoIter, QueueIter, StackIntoIter, StackIter,
};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
