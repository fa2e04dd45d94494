use algocoll::{DoublyLinkedList, LinkedList, Queue, Stack};

#[test]
fn test_iterators_on_empty_containers() {
    let list: LinkedList<u8> = LinkedList::new();
    let doubly: DoublyLinkedList<u8> = DoublyLinkedList::new();
    let stack: Stack<u8> = Stack::new();
    let queue: Queue<u8> = Queue::new();

    assert_eq!(list.iter().next(), None);
    assert_eq!(doubly.iter().next(), None);
    assert_eq!(doubly.iter().next_back(), None);
    assert_eq!(stack.iter().next(), None);
    assert_eq!(queue.iter().next(), None);

    assert_eq!(list.iter().size_hint(), (0, Some(0)));
    assert_eq!(stack.iter().size_hint(), (0, Some(0)));
}

#[test]
fn test_exact_size_tracks_progress() {
    let list: LinkedList<u8> = [1, 2, 3].into_iter().collect();
    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);

    let queue: Queue<u8> = [1, 2, 3].into_iter().collect();
    let mut iter = queue.iter();
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_each_value_yielded_once_per_pass() {
    let list: LinkedList<u32> = (0..100).collect();
    let first: u32 = list.iter().sum();
    let second: u32 = list.iter().sum();
    assert_eq!(first, (0..100).sum());
    assert_eq!(first, second);
}

#[test]
fn test_doubly_linked_iter_ends_meet() {
    let list: DoublyLinkedList<u8> = [1, 2, 3, 4].into_iter().collect();
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_cloned_iterator_is_independent() {
    let stack: Stack<u8> = [1, 2, 3].into_iter().collect();
    let mut iter = stack.iter();
    iter.next();
    let rest: Vec<_> = iter.clone().collect();

    assert_eq!(rest, vec![&2, &1]);
    assert_eq!(iter.count(), 2);
}

#[test]
fn test_owning_iterators_follow_container_order() {
    let list: LinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let doubly: DoublyLinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let stack: Stack<String> = ["a", "b"].into_iter().map(String::from).collect();
    let queue: Queue<String> = ["a", "b"].into_iter().map(String::from).collect();

    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doubly.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_for_loop_over_references() {
    let queue: Queue<u8> = [1, 2, 3].into_iter().collect();
    let mut seen = Vec::new();
    for value in &queue {
        seen.push(*value);
    }
    assert_eq!(seen, vec![1, 2, 3]);
}
