use algocoll::{CollectionError, Stack};

fn seeded() -> Stack<i32> {
    let mut stack = Stack::new();
    for value in [10, 20, 30, 40, 50, 60, 70, 80, 90] {
        stack.push(value);
    }
    stack
}

#[test]
fn test_new_stack_is_empty() {
    let stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), 1);
}

#[test]
fn test_with_capacity() {
    let stack: Stack<i32> = Stack::with_capacity(16).unwrap();
    assert_eq!(stack.capacity(), 16);

    assert_eq!(
        Stack::<i32>::with_capacity(0).unwrap_err(),
        CollectionError::InvalidConfiguration {
            parameter: "capacity",
            value: 0
        }
    );
}

#[test]
fn test_push_peek_pop_sequence() {
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);

    assert_eq!(stack.peek(), Ok(&30));
    assert_eq!(stack.pop(), Ok(30));
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![10]);
}

#[test]
fn test_peek_does_not_remove() {
    let stack = seeded();
    assert_eq!(stack.peek(), Ok(&90));
    assert_eq!(stack.peek(), Ok(&90));
    assert_eq!(stack.len(), 9);
}

#[test]
fn test_peek_empty_stack() {
    let mut stack = seeded();
    stack.clear();
    assert_eq!(stack.peek(), Err(CollectionError::EmptyStack));
}

#[test]
fn test_pop_empty_stack_every_time() {
    let mut stack: Stack<i32> = Stack::new();
    for _ in 0..3 {
        assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
        assert_eq!(stack.len(), 0);
    }

    stack.push(1);
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
}

#[test]
fn test_push_adds_to_top() {
    let mut stack = seeded();
    stack.push(1001);

    assert_eq!(stack.peek(), Ok(&1001));
    assert_eq!(stack.len(), 10);
}

#[test]
fn test_clear() {
    let mut stack = seeded();
    stack.clear();

    assert!(stack.is_empty());
    assert_eq!(stack.iter().count(), 0);

    stack.push(5);
    assert_eq!(stack.peek(), Ok(&5));
}

#[test]
fn test_contains() {
    let stack = seeded();
    for (value, expected) in [(-1, false), (10, true), (40, true), (80, true), (100, false)] {
        assert_eq!(stack.contains(&value), expected, "contains({value})");
    }
}

#[test]
fn test_popped_value_is_not_contained() {
    let mut stack = seeded();
    stack.pop().unwrap();
    assert!(!stack.contains(&90));
}

#[test]
fn test_iteration_is_lifo_and_non_destructive() {
    let stack = seeded();
    let first: Vec<i32> = stack.iter().copied().collect();
    let second: Vec<i32> = (&stack).into_iter().copied().collect();

    assert_eq!(first, vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
    assert_eq!(first, second);
    assert_eq!(stack.len(), 9);
}

#[test]
fn test_from_iterator_pushes_in_order() {
    let stack: Stack<i32> = (1..=3).collect();
    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn test_extend() {
    let mut stack = seeded();
    stack.extend([100, 110]);
    assert_eq!(stack.peek(), Ok(&110));
    assert_eq!(stack.len(), 11);
}

#[test]
fn test_one_million_pushes() {
    let mut stack = Stack::new();
    for i in 0..1_000_000 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 1_000_000);
    assert!(stack.capacity() >= 1_000_000);

    for expected in (0..1_000_000).rev() {
        assert_eq!(stack.pop(), Ok(expected));
    }
    assert!(stack.is_empty());
}

#[test]
fn test_count_after_pushes_and_pops() {
    let mut stack = Stack::new();
    for i in 0..25 {
        stack.push(i);
    }
    for _ in 0..10 {
        stack.pop().unwrap();
    }
    assert_eq!(stack.len(), 15);
}
