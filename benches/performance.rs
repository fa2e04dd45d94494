use algocoll::{DoublyLinkedList, LinkedList, Queue, Stack};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_stack_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_then_pop", size), size, |b, &size| {
            b.iter(|| {
                let mut stack = Stack::new();
                for i in 0..size {
                    stack.push(i);
                }
                while let Ok(value) = stack.pop() {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("enqueue_then_dequeue", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut queue = Queue::new();
                    for i in 0..size {
                        queue.enqueue(i);
                    }
                    while let Ok(value) = queue.dequeue() {
                        black_box(value);
                    }
                });
            },
        );

        // Steady state: the buffer stays small and compacts in place
        group.bench_with_input(BenchmarkId::new("churn", size), size, |b, &size| {
            b.iter(|| {
                let mut queue = Queue::new();
                queue.enqueue(0);
                for i in 1..size {
                    queue.enqueue(i);
                    black_box(queue.dequeue().ok());
                }
                black_box(queue.len())
            });
        });
    }
    group.finish();
}

fn bench_linked_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add_tail", size), size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.add_tail(i);
                }
                black_box(list.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("remove_tail", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: LinkedList<usize> = (0..size).collect();
                    while !list.is_empty() {
                        list.remove_tail();
                    }
                    black_box(list.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_doubly_linked_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("doubly_linked_list");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("remove_tail", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list: DoublyLinkedList<usize> = (0..size).collect();
                    while !list.is_empty() {
                        list.remove_tail();
                    }
                    black_box(list.len())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unlink_by_handle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut list = DoublyLinkedList::new();
                    let handles: Vec<_> = (0..size).map(|i| list.add_tail(i)).collect();
                    for handle in handles.into_iter().step_by(2) {
                        black_box(list.unlink(handle));
                    }
                    black_box(list.len())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("iterate", size), size, |b, &size| {
            let list: DoublyLinkedList<usize> = (0..size).collect();
            b.iter(|| {
                for value in black_box(&list) {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_stack_push_pop,
    bench_queue,
    bench_linked_list,
    bench_doubly_linked_list
);
criterion_main!(benches);
