//! Benchmarks for task store operations.
//!
//! These benchmarks measure add, toggle, remove and summarize on lists of
//! realistic size.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use todo_tui::store::{TaskId, TaskStore};

fn filled_store(count: u64) -> TaskStore {
    let mut store = TaskStore::new();
    for i in 0..count {
        let _ = store.add(&format!("task number {}", i));
    }
    store
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_100_tasks", |b| {
        b.iter_batched(
            TaskStore::new,
            |mut store| {
                for _ in 0..100 {
                    let _ = store.add(black_box("  Buy milk  "));
                }
                store
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_toggle(c: &mut Criterion) {
    let mut store = filled_store(1_000);
    c.bench_function("toggle_last_of_1000", |b| {
        b.iter(|| store.toggle(black_box(TaskId::new(1_000)), true))
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("remove_first_of_1000", |b| {
        b.iter_batched(
            || filled_store(1_000),
            |mut store| store.remove(black_box(TaskId::new(1))),
            BatchSize::SmallInput,
        )
    });
}

fn bench_summarize(c: &mut Criterion) {
    let mut store = filled_store(1_000);
    for i in (1..=1_000).step_by(2) {
        let _ = store.toggle(TaskId::new(i), true);
    }
    c.bench_function("summarize_1000", |b| b.iter(|| black_box(&store).summarize()));
}

criterion_group!(
    benches,
    bench_add,
    bench_toggle,
    bench_remove,
    bench_summarize
);
criterion_main!(benches);
