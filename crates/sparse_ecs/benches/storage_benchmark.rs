//! # Sparse-Set Storage Benchmark
//!
//! Measures the O(1) point operations and the dense iteration pass.
//!
//! Run with: `cargo bench --package sparse_ecs`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_ecs::{ComponentStorage, EntityId, Registry};

const ENTITY_COUNT: u32 = 100_000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
    z: f32,
}

fn filled_storage(count: u32) -> ComponentStorage<Position> {
    let mut storage = ComponentStorage::with_capacity(count as usize);
    for raw in 0..count {
        let f = raw as f32;
        storage.write(EntityId::new(raw), Position { x: f, y: f, z: f });
    }
    storage
}

/// Benchmark: Insert N fresh components.
fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_write");

    for count in [1_000, 10_000, ENTITY_COUNT] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(filled_storage(count).len()));
        });
    }

    group.finish();
}

/// Benchmark: Point reads through the id map.
fn bench_read(c: &mut Criterion) {
    let storage = filled_storage(ENTITY_COUNT);

    c.bench_function("storage_read_100K", |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            for raw in 0..ENTITY_COUNT {
                if let Some(pos) = storage.get(EntityId::new(raw)) {
                    sum += pos.x;
                }
            }
            black_box(sum)
        });
    });
}

/// Benchmark: Dense iteration pass.
fn bench_for_each(c: &mut Criterion) {
    let storage = filled_storage(ENTITY_COUNT);

    c.bench_function("storage_for_each_100K", |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            storage.for_each(|_, pos| sum += pos.x);
            black_box(sum)
        });
    });
}

/// Benchmark: Swap-remove every other entity, then refill.
fn bench_delete_refill(c: &mut Criterion) {
    let mut storage = filled_storage(ENTITY_COUNT);

    c.bench_function("storage_delete_refill_50K", |b| {
        b.iter(|| {
            for raw in (0..ENTITY_COUNT).step_by(2) {
                storage.delete(EntityId::new(raw));
            }
            for raw in (0..ENTITY_COUNT).step_by(2) {
                storage.write(EntityId::new(raw), Position::default());
            }
            black_box(storage.len())
        });
    });
}

/// Benchmark: Registry dispatch and cross-type delete.
fn bench_registry_delete_all(c: &mut Criterion) {
    c.bench_function("registry_delete_all_10K", |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            for _ in 0..10_000 {
                let id = registry.new_id();
                registry.write(id, Position::default());
                registry.write(id, Velocity::default());
            }
            for raw in 0..10_000 {
                registry.delete_all(EntityId::new(raw));
            }
            black_box(registry.storage_count())
        });
    });
}

criterion_group!(
    benches,
    bench_write,
    bench_read,
    bench_for_each,
    bench_delete_refill,
    bench_registry_delete_all,
);

criterion_main!(benches);
