use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sparse_bitset::{SharedWordStore, SparseBitSet};
use std::hint::black_box;

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_operations");

    // Keys land in a handful of words, so most writes hit an existing entry
    group.bench_function("set_dense", |b| {
        let mut set = SparseBitSet::new();
        let mut i = 0i64;
        b.iter(|| {
            set.set(black_box(i % 256 - 128));
            i += 1;
        });
    });

    // Keys spread out one per word
    group.bench_function("set_scattered", |b| {
        let mut set = SparseBitSet::new();
        let mut i = 0i64;
        b.iter(|| {
            set.set(black_box((i % 4096 - 2048) * 977));
            i += 1;
        });
    });

    group.bench_function("test", |b| {
        let set: SparseBitSet = (-500..500).step_by(2).collect();
        let mut i = 0i64;
        b.iter(|| {
            black_box(set.test(i % 1000 - 500));
            i += 1;
        });
    });

    group.bench_function("flip", |b| {
        let mut set = SparseBitSet::new();
        let mut i = 0i64;
        b.iter(|| {
            set.flip(black_box(i % 300 - 150));
            i += 1;
        });
    });

    group.bench_function("set_shared_store", |b| {
        let store: SharedWordStore = SharedWordStore::default();
        let mut set = SparseBitSet::with_store(store);
        let mut i = 0i64;
        b.iter(|| {
            set.set(black_box(i % 256 - 128));
            i += 1;
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in &[100i64, 1000, 10_000] {
        let set: SparseBitSet = (-size..*size).step_by(3).collect();

        group.bench_with_input(BenchmarkId::new("iter", size), &set, |b, set| {
            b.iter(|| {
                for key in set {
                    black_box(key);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("for_each_key", size), &set, |b, set| {
            b.iter(|| {
                set.for_each_key(|key| {
                    black_box(key);
                    true
                });
            });
        });

        group.bench_with_input(BenchmarkId::new("count", size), &set, |b, set| {
            b.iter(|| black_box(set.count()));
        });
    }

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    for size in &[100i64, 1000, 10_000] {
        let a: SparseBitSet = (-size..*size).step_by(2).collect();
        let b: SparseBitSet = (-size..*size).step_by(3).collect();

        group.bench_with_input(
            BenchmarkId::new("union", size),
            &(&a, &b),
            |bench, &(a, b)| {
                bench.iter(|| black_box(a.union(b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &(&a, &b),
            |bench, &(a, b)| {
                bench.iter(|| black_box(a.intersection(b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("remove_intersection", size),
            &(&a, &b),
            |bench, &(a, b)| {
                bench.iter(|| black_box(a.remove_intersection(b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("union_with", size),
            &(&a, &b),
            |bench, &(a, b)| {
                bench.iter(|| {
                    let mut target = a.clone();
                    target.union_with(b);
                    black_box(target);
                });
            },
        );
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    let small: SparseBitSet = (0..64).collect();
    group.bench_function("clone_one_word", |b| {
        b.iter(|| black_box(small.clone()));
    });

    let scattered: SparseBitSet = (-2000..2000).map(|i| i * 1000).collect();
    group.bench_function("clone_scattered", |b| {
        b.iter(|| black_box(scattered.clone()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_operations,
    bench_iteration,
    bench_algebra,
    bench_clone,
);

criterion_main!(benches);
