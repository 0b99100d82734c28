use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mtuple::prelude::*;

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    let seven = mtuple![1, 2, 3, 4, 5, 6, 7];
    group.bench_function(BenchmarkId::new("tuple", 7), |b| {
        b.iter(|| black_box(&seven).hash_with(&Natural))
    });

    let eight = mtuple![1, 2, 3, 4, 5, 6, 7, 8];
    group.bench_function(BenchmarkId::new("extended", 8), |b| {
        b.iter(|| black_box(&eight).hash_with(&Natural))
    });

    // Only the last eight slots are hashed, so these should cost about the same
    let fifteen = mtuple![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
    group.bench_function(BenchmarkId::new("extended", 15), |b| {
        b.iter(|| black_box(&fifteen).hash_with(&Natural))
    });

    let twenty_two = mtuple![
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22
    ];
    group.bench_function(BenchmarkId::new("extended", 22), |b| {
        b.iter(|| black_box(&twenty_two).hash_with(&Natural))
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let a = mtuple![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
    let b = mtuple![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16];
    group.bench_function("equals", |bencher| {
        bencher.iter(|| black_box(&a).equals_with(black_box(&b), &Natural))
    });
    group.bench_function("compare", |bencher| {
        bencher.iter(|| black_box(&a).compare_with(black_box(&b), &Natural))
    });

    let strings = mtuple!["foo".to_string(), "fart".to_string()];
    group.bench_function("hash_strings", |bencher| {
        bencher.iter(|| black_box(&strings).hash_with(&Natural))
    });

    group.finish();
}

criterion_group!(benches, bench_hash, bench_compare);
criterion_main!(benches);
