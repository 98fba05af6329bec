//! Criterion micro-benchmarks for point-set backends.

use criterion::{criterion_group, criterion_main, Criterion};
use digitop_core::HyperRectDomain;
use digitop_set::{DensePointSet, HashPointSet, PointSet, SmallPointSet};
use digitop_test_utils::scattered_points;
use std::hint::black_box;

fn fill<S: PointSet>(domain: &HyperRectDomain, count: usize) -> S {
    let mut set = S::with_domain(domain.clone());
    set.extend_points(scattered_points(domain, count, 7));
    set
}

/// Benchmark: 10K membership queries against a 50K-point set.
fn bench_contains(c: &mut Criterion) {
    let domain = HyperRectDomain::centered(2, 200).unwrap();
    let queries = scattered_points(&domain, 10_000, 99);
    let hashed: HashPointSet = fill(&domain, 50_000);
    let dense: DensePointSet = fill(&domain, 50_000);

    c.bench_function("contains_hashed_10k", |b| {
        b.iter(|| black_box(queries.iter().filter(|p| hashed.contains(p)).count()));
    });
    c.bench_function("contains_dense_10k", |b| {
        b.iter(|| black_box(queries.iter().filter(|p| dense.contains(p)).count()));
    });
}

/// Benchmark: full iteration of a 50K-point set.
fn bench_iterate(c: &mut Criterion) {
    let domain = HyperRectDomain::centered(2, 200).unwrap();
    let hashed: HashPointSet = fill(&domain, 50_000);
    let dense: DensePointSet = fill(&domain, 50_000);

    c.bench_function("iterate_hashed_50k", |b| {
        b.iter(|| black_box(hashed.iter().count()));
    });
    c.bench_function("iterate_dense_50k", |b| {
        b.iter(|| black_box(dense.iter().count()));
    });
}

/// Benchmark: membership in an 8-point neighbourhood-sized set.
fn bench_small_set(c: &mut Criterion) {
    let domain = HyperRectDomain::centered(2, 1).unwrap();
    let small: SmallPointSet = fill(&domain, 8);
    let queries: Vec<_> = domain.iter().collect();

    c.bench_function("contains_small_9", |b| {
        b.iter(|| black_box(queries.iter().filter(|p| small.contains(p)).count()));
    });
}

criterion_group!(benches, bench_contains, bench_iterate, bench_small_set);
criterion_main!(benches);
