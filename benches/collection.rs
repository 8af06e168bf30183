use criterion::{Criterion, black_box, criterion_group, criterion_main};
use generic_collections::Collection;

fn bench_add(c: &mut Criterion) {
    let n = 16;
    let mut group = c.benchmark_group("Vec vs Collection (Add 16)");
    group.bench_function("std::vec::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(n);
            for i in 0..n {
                v.push(black_box(i as i32));
            }
            v
        })
    });

    group.bench_function("Collection<i32, 16>", |b| {
        b.iter(|| {
            let mut c: Collection<i32, 16> = Collection::new();
            for i in 0..n {
                c.add(black_box(i as i32));
            }
            c
        })
    });
    group.finish();
}

fn bench_spill(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spill Overhead (N=8 -> 9)");
    group.bench_function("Collection Spill", |b| {
        b.iter(|| {
            let mut c: Collection<i32, 8> = Collection::new();
            for i in 0..9 {
                c.add(black_box(i));
            }
            c
        })
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let source: Collection<i64, 8> = (0..1_000).collect();
    let mut group = c.benchmark_group("Queries (1000 elements)");

    group.bench_function("where_", |b| {
        b.iter(|| black_box(&source).where_(|x| x % 3 == 0))
    });
    group.bench_function("select", |b| b.iter(|| black_box(&source).select(|x| x * 2)));
    group.bench_function("group_by", |b| {
        b.iter(|| black_box(&source).group_by(|x| x % 10))
    });
    group.bench_function("sum", |b| b.iter(|| black_box(&source).sum(|&x| x as f64)));
    group.bench_function("reverse_sort", |b| {
        b.iter(|| {
            let mut copy = source.clone();
            copy.reverse_sort(|a, b| a % 7 < b % 7);
            copy
        })
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_spill, bench_queries);
criterion_main!(benches);
