use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use singly_list::linked_list::list::LinkedList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled_list(len: usize) -> LinkedList<u64> {
    let mut list = LinkedList::<u64>::builder().capacity(len).compare_eq().build();
    for i in 0..len as u64 {
        list.add_head(i);
    }
    list
}

fn shuffled_keys(len: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..len as u64).collect();
    keys.shuffle(&mut rand::rng());
    keys
}

fn add_head_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_head");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(filled_list(len)));
        });
    }
    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for len in SIZES {
        let list = filled_list(len);
        let keys = shuffled_keys(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                for key in keys.iter().take(64) {
                    black_box(list.search(key));
                }
            });
        });
    }
    group.finish();
}

fn remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_with_setup(
                || (filled_list(len), shuffled_keys(len)),
                |(mut list, keys)| {
                    for key in keys.iter().take(64) {
                        black_box(list.remove(key));
                    }
                    list
                },
            );
        });
    }
    group.finish();
}

fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for len in SIZES {
        let list = filled_list(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                list.for_each(|v| sum = sum.wrapping_add(*v));
                black_box(sum)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    add_head_benchmark,
    search_benchmark,
    remove_benchmark,
    iterate_benchmark
);
criterion_main!(benches);
