use chainmap::{ChainMapBuilder, HashStrategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;

const STRATEGIES: [(&str, HashStrategy); 4] = [
    ("murmur", HashStrategy::Murmur),
    ("djb2", HashStrategy::Djb2),
    ("sha256", HashStrategy::Sha256),
    ("ahash", HashStrategy::AHash),
];

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    // std HashMap baseline
    group.bench_function("std_hashmap", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..1000u32 {
                map.insert(i.to_be_bytes(), i);
            }
            black_box(map.len())
        });
    });

    for (name, strategy) in STRATEGIES {
        group.bench_with_input(BenchmarkId::new("chainmap", name), &strategy, |b, &strategy| {
            b.iter(|| {
                let mut map = ChainMapBuilder::new()
                    .hash_strategy(strategy)
                    .build::<[u8; 4], u32>()
                    .unwrap();
                for i in 0..1000u32 {
                    map.set(i.to_be_bytes(), i).unwrap();
                }
                black_box(map.len())
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    let mut std_map = HashMap::new();
    for i in 0..1000u32 {
        std_map.insert(i.to_be_bytes(), i);
    }
    group.bench_function("std_hashmap", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..1000u32 {
                total += u64::from(*std_map.get(&i.to_be_bytes()).unwrap());
            }
            black_box(total)
        });
    });

    for (name, strategy) in STRATEGIES {
        let mut map = ChainMapBuilder::new()
            .hash_strategy(strategy)
            .build::<[u8; 4], u32>()
            .unwrap();
        for i in 0..1000u32 {
            map.set(i.to_be_bytes(), i).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("chainmap", name), &map, |b, map| {
            b.iter(|| {
                let mut total = 0u64;
                for i in 0..1000u32 {
                    total += u64::from(*map.get(&i.to_be_bytes()).unwrap());
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    // Insert/remove cycles that cross the growth and shrink thresholds.
    group.bench_function("grow_shrink_200", |b| {
        b.iter(|| {
            let mut map = ChainMapBuilder::new().build::<[u8; 4], u32>().unwrap();
            for i in 0..200u32 {
                map.set(i.to_be_bytes(), i).unwrap();
            }
            for i in 0..200u32 {
                map.dispose(&i.to_be_bytes()).unwrap();
            }
            black_box(map.capacity())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_churn);
criterion_main!(benches);
