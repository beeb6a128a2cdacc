use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rbos_tree::{OSRBTree, Rational};
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn key(n: i64, d: i64) -> Rational {
    Rational::reduce(n, d).unwrap()
}

fn ordered_keys(n: usize) -> Vec<Rational> {
    (0..n as i64).map(|i| key(i, 1)).collect()
}

fn random_keys(n: usize) -> Vec<Rational> {
    // Use a simple LCG for a deterministic pseudo-random sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        let numerator = (x >> 33) as i64;
        let denominator = 1 + (x % 97) as i64;
        keys.push(key(numerator, denominator));
    }
    keys
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OSRBTree", N), |b| {
        b.iter(|| {
            let mut tree = OSRBTree::new();
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, ());
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OSRBTree", N), |b| {
        b.iter(|| {
            let mut tree = OSRBTree::new();
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, ());
            }
            map
        });
    });

    group.finish();
}

// ─── Remove benchmarks ──────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OSRBTree", N), |b| {
        b.iter_batched(
            || {
                let mut tree = OSRBTree::new();
                for &k in &keys {
                    tree.insert(k);
                }
                tree
            },
            |mut tree| {
                for &k in &keys {
                    let _ = tree.remove(k);
                }
                tree
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Rank query benchmarks ──────────────────────────────────────────────────

fn bench_find_kth(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut tree = OSRBTree::new();
    for &k in &keys {
        tree.insert(k);
    }

    // A sorted Vec answers rank queries by plain indexing; this is the
    // O(1) floor the tree's O(log n) descent is measured against.
    let mut sorted = keys.clone();
    sorted.sort_unstable();

    let mut group = c.benchmark_group("find_kth");

    group.bench_function(BenchmarkId::new("OSRBTree", N), |b| {
        let mut rank = 0;
        b.iter(|| {
            rank = rank % tree.len() + 1;
            *tree.find_kth(rank).unwrap()
        });
    });

    group.bench_function(BenchmarkId::new("sorted_vec", N), |b| {
        let mut rank = 0;
        b.iter(|| {
            rank = rank % sorted.len() + 1;
            sorted[rank - 1]
        });
    });

    group.finish();
}

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random,);
criterion_group!(remove_benches, bench_remove_random,);
criterion_group!(rank_benches, bench_find_kth,);
criterion_main!(insert_benches, remove_benches, rank_benches);
