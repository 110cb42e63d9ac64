//! Simplification benchmarks.
//!
//! Trees are generated from a fixed seed so runs are comparable.
//!
//! Run with:
//! ```bash
//! cargo bench --bench simplify
//! ```

use cond_rs::expr::Expr;
use cond_rs::kind::Kind;
use cond_rs::simplify::SimplifyConfig;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

type Req = (u8, u8);

fn implies(a: &Req, b: &Req) -> bool {
    a.0 == b.0 && a.1 >= b.1
}

// ============================================================================
// Helper: Random condition tree
// ============================================================================

/// Build a random tree of the given depth over `num_items` items.
fn build_random_tree(rng: &mut ChaCha8Rng, depth: usize, width: usize, num_items: u8) -> Expr<Req> {
    if depth == 0 || rng.random_bool(0.2) {
        return Expr::leaf((rng.random_range(0..num_items), rng.random_range(1..=4)));
    }
    let kind = if rng.random_bool(0.5) { Kind::And } else { Kind::Or };
    let n = rng.random_range(2..=width);
    Expr::group(kind, (0..n).map(|_| build_random_tree(rng, depth - 1, width, num_items)))
}

fn random_tree(depth: usize, seed: u64) -> Expr<Req> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    build_random_tree(&mut rng, depth, 4, 8)
}

// ============================================================================
// Benchmark: Flatten
// ============================================================================

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/flatten");

    for depth in [3, 5, 7] {
        let e = random_tree(depth, 42);
        group.throughput(Throughput::Elements(e.size() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &e, |b, e| {
            b.iter(|| e.flatten());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Simplify (fixed rounds)
// ============================================================================

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/simplify");

    for depth in [3, 5, 7] {
        let e = random_tree(depth, 42);
        group.throughput(Throughput::Elements(e.size() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &e, |b, e| {
            b.iter(|| e.simplify(&implies));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Simplify until stable
// ============================================================================

fn bench_simplify_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/simplify_exhaustive");
    group.sample_size(20);

    let config = SimplifyConfig::exhaustive();
    for depth in [3, 5, 7] {
        let e = random_tree(depth, 42);
        group.throughput(Throughput::Elements(e.size() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &e, |b, e| {
            b.iter(|| e.simplify_with_config(&implies, &config));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Individual passes
// ============================================================================

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/passes");

    let e = random_tree(6, 7).flatten();
    group.bench_function("remove_duplicate_children", |b| {
        b.iter(|| e.remove_duplicate_children(&implies));
    });
    group.bench_function("remove_duplicate_expressions", |b| {
        b.iter(|| e.remove_duplicate_expressions(&implies));
    });
    group.bench_function("evaluate", |b| {
        b.iter(|| e.evaluate(|&(item, count)| item as usize % 3 + 1 >= count as usize));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_simplify, bench_simplify_exhaustive, bench_passes);

criterion_main!(benches);
