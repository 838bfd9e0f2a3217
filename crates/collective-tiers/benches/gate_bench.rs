//! Benchmarks for the tier model
//!
//! Measures the per-render cost of:
//! - Access checks
//! - Descriptor resolution
//! - Lenient parsing of stored tier values

use collective_tiers::{describe, has_access, rank_of_name, resolve, Tier};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const EVERY_TIER: [Tier; 5] = [
    Tier::None,
    Tier::Supporter,
    Tier::Champion,
    Tier::Builder,
    Tier::Institutional,
];

/// Benchmark the full 25-pair access matrix
fn bench_has_access(c: &mut Criterion) {
    c.bench_function("has_access_matrix", |b| {
        b.iter(|| {
            let mut granted = 0u32;
            for subject in EVERY_TIER {
                for required in EVERY_TIER {
                    if has_access(black_box(subject), black_box(required)) {
                        granted += 1;
                    }
                }
            }
            granted
        })
    });
}

/// Benchmark gate resolution when the upgrade prompt is built
fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_upgrade_prompt", |b| {
        b.iter(|| resolve(black_box(Tier::None), black_box(Tier::Builder), (), None))
    });
}

/// Benchmark descriptor lookup per tier
fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    for tier in EVERY_TIER {
        group.bench_with_input(BenchmarkId::from_parameter(tier), &tier, |b, &t| {
            b.iter(|| describe(black_box(t)))
        });
    }
    group.finish();
}

/// Benchmark parsing stored values, including unrecognized ones
fn bench_rank_of_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_of_name");
    for name in ["builder", "community_champion", "bogus-tier", "none"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, &n| {
            b.iter(|| rank_of_name(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_has_access,
    bench_resolve,
    bench_describe,
    bench_rank_of_name
);
criterion_main!(benches);
