// SPDX-License-Identifier: PMPL-1.0-or-later
//! Performance benchmarks for the assessment engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecometrics_engine::{
    aggregate_footprints, assess, calculate_score, compute_footprint, simulate_what_if,
    WhatIfLevers,
};
use ecometrics_model::{Assumptions, ProjectDescription};
use ecometrics_refdata::ReferenceTables;

/// Benchmark the full footprint calculation
fn bench_compute_footprint(c: &mut Criterion) {
    let project = ProjectDescription::default();
    let assumptions = Assumptions::default();
    let tables = ReferenceTables::builtin();

    c.bench_function("compute_footprint", |b| {
        b.iter(|| {
            let fp = compute_footprint(
                black_box(&project),
                black_box(&assumptions),
                black_box(&tables),
            )
            .unwrap();
            black_box(fp);
        });
    });
}

/// Benchmark the whole pipeline including scoring and advice
fn bench_assess(c: &mut Criterion) {
    let project = ProjectDescription::default();
    let assumptions = Assumptions::default();
    let tables = ReferenceTables::builtin();

    c.bench_function("assess", |b| {
        b.iter(|| {
            let assessment =
                assess(black_box(&project), black_box(&assumptions), black_box(&tables)).unwrap();
            black_box(assessment);
        });
    });
}

/// Benchmark scoring and what-if on a precomputed footprint
fn bench_derived_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");

    let footprint = compute_footprint(
        &ProjectDescription::default(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();

    group.bench_function("calculate_score", |b| {
        b.iter(|| {
            let score = calculate_score(black_box(&footprint));
            black_box(score);
        });
    });

    let levers = WhatIfLevers {
        token_reduction_pct: 25.0,
        traffic_reduction_pct: 10.0,
        region_optimization_pct: 40.0,
        pue_improvement_pct: 5.0,
        frequency_reduction_pct: 50.0,
    };
    group.bench_function("simulate_what_if", |b| {
        b.iter(|| {
            let outcome = simulate_what_if(black_box(&footprint), black_box(&levers)).unwrap();
            black_box(outcome);
        });
    });

    group.finish();
}

/// Benchmark portfolio aggregation at different sizes
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    let footprint = compute_footprint(
        &ProjectDescription::default(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();

    for count in [2, 10, 100].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("sum", count), count, |b, &count| {
            let footprints = vec![footprint.clone(); count];
            b.iter(|| {
                let merged = aggregate_footprints(black_box(&footprints)).unwrap();
                black_box(merged);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_footprint,
    bench_assess,
    bench_derived_operations,
    bench_aggregate,
);
criterion_main!(benches);
