//! Benchmarks for the yield solvers.
//!
//! Run with: cargo bench -p tenor-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tenor_bonds::prelude::*;

fn create_test_bond() -> Bond {
    Bond::builder()
        .price(95.0)
        .coupon_percent(5.0)
        .call_price(100.0)
        .face_value(100.0)
        .years_to_call(5.0)
        .years_to_maturity(10.0)
        .periods_per_year(2)
        .build()
        .unwrap()
}

fn bench_yield_methods(c: &mut Criterion) {
    let bond = create_test_bond();
    let mut group = c.benchmark_group("yield_to_maturity");

    for method in [YieldMethod::Grid, YieldMethod::Bisection, YieldMethod::Brent] {
        let solver = YieldSolver::new().with_method(method);
        group.bench_with_input(BenchmarkId::from_parameter(method), &solver, |b, solver| {
            b.iter(|| solver.yield_to_maturity(black_box(&bond)));
        });
    }

    group.finish();
}

fn bench_full_analytics(c: &mut Criterion) {
    let bond = create_test_bond();
    let analyzer = BondAnalyzer::default();

    c.bench_function("analyze_brent", |b| {
        b.iter(|| analyzer.analyze(black_box(&bond)));
    });
}

criterion_group!(benches, bench_yield_methods, bench_full_analytics);
criterion_main!(benches);
