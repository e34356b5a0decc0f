//! Benchmarks for pricer_models.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::OptionParameters;
use pricer_models::analytical::price_option;
use pricer_models::evaluator::evaluate_id;
use pricer_models::greeks::estimate_greeks;
use pricer_models::strategies::StrategyId;

fn params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 5.0, 30, 25.0, 5.0, 2.0).unwrap()
}

fn benchmark_price_option(c: &mut Criterion) {
    let p = params();
    c.bench_function("price_option_atm", |b| b.iter(|| price_option(black_box(&p))));
}

fn benchmark_estimate_greeks(c: &mut Criterion) {
    let p = params();
    c.bench_function("estimate_greeks_atm", |b| b.iter(|| estimate_greeks(black_box(&p))));
}

fn benchmark_strategy_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_strategy");
    let p = params();

    for id in StrategyId::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| evaluate_id(id, black_box(&p)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_price_option,
    benchmark_estimate_greeks,
    benchmark_strategy_curves
);
criterion_main!(benches);
