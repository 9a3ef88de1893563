//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recurrence_lab::catalog;
use recurrence_lab::trace::{descending_input, ProducerRegistry};
use recurrence_lab::{analyze, RecurrenceSpec};

fn benchmark_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for recurrence in catalog::BUILTIN {
        group.bench_with_input(
            BenchmarkId::from_parameter(recurrence.name),
            &recurrence,
            |b, recurrence| {
                let spec = recurrence.spec(1 << 20);
                b.iter(|| analyze(black_box(&spec)));
            },
        );
    }
    group.finish();

    c.bench_function("analyze_slow_shrink", |b| {
        let spec = RecurrenceSpec::new(1, 1.01, 1_000_000, |s: f64| s.sqrt());
        b.iter(|| analyze(black_box(&spec)));
    });
}

fn benchmark_traces(c: &mut Criterion) {
    let registry = ProducerRegistry::with_builtins();
    let input = descending_input(1 << 10);
    let mut group = c.benchmark_group("trace");
    for name in ["merge-sort", "tree-sum", "partition-statistics"] {
        if let Some(producer) = registry.get(name) {
            group.bench_function(name, |b| b.iter(|| producer.run(black_box(&input))));
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_analyze, benchmark_traces);
criterion_main!(benches);
