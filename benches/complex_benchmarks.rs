// File: benches/complex_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use cxkit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Mul,
    Div,
    Exp,
    Ln,
    Sqrt,
    Pow,
    Asin,
    Tanh,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Exp => "exp",
            Operation::Ln => "ln",
            Operation::Sqrt => "sqrt",
            Operation::Pow => "pow",
            Operation::Asin => "asin",
            Operation::Tanh => "tanh",
        }
    }

    pub fn all() -> Vec<Operation> {
        vec![
            Operation::Mul,
            Operation::Div,
            Operation::Exp,
            Operation::Ln,
            Operation::Sqrt,
            Operation::Pow,
            Operation::Asin,
            Operation::Tanh,
        ]
    }

    fn apply(&self, a: Complex64, b: Complex64) -> Complex64 {
        match self {
            Operation::Mul => a * b,
            Operation::Div => a / b,
            Operation::Exp => a.exp(),
            Operation::Ln => a.ln(),
            Operation::Sqrt => a.sqrt(),
            Operation::Pow => a.pow(&b),
            Operation::Asin => a.asin(),
            Operation::Tanh => a.tanh(),
        }
    }
}

fn random_values(n: usize) -> Vec<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
        .collect()
}

fn bench_elementary(c: &mut Criterion) {
    let values = random_values(1024);

    let mut group = c.benchmark_group("complex_elementary");
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(values.len() as u64));

    for op in Operation::all() {
        group.bench_with_input(BenchmarkId::new("op", op.name()), &op, |b, op| {
            b.iter(|| {
                let mut acc = Complex64::ZERO;
                for pair in values.windows(2) {
                    acc += op.apply(black_box(pair[0]), black_box(pair[1]));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_nth_root(c: &mut Criterion) {
    let z = Complex64::new(-2.0, 2.0);

    let mut group = c.benchmark_group("complex_nth_root");
    for n in [3, 16, 128] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(black_box(z).nth_root(n)))
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let values = random_values(256);
    let cf = ComplexFormat::new();
    let text: Vec<String> = values.iter().map(|z| cf.format(z)).collect();

    let mut group = c.benchmark_group("complex_format");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("format", |b| {
        b.iter(|| {
            for z in values.iter() {
                black_box(cf.format(black_box(z)));
            }
        })
    });
    group.bench_function("parse", |b| {
        b.iter(|| {
            for s in text.iter() {
                black_box(cf.parse::<f64>(black_box(s)).ok());
            }
        })
    });
    group.finish();
}

fn bench_path_integration(c: &mut Criterion) {
    let square = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, -1.0),
        Complex64::new(1.0, 0.0),
    ];

    let mut group = c.benchmark_group("complex_path_integration");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);
    for points in [8, 24] {
        group.bench_with_input(BenchmarkId::new("points", points), &points, |b, &points| {
            let real = IntegratorBuilder::<f64>::new()
                .points(points)
                .relative_accuracy(1.0e-10)
                .build()
                .unwrap();
            let mut integrator = ComplexUnivariateIntegrator::new(real);
            b.iter(|| {
                black_box(
                    integrator
                        .integrate_path(1_000_000, &|z: Complex64| z.recip(), black_box(&square))
                        .ok(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(
    complex_benches,
    bench_elementary,
    bench_nth_root,
    bench_format,
    bench_path_integration,
);
criterion_main!(complex_benches);
