use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use exact_algebra::algebra::expression::Expression;
use exact_algebra::algebra::fraction::Fraction;
use std::hint::black_box;

/// (x + y + 1/2)^degree, a dense polynomial in two variables.
fn dense_polynomial(degree: u32) -> Expression {
    let x = Expression::variable("x");
    let y = Expression::variable("y");
    let half = Fraction::new(1, 2).unwrap();
    x.add(&y).unwrap().add(half).unwrap().pow(degree)
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression_mul");
    for degree in [2, 4, 8] {
        let p = dense_polynomial(degree);
        let q = dense_polynomial(degree);
        group.bench_with_input(BenchmarkId::new("dense", degree), &degree, |b, _| {
            b.iter(|| black_box(p.multiply(&q).unwrap()))
        });
    }
    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let p = dense_polynomial(10);
    let third = Fraction::new(1, 3).unwrap();
    c.bench_function("evaluate_full", |b| {
        b.iter(|| black_box(p.evaluate_at([("x", &third), ("y", &third)]).unwrap()))
    });
    c.bench_function("evaluate_partial", |b| {
        b.iter(|| black_box(p.evaluate_at([("x", &third)]).unwrap()))
    });
}

fn bench_rendering(c: &mut Criterion) {
    let p = dense_polynomial(10);
    c.bench_function("print", |b| b.iter(|| black_box(p.print())));
}

criterion_group!(benches, bench_multiplication, bench_evaluation, bench_rendering);
criterion_main!(benches);
