use criterion::{criterion_group, criterion_main, Criterion};
use ms_solver_core::{solve, Verbosity};
use std::hint::black_box;

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let cases = [
        ("linear", "2x+3=7"),
        ("quadratic", "x^2-5x+6=0"),
        ("percentage", "what is 15% of 240?"),
        ("arithmetic", "(12+8)*3/4 - 2^10"),
        ("unsolved", "import os"),
    ];

    for (name, problem) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(solve(black_box(problem), Verbosity::Detailed)))
        });
    }

    group.finish();
}

fn benchmark_evaluator(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluator");

    group.bench_function("nested_parens", |b| {
        b.iter(|| black_box(ms_parser::safe_eval("((((1+2)*3)-4)/5)^2")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_dispatch, benchmark_evaluator);
criterion_main!(benches);
