use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaksha_math::{PowVariant, TWO_THIRDS};

fn fixed_exponent_bench(c: &mut Criterion) {
    let x = 6.6228;

    let mut group = c.benchmark_group("pow_fixed");
    group.bench_function("pow2_general", |b| {
        b.iter(|| PowVariant::General.pow2(black_box(x)))
    });
    group.bench_function("pow2_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow2(black_box(x)))
    });
    group.bench_function("pow3_5_general", |b| {
        b.iter(|| PowVariant::General.pow3_5(black_box(x)))
    });
    group.bench_function("pow3_5_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow3_5(black_box(x)))
    });
    group.bench_function("pow2_3_general", |b| {
        b.iter(|| PowVariant::General.pow2_3(black_box(x)))
    });
    group.bench_function("pow2_3_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow2_3(black_box(x)))
    });
    group.finish();
}

fn dispatcher_bench(c: &mut Criterion) {
    let x = 6.6228;

    let mut group = c.benchmark_group("pow_dispatch");
    group.bench_function("known_exponent_general", |b| {
        b.iter(|| PowVariant::General.pow(black_box(x), black_box(1.5)))
    });
    group.bench_function("known_exponent_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow(black_box(x), black_box(1.5)))
    });
    group.bench_function("fallback_exponent_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow(black_box(x), black_box(2.718)))
    });
    group.bench_function("two_thirds_specialized", |b| {
        b.iter(|| PowVariant::Specialized.pow(black_box(x), black_box(TWO_THIRDS)))
    });
    group.finish();
}

criterion_group!(benches, fixed_exponent_bench, dispatcher_bench);
criterion_main!(benches);
