use bf_core::{DistributionDescriptor, EngineFactory, ParamSet};
use bf_engine::QuadratureEngine;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_evidence(c: &mut Criterion) {
    let engine = QuadratureEngine::new();
    let likelihood = DistributionDescriptor::new(
        "noncentral_d",
        ParamSet::from_pairs([("d", Some(0.227)), ("n", Some(80.0))]),
    );
    let prior = DistributionDescriptor::new(
        "cauchy",
        ParamSet::from_pairs([("location", Some(0.0)), ("scale", Some(1.0))]),
    );
    let handle = engine.init_model(&likelihood, &prior).unwrap();

    c.bench_function("evidence_noncentral_d_cauchy", |b| {
        b.iter(|| handle.integral().unwrap())
    });
}

criterion_group!(benches, bench_evidence);
criterion_main!(benches);
