//! Criterion benchmarks for u-localsearch optimizers.
//!
//! Uses the sphere function to measure pure algorithm overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_localsearch::objective::sphere;
use u_localsearch::{
    Bounds, HillClimbConfig, HillClimbRunner, RandomSearchConfig, RandomSearchRunner, SaConfig,
    SaRunner,
};

fn bench_hc_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc_sphere");
    group.sample_size(10);

    for &dim in &[2, 10, 50] {
        let bounds = Bounds::uniform(dim, -5.0, 5.0).unwrap();
        let config = HillClimbConfig::default()
            .with_max_iterations(1000)
            .with_epsilon(0.0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bd, c)| {
                b.iter(|| {
                    let result = HillClimbRunner::run(&sphere, black_box(bd), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_rls_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("rls_sphere");
    group.sample_size(10);

    for &dim in &[2, 10, 50] {
        let bounds = Bounds::uniform(dim, -5.0, 5.0).unwrap();
        let config = RandomSearchConfig::default()
            .with_max_iterations(1000)
            .with_epsilon(0.0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bd, c)| {
                b.iter(|| {
                    let result = RandomSearchRunner::run(&sphere, black_box(bd), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_sa_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    for &dim in &[2, 10, 50] {
        let bounds = Bounds::uniform(dim, -5.0, 5.0).unwrap();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.01)
            .with_max_iterations(1000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(bounds, config),
            |b, (bd, c)| {
                b.iter(|| {
                    let result = SaRunner::run(&sphere, black_box(bd), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hc_sphere, bench_rls_sphere, bench_sa_sphere);
criterion_main!(benches);
