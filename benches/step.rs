use criterion::{black_box, criterion_group, criterion_main, Criterion};
use descent_lab::config::RunConfig;
use descent_lab::utils::{par_step_all, step_all};
use descent_lab::{Bounds, Surface};
use std::sync::Arc;

fn hills() -> Arc<Surface> {
    Arc::new(
        Surface::from_xy(Bounds::symmetric(15.0).unwrap(), |x, y| {
            (0.5 * x).sin() * (0.5 * y).cos() + 0.02 * (x * x + y * y)
        })
        .unwrap(),
    )
}

fn bench_step(c: &mut Criterion) {
    let surface = hills();
    let config = RunConfig::default();

    c.bench_function("step_all classic race", |b| {
        let mut optimizers = config.build_optimizers(&surface).unwrap();
        b.iter(|| black_box(step_all(&mut optimizers)))
    });

    c.bench_function("par_step_all classic race", |b| {
        let mut optimizers = config.build_optimizers(&surface).unwrap();
        b.iter(|| black_box(par_step_all(&mut optimizers)))
    });

    c.bench_function("sample_grid 50x50", |b| {
        b.iter(|| black_box(surface.sample_grid(50).unwrap()))
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
