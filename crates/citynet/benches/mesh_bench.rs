//! Criterion microbenches for generators: radial net and city scatter.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use citynet::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn bench_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh");
    for &n in &[5usize, 30, 60] {
        let cfg = MeshCfg::for_city_count(n);
        group.bench_with_input(BenchmarkId::new("radial_mesh", n), &cfg, |b, cfg| {
            b.iter(|| {
                let _net = radial_mesh(Point::xy(400.0, 300.0), cfg).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter");
    let cfg = ScatterCfg {
        count: 1000,
        ..ScatterCfg::default()
    };
    group.bench_function(BenchmarkId::new("scatter_cities", 1000), |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(7),
            |mut rng| {
                let _set = scatter_cities(&mut rng, &cfg, Viewport::default()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("scene_generate", "default"), |b| {
        let scene_cfg = SceneCfg::default();
        b.iter_batched(
            || StdRng::seed_from_u64(8),
            |mut rng| {
                let _scene = Scene::generate(&mut rng, &scene_cfg, Viewport::default()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_mesh, bench_scatter);
criterion_main!(benches);
