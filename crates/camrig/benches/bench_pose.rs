use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use camrig::{
    create_cam2world_matrix, seeded_rng, uni_mesh_path, GaussianCameraPoseSampler, PoseSampler,
    PoseSamplerParams,
};
use glam::Vec3;

fn bench_cam2world(c: &mut Criterion) {
    let mut group = c.benchmark_group("cam2world");

    for batch_size in [16, 256, 4096].iter() {
        let origins = (0..*batch_size)
            .map(|i| {
                let t = i as f32 * 0.01;
                Vec3::new(t.cos(), 0.3, t.sin())
            })
            .collect::<Vec<_>>();
        let forward = origins.iter().map(|o| -*o).collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::new("create_cam2world_matrix", batch_size),
            &(forward, origins),
            |b, (forward, origins)| {
                b.iter(|| black_box(create_cam2world_matrix(forward, origins)))
            },
        );

        let params = PoseSamplerParams {
            horizontal_mean: 1.0,
            vertical_mean: 1.2,
            horizontal_stddev: 0.3,
            vertical_stddev: 0.1,
            radius: 2.7,
            batch_size: *batch_size,
        };
        group.bench_with_input(
            BenchmarkId::new("gaussian_sampler", batch_size),
            &params,
            |b, params| {
                let mut rng = seeded_rng(Some(0));
                b.iter(|| black_box(GaussianCameraPoseSampler::sample(params, &mut rng)))
            },
        );
    }
    group.finish();
}

fn bench_mesh_path(c: &mut Criterion) {
    c.bench_function("uni_mesh_path_16", |b| {
        b.iter(|| black_box(uni_mesh_path(black_box(16), black_box(1.8))))
    });
}

criterion_group!(benches, bench_cam2world, bench_mesh_path);
criterion_main!(benches);
