use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use voxform_geom::Rgba;
use voxform_mesh_cpu::{GreedyMesher, generate_mesh};
use voxform_volume::{BlockId, Palette, Volume};

fn palette() -> Palette {
    Palette::from_colors([Rgba::WHITE, Rgba::BLACK])
}

fn bench_solid(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_solid");
    let mut v = Volume::new(32, 32, 32, 1.0).unwrap();
    v.fill(BlockId(1));
    let pal = palette();
    group.bench_function("solid_32", |b| {
        b.iter(|| black_box(generate_mesh(&v, &pal, None).unwrap()))
    });
    group.finish();
}

fn bench_sphere_reused(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_sphere");
    let mut v = Volume::new(32, 32, 32, 0.1).unwrap();
    v.fill_sphere(BlockId(1));
    v.fill_base(BlockId(2));
    let pal = palette();
    let mut mesher = GreedyMesher::new();
    group.bench_function("sphere_32_reused_mesher", |b| {
        b.iter(|| black_box(mesher.mesh(&v, &pal, None).unwrap()))
    });
    group.finish();
}

fn bench_checkerboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_checkerboard");
    let mut v = Volume::new(16, 16, 16, 1.0).unwrap();
    for x in 0..16 {
        for y in 0..16 {
            for z in 0..16 {
                if (x + y + z) % 2 == 0 {
                    v.set(x, y, z, BlockId(1 + (x % 2) as u32)).unwrap();
                }
            }
        }
    }
    let pal = palette();
    group.bench_function("checkerboard_16", |b| {
        b.iter(|| black_box(generate_mesh(&v, &pal, None).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_solid, bench_sphere_reused, bench_checkerboard);
criterion_main!(benches);
