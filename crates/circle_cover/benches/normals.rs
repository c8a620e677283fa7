mod common;

use std::hint::black_box;

use circle_cover::field::coverage::bake_coverage;
use circle_cover::field::normal::{bake_normals, NormalStrategy};
use circle_cover::field::UniformGrid;
use circle_cover::geom::Circle;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;

fn normal_strategy_benches(c: &mut Criterion) {
    let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
    let grid = UniformGrid::unit_square(100);
    let coverage = bake_coverage(&circle, &grid, 10);

    let mut group = c.benchmark_group("normals/bake/extent_100");
    group.throughput(common::cells_throughput(grid.cell_count()));

    for (label, strategy) in [
        ("gradient", NormalStrategy::Gradient),
        ("radial", NormalStrategy::Radial),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &strategy, |b, &s| {
            b.iter(|| {
                let normals = bake_normals(&coverage, &circle, s);
                black_box(normals.data.len());
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = normal_strategy_benches
}
criterion_main!(benches);
