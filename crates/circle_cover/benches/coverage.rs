mod common;

use std::hint::black_box;

use circle_cover::field::coverage::bake_coverage;
use circle_cover::field::UniformGrid;
use circle_cover::geom::Circle;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;

const EXTENTS: [usize; 3] = [10, 50, 100];
const SAMPLE_COUNTS: [usize; 3] = [4, 10, 20];

fn coverage_extent_benches(c: &mut Criterion) {
    let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);

    let mut group = c.benchmark_group("coverage/bake/samples_10");
    for &extent in &EXTENTS {
        let grid = UniformGrid::unit_square(extent);
        group.throughput(common::cells_throughput(grid.cell_count()));

        group.bench_with_input(BenchmarkId::from_parameter(extent), &extent, |b, _| {
            b.iter(|| {
                let field = bake_coverage(&circle, &grid, 10);
                black_box(field.data.len());
            });
        });
    }
    group.finish();
}

fn coverage_samples_benches(c: &mut Criterion) {
    let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
    let grid = UniformGrid::unit_square(50);

    let mut group = c.benchmark_group("coverage/bake/extent_50");
    for &samples in &SAMPLE_COUNTS {
        group.throughput(common::cells_throughput(grid.cell_count()));

        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &s| {
            b.iter(|| {
                let field = bake_coverage(&circle, &grid, s);
                black_box(field.data.len());
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = coverage_extent_benches, coverage_samples_benches
}
criterion_main!(benches);
