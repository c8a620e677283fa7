//! Bakes boundary normals with both strategies on a 100x100 grid and reports
//! how far apart their directions are on the shared boundary cells.
use circle_cover::prelude::*;
use circle_cover_examples::init_tracing;
use glam::{DVec2, DVec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
    let base = PipelineConfig::new(circle).with_extent(100);

    let gradient = run(&base.clone().with_normal_strategy(NormalStrategy::Gradient));
    let radial = run(&base.with_normal_strategy(NormalStrategy::Radial));

    write_vti(
        "grid_normals_gradient.vti",
        &gradient.coverage.grid,
        &[&gradient.coverage],
        &[&gradient.normals],
    )?;
    write_vti(
        "grid_normals_radial.vti",
        &radial.coverage.grid,
        &[&radial.coverage],
        &[&radial.normals],
    )?;

    let mut shared = 0usize;
    let mut angle_sum = 0.0f64;
    let mut angle_max = 0.0f64;
    for (g, r) in gradient.normals.data.iter().zip(&radial.normals.data) {
        if *g == DVec3::ZERO || *r == DVec3::ZERO {
            continue;
        }
        shared += 1;
        let angle = g.dot(*r).clamp(-1.0, 1.0).acos().to_degrees();
        angle_sum += angle;
        angle_max = angle_max.max(angle);
    }

    if shared > 0 {
        tracing::info!(
            "Strategies agree to {:.2} degrees on average ({:.2} max) across {} shared boundary cells.",
            angle_sum / shared as f64,
            angle_max,
            shared
        );
    }
    Ok(())
}
