//! Sampled boundary loops approximating the circle outline.
//!
//! A [`BoundaryLoop`] is an ordered point set plus a topology tag deciding how
//! the loop closes: a polygon cell closes implicitly, a polyline repeats the
//! first vertex in its connectivity.
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Circle;

/// How a boundary loop is connected when written as geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryTopology {
    /// Single polygon cell over all vertices; closure is implicit.
    Polygon,
    /// Open polyline closed explicitly by repeating vertex 0 at the end.
    Polyline,
}

/// An ordered loop of points on the circle boundary, z fixed at 0.
#[derive(Clone, Debug)]
pub struct BoundaryLoop {
    /// Loop vertices in counter-clockwise order, starting at angle 0.
    pub points: Vec<DVec3>,
    /// Connectivity flavor used when the loop is written out.
    pub topology: BoundaryTopology,
}

impl BoundaryLoop {
    /// Samples `n_points` vertices at equal angular steps around `circle`.
    ///
    /// Vertex 0 sits at `(cx + r, cy)`; consecutive vertices are separated by
    /// an angle of `2*pi / n_points`.
    pub fn around_circle(circle: &Circle, n_points: usize, topology: BoundaryTopology) -> Self {
        let mut points = Vec::with_capacity(n_points);
        for k in 0..n_points {
            let theta = std::f64::consts::TAU * k as f64 / n_points as f64;
            let p = circle.point_at(theta);
            points.push(DVec3::new(p.x, p.y, 0.0));
        }
        Self { points, topology }
    }

    /// Number of vertices in the loop.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the loop has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point-index connectivity for the loop's single cell.
    ///
    /// Polygons index each vertex once; polylines append a final index back to
    /// vertex 0 to close the ring.
    pub fn connectivity(&self) -> Vec<usize> {
        let n = self.points.len();
        match self.topology {
            BoundaryTopology::Polygon => (0..n).collect(),
            BoundaryTopology::Polyline => {
                let mut ids: Vec<usize> = (0..n).collect();
                if n > 0 {
                    ids.push(0);
                }
                ids
            }
        }
    }

    /// Vertices converted to the interop vector type used at writer seams.
    pub fn interop_points(&self) -> Vec<mint::Vector3<f64>> {
        self.points.iter().copied().map(Into::into).collect()
    }
}
