//! Circle primitive used as the coverage source shape.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle in the XY plane, defined by its center and radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center of the circle in domain coordinates.
    pub center: DVec2,
    /// Radius in domain units.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle from center and radius.
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if `p` lies inside or on the circle.
    ///
    /// The test is the inclusive squared-distance comparison
    /// `|p - center|^2 <= radius^2`, so boundary points count as inside.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Returns the point on the circle at angle `theta` (radians, measured
    /// counter-clockwise from the positive X axis).
    #[inline]
    pub fn point_at(&self, theta: f64) -> DVec2 {
        self.center + self.radius * DVec2::new(theta.cos(), theta.sin())
    }
}
