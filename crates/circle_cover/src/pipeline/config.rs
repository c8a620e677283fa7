//! Validated configuration for the coverage pipeline.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::normal::NormalStrategy;
use crate::geom::{BoundaryTopology, Circle};

/// Configuration for a pipeline run.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// The circle whose coverage is rasterized.
    pub circle: Circle,
    /// Number of grid cells per axis over the unit square.
    pub extent: usize,
    /// Supersampling resolution per cell axis.
    pub samples: usize,
    /// Number of vertices on the sampled boundary loop.
    pub boundary_points: usize,
    /// Connectivity flavor of the boundary loop.
    pub boundary_topology: BoundaryTopology,
    /// Normal reconstruction strategy.
    pub normal_strategy: NormalStrategy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            circle: Circle::new(DVec2::new(0.5, 0.5), 0.3),
            extent: 100,
            samples: 10,
            boundary_points: 100,
            boundary_topology: BoundaryTopology::Polygon,
            normal_strategy: NormalStrategy::Gradient,
        }
    }
}

impl PipelineConfig {
    /// Creates a config with the given circle and defaults for the rest.
    pub fn new(circle: Circle) -> Self {
        Self {
            circle,
            ..Default::default()
        }
    }

    /// Sets the grid extent.
    pub fn with_extent(mut self, extent: usize) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the supersampling resolution per cell axis.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the boundary loop vertex count.
    pub fn with_boundary_points(mut self, boundary_points: usize) -> Self {
        self.boundary_points = boundary_points;
        self
    }

    /// Sets the boundary loop topology.
    pub fn with_boundary_topology(mut self, topology: BoundaryTopology) -> Self {
        self.boundary_topology = topology;
        self
    }

    /// Sets the normal reconstruction strategy.
    pub fn with_normal_strategy(mut self, strategy: NormalStrategy) -> Self {
        self.normal_strategy = strategy;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Zero extents or sample counts would otherwise surface as division by
    /// zero deep inside the field passes, so they are rejected here.
    pub fn validate(&self) -> Result<()> {
        if self.extent == 0 {
            return Err(Error::InvalidConfig("extent must be > 0".into()));
        }
        if self.samples == 0 {
            return Err(Error::InvalidConfig("samples must be > 0".into()));
        }
        if self.boundary_points < 3 {
            return Err(Error::InvalidConfig("boundary_points must be >= 3".into()));
        }
        if !self.circle.radius.is_finite() || self.circle.radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "circle radius must be finite and > 0".into(),
            ));
        }
        if !self.circle.center.is_finite() {
            return Err(Error::InvalidConfig("circle center must be finite".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn builders_override_each_knob() {
        let config = PipelineConfig::new(Circle::new(DVec2::new(0.0, 0.0), 1.0))
            .with_extent(10)
            .with_samples(4)
            .with_boundary_points(16)
            .with_boundary_topology(BoundaryTopology::Polyline)
            .with_normal_strategy(NormalStrategy::Radial);

        assert_eq!(config.extent, 10);
        assert_eq!(config.samples, 4);
        assert_eq!(config.boundary_points, 16);
        assert_eq!(config.boundary_topology, BoundaryTopology::Polyline);
        assert_eq!(config.normal_strategy, NormalStrategy::Radial);
    }

    #[test]
    fn zero_extent_is_rejected() {
        let config = PipelineConfig::default().with_extent(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(ref msg)) if msg.contains("extent")
        ));
    }

    #[test]
    fn zero_samples_are_rejected() {
        let config = PipelineConfig::default().with_samples(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn degenerate_boundary_loops_are_rejected() {
        let config = PipelineConfig::default().with_boundary_points(2);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn non_positive_or_non_finite_radius_is_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = PipelineConfig::new(Circle::new(DVec2::new(0.5, 0.5), radius));
            assert!(config.validate().is_err(), "radius {radius} should fail");
        }
    }
}
