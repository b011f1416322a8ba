//! Validated pairing of a grid geometry with its sample arrays.

use crate::geometry::{GridGeometry, GridMapper, ValueLayout};
use super::samples::{SurfaceError, SurfaceSamples};

/// A regular surface whose sample arrays are known to match its geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularSurface {
    geometry: GridGeometry,
    samples: SurfaceSamples,
    layout: ValueLayout,
}

impl RegularSurface {
    /// Creates a surface, checking array lengths against the geometry.
    pub fn new(
        geometry: GridGeometry,
        samples: SurfaceSamples,
        layout: ValueLayout,
    ) -> Result<Self, SurfaceError> {
        samples.validate(&geometry)?;
        Ok(Self {
            geometry,
            samples,
            layout,
        })
    }

    /// Creates a surface with default `1..=n` line labels.
    pub fn from_values(
        geometry: GridGeometry,
        values: Vec<f64>,
        layout: ValueLayout,
    ) -> Result<Self, SurfaceError> {
        let samples = SurfaceSamples::with_default_lines(&geometry, values);
        Self::new(geometry, samples, layout)
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn samples(&self) -> &SurfaceSamples {
        &self.samples
    }

    pub fn layout(&self) -> ValueLayout {
        self.layout
    }

    /// Reinterprets the flattened values with a different addressing scheme.
    pub fn with_layout(mut self, layout: ValueLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns a coordinate mapper over this surface.
    pub fn mapper(&self) -> GridMapper<'_> {
        GridMapper::new(&self.geometry, &self.samples.values, self.layout)
    }

    /// Splits the surface back into its parts.
    pub fn into_parts(self) -> (GridGeometry, SurfaceSamples, ValueLayout) {
        (self.geometry, self.samples, self.layout)
    }
}
