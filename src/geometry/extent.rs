//! World-space extent of a rotated grid.

use glam::DVec2;

use super::grid::{GridError, GridGeometry};

/// World positions of the four corner nodes of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCorners {
    /// Node (1, 1).
    pub first: DVec2,
    /// Node (columns, 1).
    pub last_column: DVec2,
    /// Node (1, rows).
    pub last_row: DVec2,
    /// Node (columns, rows).
    pub last: DVec2,
}

impl GridCorners {
    /// Computes the corner nodes of `geometry`.
    pub fn of(geometry: &GridGeometry) -> Result<Self, GridError> {
        let (c, r) = (geometry.columns, geometry.rows);
        Ok(Self {
            first: geometry.world_xy(1, 1)?,
            last_column: geometry.world_xy(c, 1)?,
            last_row: geometry.world_xy(1, r)?,
            last: geometry.world_xy(c, r)?,
        })
    }

    /// Returns the corners in node order.
    pub fn as_array(&self) -> [DVec2; 4] {
        [self.first, self.last_column, self.last_row, self.last]
    }

    /// Returns the axis-aligned box enclosing all four corners.
    pub fn bounding_box(&self) -> BoundingBox {
        let pts = self.as_array();
        let min = pts.iter().copied().fold(DVec2::splat(f64::MAX), DVec2::min);
        let max = pts.iter().copied().fold(DVec2::splat(f64::MIN), DVec2::max);
        BoundingBox { min, max }
    }
}

/// Axis-aligned world-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BoundingBox {
    /// Width and height of the box.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}
