//! Per-node world coordinate and value lookup.

use super::grid::{GridError, GridGeometry, ValueLayout};
use crate::undef::is_defined;

/// World position and value of a single grid node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedSample {
    /// World X coordinate.
    pub x: f64,
    /// World Y coordinate.
    pub y: f64,
    /// Sample value (may be the undefined sentinel).
    pub z: f64,
    /// False if `z` is at or above the undefined threshold.
    pub is_defined: bool,
}

/// Maps 1-based (column, row) indices to world coordinates and sample values.
///
/// Borrows the geometry and values read-only; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct GridMapper<'a> {
    geometry: &'a GridGeometry,
    values: &'a [f64],
    layout: ValueLayout,
}

impl<'a> GridMapper<'a> {
    /// Creates a mapper over a geometry and its flattened values.
    pub fn new(geometry: &'a GridGeometry, values: &'a [f64], layout: ValueLayout) -> Self {
        Self {
            geometry,
            values,
            layout,
        }
    }

    /// Returns the geometry this mapper reads from.
    pub fn geometry(&self) -> &'a GridGeometry {
        self.geometry
    }

    /// Returns the addressing scheme used for value lookup.
    pub fn layout(&self) -> ValueLayout {
        self.layout
    }

    /// Maps node (column, row) to its world position and value.
    ///
    /// # Errors
    /// [`GridError::OutOfRange`] if either index lies outside the grid, and
    /// [`GridError::ValueOutOfRange`] if the flattened position falls past the
    /// end of the value slice.
    pub fn map(&self, column: usize, row: usize) -> Result<MappedSample, GridError> {
        let xy = self.geometry.world_xy(column, row)?;
        let index = self.geometry.value_index(column, row, self.layout)?;
        let z = *self.values.get(index).ok_or(GridError::ValueOutOfRange {
            index,
            len: self.values.len(),
        })?;

        Ok(MappedSample {
            x: xy.x,
            y: xy.y,
            z,
            is_defined: is_defined(z),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::YFlip;
    use crate::undef::UNDEF_MAP;

    fn grid_2x2() -> GridGeometry {
        GridGeometry::new(2, 2)
            .with_origin(1000.0, 2000.0)
            .with_increment(10.0, 10.0)
    }

    #[test]
    fn test_map_positions_and_values() {
        let grid = grid_2x2();
        let values = [1.0, 2.0, 3.0, 4.0];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        let s = mapper.map(1, 1).unwrap();
        assert_eq!((s.x, s.y, s.z), (1000.0, 2000.0, 1.0));
        assert!(s.is_defined);

        let s = mapper.map(2, 1).unwrap();
        assert_eq!((s.x, s.y, s.z), (1010.0, 2000.0, 2.0));

        let s = mapper.map(1, 2).unwrap();
        assert_eq!((s.x, s.y, s.z), (1000.0, 2010.0, 3.0));
    }

    #[test]
    fn test_map_crossline_fastest() {
        let grid = grid_2x2();
        let values = [1.0, 2.0, 3.0, 4.0];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::CrosslineFastest);

        assert_eq!(mapper.map(2, 1).unwrap().z, 3.0);
        assert_eq!(mapper.map(1, 2).unwrap().z, 2.0);
    }

    #[test]
    fn test_map_flipped() {
        let grid = grid_2x2().with_flip(YFlip::Flipped);
        let values = [0.0; 4];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        assert_eq!(mapper.map(1, 2).unwrap().y, 1990.0);
    }

    #[test]
    fn test_map_reports_undefined() {
        let grid = grid_2x2();
        let values = [1.0, UNDEF_MAP, 3.0, 4.0];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        let s = mapper.map(2, 1).unwrap();
        assert!(!s.is_defined);
        assert_eq!(s.z, UNDEF_MAP);
    }

    #[test]
    fn test_map_column_bounds() {
        let grid = grid_2x2();
        let values = [0.0; 4];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        assert!(matches!(mapper.map(0, 1), Err(GridError::OutOfRange { column: 0, .. })));
        assert!(matches!(mapper.map(3, 1), Err(GridError::OutOfRange { column: 3, .. })));
    }

    #[test]
    fn test_map_short_value_slice() {
        let grid = grid_2x2();
        let values = [0.0; 3];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        assert!(mapper.map(1, 2).is_ok());
        assert_eq!(
            mapper.map(2, 2),
            Err(GridError::ValueOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_map_is_deterministic() {
        let grid = grid_2x2().with_rotation(33.0);
        let values = [5.0; 4];
        let mapper = GridMapper::new(&grid, &values, ValueLayout::InlineFastest);

        assert_eq!(mapper.map(2, 2).unwrap(), mapper.map(2, 2).unwrap());
    }
}
