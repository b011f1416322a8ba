//! Regular grid definition and the index-to-world transform.

use glam::{DMat2, DVec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::flip::YFlip;

/// Errors raised when addressing a grid node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid index out of range: column {column} (1..={columns}), row {row} (1..={rows})")]
    OutOfRange {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
    #[error("Value index {index} out of range for {len} values")]
    ValueOutOfRange { index: usize, len: usize },
}

/// How a flattened value array is addressed by (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueLayout {
    /// Column (inline) index varies fastest: `(row-1) * columns + (column-1)`.
    #[default]
    InlineFastest,
    /// Row (crossline) index varies fastest: `(column-1) * rows + (row-1)`.
    ///
    /// This is the layout of a C-ordered `(columns, rows)` array.
    CrosslineFastest,
}

impl ValueLayout {
    /// Returns the zero-based flattened position of a 1-based (column, row) node.
    ///
    /// Bounds are not checked here; see [`GridGeometry::value_index`].
    pub const fn flat_index(self, column: usize, row: usize, columns: usize, rows: usize) -> usize {
        match self {
            ValueLayout::InlineFastest => (row - 1) * columns + (column - 1),
            ValueLayout::CrosslineFastest => (column - 1) * rows + (row - 1),
        }
    }
}

/// Geometry of a regularly sampled, possibly rotated 2-D surface.
///
/// Node (1, 1) sits at the origin. Columns advance along the local X axis by
/// `increment_x`, rows along the local Y axis by `increment_y` (negated when
/// flipped). The local axes are rotated counter-clockwise by
/// `rotation_degrees` relative to world X.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Number of nodes along the inline (local X) axis.
    pub columns: usize,
    /// Number of nodes along the crossline (local Y) axis.
    pub rows: usize,
    /// World X of node (1, 1).
    pub origin_x: f64,
    /// World Y of node (1, 1).
    pub origin_y: f64,
    /// Node spacing along the local X axis.
    pub increment_x: f64,
    /// Node spacing along the local Y axis.
    pub increment_y: f64,
    /// Counter-clockwise rotation of the local axes, in degrees.
    #[serde(default)]
    pub rotation_degrees: f64,
    /// Orientation of the local Y axis.
    #[serde(default)]
    pub flip: YFlip,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
            origin_x: 0.0,
            origin_y: 0.0,
            increment_x: 1.0,
            increment_y: 1.0,
            rotation_degrees: 0.0,
            flip: YFlip::Normal,
        }
    }
}

impl GridGeometry {
    /// Creates an unrotated unit grid with the given dimensions.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Sets the world position of node (1, 1).
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Sets the node spacing along both local axes.
    pub fn with_increment(mut self, x: f64, y: f64) -> Self {
        self.increment_x = x;
        self.increment_y = y;
        self
    }

    /// Sets the rotation in degrees (counter-clockwise from world X).
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Sets the crossline axis orientation.
    pub fn with_flip(mut self, flip: YFlip) -> Self {
        self.flip = flip;
        self
    }

    /// Returns the origin as a vector.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.origin_x, self.origin_y)
    }

    /// Returns the total node count, or `None` on overflow.
    pub fn node_count(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    /// Returns true if the 1-based (column, row) pair addresses a node.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        (1..=self.columns).contains(&column) && (1..=self.rows).contains(&row)
    }

    fn check_index(&self, column: usize, row: usize) -> Result<(), GridError> {
        if self.contains(column, row) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Computes the world position of the 1-based node (column, row).
    pub fn world_xy(&self, column: usize, row: usize) -> Result<DVec2, GridError> {
        self.check_index(column, row)?;

        let offset = DVec2::new(
            (column - 1) as f64 * self.increment_x,
            (row - 1) as f64 * self.increment_y * self.flip.sign(),
        );
        let rotation = DMat2::from_angle(self.rotation_degrees.to_radians());

        Ok(self.origin() + rotation * offset)
    }

    /// Returns the zero-based position of node (column, row) in a flattened value array.
    pub fn value_index(&self, column: usize, row: usize, layout: ValueLayout) -> Result<usize, GridError> {
        self.check_index(column, row)?;
        Ok(layout.flat_index(column, row, self.columns, self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn base_grid() -> GridGeometry {
        GridGeometry::new(3, 2)
            .with_origin(1000.0, 2000.0)
            .with_increment(10.0, 10.0)
    }

    #[test]
    fn test_origin_node() {
        let p = base_grid().world_xy(1, 1).unwrap();
        assert_eq!(p, DVec2::new(1000.0, 2000.0));
    }

    #[test]
    fn test_unrotated_steps() {
        let grid = base_grid();
        assert_eq!(grid.world_xy(2, 1).unwrap(), DVec2::new(1010.0, 2000.0));
        assert_eq!(grid.world_xy(1, 2).unwrap(), DVec2::new(1000.0, 2010.0));
        assert_eq!(grid.world_xy(3, 2).unwrap(), DVec2::new(1020.0, 2010.0));
    }

    #[test]
    fn test_flipped_rows_go_down() {
        let grid = base_grid().with_flip(YFlip::Flipped);
        let p = grid.world_xy(1, 2).unwrap();
        assert_eq!(p.x, 1000.0);
        assert_eq!(p.y, 1990.0);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let grid = GridGeometry::new(2, 2)
            .with_increment(10.0, 10.0)
            .with_rotation(90.0);

        let p = grid.world_xy(2, 1).unwrap();
        assert!(p.x.abs() < EPS, "x = {}", p.x);
        assert!((p.y - 10.0).abs() < EPS, "y = {}", p.y);

        // Local Y turns into world -X.
        let q = grid.world_xy(1, 2).unwrap();
        assert!((q.x + 10.0).abs() < EPS, "x = {}", q.x);
        assert!(q.y.abs() < EPS, "y = {}", q.y);
    }

    #[test]
    fn test_rotation_with_flip() {
        let grid = GridGeometry::new(2, 2)
            .with_increment(10.0, 10.0)
            .with_rotation(90.0)
            .with_flip(YFlip::Flipped);

        let q = grid.world_xy(1, 2).unwrap();
        assert!((q.x - 10.0).abs() < EPS, "x = {}", q.x);
        assert!(q.y.abs() < EPS, "y = {}", q.y);
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let grid = GridGeometry::new(5, 5)
            .with_origin(535_000.0, 6_761_000.0)
            .with_increment(12.5, 25.0)
            .with_rotation(-37.3);

        let a = grid.world_xy(1, 1).unwrap();
        let b = grid.world_xy(5, 1).unwrap();
        let c = grid.world_xy(1, 5).unwrap();
        assert!((a.distance(b) - 50.0).abs() < 1e-6);
        assert!((a.distance(c) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range() {
        let grid = base_grid();
        for (col, row) in [(0, 1), (4, 1), (1, 0), (1, 3)] {
            let err = grid.world_xy(col, row).unwrap_err();
            assert!(matches!(err, GridError::OutOfRange { .. }), "({col}, {row})");
        }
    }

    #[test]
    fn test_value_index_layouts() {
        let grid = base_grid();
        assert_eq!(grid.value_index(1, 1, ValueLayout::InlineFastest).unwrap(), 0);
        assert_eq!(grid.value_index(2, 1, ValueLayout::InlineFastest).unwrap(), 1);
        assert_eq!(grid.value_index(1, 2, ValueLayout::InlineFastest).unwrap(), 3);
        assert_eq!(grid.value_index(3, 2, ValueLayout::InlineFastest).unwrap(), 5);

        assert_eq!(grid.value_index(1, 2, ValueLayout::CrosslineFastest).unwrap(), 1);
        assert_eq!(grid.value_index(2, 1, ValueLayout::CrosslineFastest).unwrap(), 2);
        assert_eq!(grid.value_index(3, 2, ValueLayout::CrosslineFastest).unwrap(), 5);
    }

    #[test]
    fn test_node_count_overflow() {
        assert_eq!(GridGeometry::new(4, 3).node_count(), Some(12));
        assert_eq!(GridGeometry::new(usize::MAX, 2).node_count(), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "columns": 2, "rows": 3,
            "origin_x": 1.0, "origin_y": 2.0,
            "increment_x": 5.0, "increment_y": 6.0
        }"#;
        let grid: GridGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(grid.rotation_degrees, 0.0);
        assert_eq!(grid.flip, YFlip::Normal);
    }
}
