//! Per-node sample arrays: line labels and values.

use thiserror::Error;

use crate::geometry::GridGeometry;
use crate::undef::is_defined;

/// Errors raised when sample arrays disagree with the grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Dimension mismatch: {field} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid grid dimensions: {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },
}

/// Inline/crossline labels and flattened values of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSamples {
    /// Label for each column (length = columns).
    pub inline_indices: Vec<i32>,
    /// Label for each row (length = rows).
    pub crossline_indices: Vec<i32>,
    /// One value per node (length = columns * rows).
    pub values: Vec<f64>,
}

impl SurfaceSamples {
    /// Creates sample arrays from explicit labels and values.
    pub fn new(inline_indices: Vec<i32>, crossline_indices: Vec<i32>, values: Vec<f64>) -> Self {
        Self {
            inline_indices,
            crossline_indices,
            values,
        }
    }

    /// Creates sample arrays labelled `1..=columns` and `1..=rows`.
    pub fn with_default_lines(geometry: &GridGeometry, values: Vec<f64>) -> Self {
        Self {
            inline_indices: default_lines(geometry.columns),
            crossline_indices: default_lines(geometry.rows),
            values,
        }
    }

    /// Checks array lengths against the grid dimensions.
    ///
    /// See [`validate_dimensions`].
    pub fn validate(&self, geometry: &GridGeometry) -> Result<(), SurfaceError> {
        validate_dimensions(geometry, &self.inline_indices, &self.crossline_indices, &self.values)
    }

    /// Number of values below the undefined threshold.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|&&v| is_defined(v)).count()
    }

    /// Min and max over defined values, or `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|&v| is_defined(v))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}

/// Checks label and value array lengths against the grid dimensions.
///
/// # Errors
/// [`SurfaceError::InvalidDimensions`] for an empty or overflowing grid,
/// [`SurfaceError::DimensionMismatch`] for the first array whose length is wrong.
pub fn validate_dimensions(
    geometry: &GridGeometry,
    inline_indices: &[i32],
    crossline_indices: &[i32],
    values: &[f64],
) -> Result<(), SurfaceError> {
    let (columns, rows) = (geometry.columns, geometry.rows);
    let nodes = match geometry.node_count() {
        Some(n) if columns > 0 && rows > 0 => n,
        _ => return Err(SurfaceError::InvalidDimensions { columns, rows }),
    };

    check_len("inline_indices", columns, inline_indices.len())?;
    check_len("crossline_indices", rows, crossline_indices.len())?;
    check_len("values", nodes, values.len())?;
    Ok(())
}

fn default_lines(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), SurfaceError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SurfaceError::DimensionMismatch {
            field,
            expected,
            actual,
        })
    }
}
