//! JSON surface description.
//!
//! A surface file carries the grid geometry, optional line labels and the
//! flattened values. Undefined nodes may be written as `null`:
//!
//! ```json
//! {
//!   "grid": { "columns": 2, "rows": 1, "origin_x": 0.0, "origin_y": 0.0,
//!             "increment_x": 25.0, "increment_y": 25.0, "rotation_degrees": 30.0 },
//!   "layout": "inline-fastest",
//!   "inline_indices": [1690, 1691],
//!   "values": [1954.0, null]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{GridGeometry, ValueLayout};
use crate::undef::{is_defined, UNDEF_MAP};
use super::regular::RegularSurface;
use super::samples::{SurfaceError, SurfaceSamples};

/// Errors that can occur while reading or writing a surface file.
#[derive(Error, Debug)]
pub enum SurfaceFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid surface: {0}")]
    Surface(#[from] SurfaceError),
}

/// On-disk representation of a regular surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFile {
    /// Grid geometry.
    pub grid: GridGeometry,
    /// Addressing of `values`.
    #[serde(default)]
    pub layout: ValueLayout,
    /// Column labels; defaults to `1..=columns`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_indices: Option<Vec<i32>>,
    /// Row labels; defaults to `1..=rows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossline_indices: Option<Vec<i32>>,
    /// Node values, `null` for undefined.
    pub values: Vec<Option<f64>>,
}

impl SurfaceFile {
    /// Builds a validated surface, filling in default labels and undefined values.
    pub fn into_surface(self) -> Result<RegularSurface, SurfaceError> {
        let values = self
            .values
            .into_iter()
            .map(|v| v.unwrap_or(UNDEF_MAP))
            .collect();
        let mut samples = SurfaceSamples::with_default_lines(&self.grid, values);
        if let Some(lines) = self.inline_indices {
            samples.inline_indices = lines;
        }
        if let Some(lines) = self.crossline_indices {
            samples.crossline_indices = lines;
        }
        RegularSurface::new(self.grid, samples, self.layout)
    }

    /// Captures a surface for serialization; undefined values become `null`.
    pub fn from_surface(surface: &RegularSurface) -> Self {
        let samples = surface.samples();
        Self {
            grid: surface.geometry().clone(),
            layout: surface.layout(),
            inline_indices: Some(samples.inline_indices.clone()),
            crossline_indices: Some(samples.crossline_indices.clone()),
            values: samples
                .values
                .iter()
                .map(|&v| is_defined(v).then_some(v))
                .collect(),
        }
    }
}

/// Parses a surface from a JSON string.
pub fn parse_surface(json: &str) -> Result<RegularSurface, SurfaceFileError> {
    let file: SurfaceFile = serde_json::from_str(json)?;
    Ok(file.into_surface()?)
}

/// Loads a surface from a JSON file.
pub fn load_surface(path: &Path) -> Result<RegularSurface, SurfaceFileError> {
    let reader = BufReader::new(File::open(path)?);
    let file: SurfaceFile = serde_json::from_reader(reader)?;
    Ok(file.into_surface()?)
}

/// Writes a surface to a JSON file.
pub fn save_surface(surface: &RegularSurface, path: &Path) -> Result<(), SurfaceFileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &SurfaceFile::from_surface(surface))?;
    writer.flush()?;
    Ok(())
}
