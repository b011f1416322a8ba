//! IJXYZ text export: one `INLINE XLINE X Y Z` record per defined node.
//!
//! Records are tab separated, coordinates and values use six fractional
//! digits, and the file ends with a single empty line:
//!
//! ```text
//! 1690	2758	535122.987940	6761613.488390	1954.000000
//! 1691	2758	535110.662728	6761627.618245	1953.603800
//!
//! ```
//!
//! Rows are written in order; within a row the inline (column) index runs fastest.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::geometry::{GridError, GridGeometry, GridMapper, MappedSample, ValueLayout};
use crate::surface::{validate_dimensions, RegularSurface, SurfaceError};

/// Errors that can occur during IJXYZ export.
#[derive(Error, Debug)]
pub enum IjxyzExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Coordinate transform failed: {0}")]
    Transform(#[from] GridError),
}

/// Record counts from a completed export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IjxyzSummary {
    /// Records written (defined nodes).
    pub written: usize,
    /// Nodes skipped as undefined.
    pub skipped: usize,
}

impl IjxyzSummary {
    /// Total nodes visited.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

fn write_record<W: Write>(
    sink: &mut W,
    inline: i32,
    crossline: i32,
    sample: &MappedSample,
) -> std::io::Result<()> {
    writeln!(
        sink,
        "{}\t{}\t{:.6}\t{:.6}\t{:.6}",
        inline, crossline, sample.x, sample.y, sample.z
    )
}

/// Writes a surface in IJXYZ format to any sink.
///
/// Array lengths are checked against `geometry` before anything is written.
/// Undefined nodes produce no record. The first failing write or transform
/// aborts the export; whatever was already written stays in the sink.
///
/// # Arguments
/// * `geometry` - Grid definition
/// * `inline_indices` - Label for each column
/// * `crossline_indices` - Label for each row
/// * `values` - Flattened node values, addressed by `layout`
/// * `layout` - Addressing scheme of `values`
/// * `sink` - Destination; flushed before returning
pub fn write_ijxyz<W: Write>(
    geometry: &GridGeometry,
    inline_indices: &[i32],
    crossline_indices: &[i32],
    values: &[f64],
    layout: ValueLayout,
    sink: &mut W,
) -> Result<IjxyzSummary, IjxyzExportError> {
    validate_dimensions(geometry, inline_indices, crossline_indices, values)?;

    debug!(
        columns = geometry.columns,
        rows = geometry.rows,
        ?layout,
        "Writing IJXYZ records"
    );

    let mapper = GridMapper::new(geometry, values, layout);
    let mut summary = IjxyzSummary::default();

    for (row, &crossline) in (1..=geometry.rows).zip(crossline_indices) {
        for (column, &inline) in (1..=geometry.columns).zip(inline_indices) {
            let sample = mapper.map(column, row)?;
            if sample.is_defined {
                write_record(sink, inline, crossline, &sample)?;
                summary.written += 1;
            } else {
                summary.skipped += 1;
            }
        }
    }

    writeln!(sink)?;
    sink.flush()?;

    if summary.written == 0 {
        warn!(skipped = summary.skipped, "All IJXYZ samples were undefined");
    }
    Ok(summary)
}

/// Writes a validated surface in IJXYZ format to any sink.
pub fn write_surface_ijxyz<W: Write>(
    surface: &RegularSurface,
    sink: &mut W,
) -> Result<IjxyzSummary, IjxyzExportError> {
    let samples = surface.samples();
    write_ijxyz(
        surface.geometry(),
        &samples.inline_indices,
        &samples.crossline_indices,
        &samples.values,
        surface.layout(),
        sink,
    )
}

/// Exports a surface to an IJXYZ file, creating or truncating `path`.
///
/// A partially written file is left in place on failure.
///
/// # Returns
/// Record counts on success, or the first error encountered
pub fn export_surface_ijxyz(
    surface: &RegularSurface,
    path: &Path,
) -> Result<IjxyzSummary, IjxyzExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let summary = write_surface_ijxyz(surface, &mut writer)?;
    writer.get_ref().sync_all()?;

    info!(
        path = %path.display(),
        written = summary.written,
        skipped = summary.skipped,
        "Exported IJXYZ surface"
    );
    Ok(summary)
}
