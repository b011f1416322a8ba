//! Export module for writing surfaces to interchange formats.
//!
//! Supports the tab-separated IJXYZ table (inline, crossline, X, Y, Z)
//! read by seismic interpretation tools.

mod ijxyz;

pub use ijxyz::{
    write_ijxyz,
    write_surface_ijxyz,
    export_surface_ijxyz,
    IjxyzExportError,
    IjxyzSummary,
};
