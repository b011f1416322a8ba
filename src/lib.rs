//! Regular surface export to IJXYZ text tables.
//!
//! This crate maps the nodes of a rotated, regularly sampled 2-D surface to
//! world coordinates and writes every defined node as an
//! `INLINE XLINE X Y Z` record.

pub mod undef;
pub mod geometry;
pub mod surface;
pub mod export;

pub use geometry::{GridGeometry, GridMapper, MappedSample, ValueLayout, YFlip};
pub use surface::{RegularSurface, SurfaceSamples};
pub use export::{export_surface_ijxyz, write_ijxyz, IjxyzExportError, IjxyzSummary};
