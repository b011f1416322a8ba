//! Grid geometry module.
//!
//! Provides the regular grid definition and the transform from 1-based
//! (column, row) node indices to rotated, optionally flipped world coordinates.

mod flip;
mod grid;
mod mapper;
mod extent;

pub use flip::YFlip;
pub use grid::{GridGeometry, GridError, ValueLayout};
pub use mapper::{GridMapper, MappedSample};
pub use extent::{GridCorners, BoundingBox};
