//! Surface data: sample arrays, validated surfaces and their JSON form.

mod samples;
mod regular;
mod file;

pub use samples::{SurfaceSamples, SurfaceError, validate_dimensions};
pub use regular::RegularSurface;
pub use file::{SurfaceFile, SurfaceFileError, parse_surface, load_surface, save_surface};
