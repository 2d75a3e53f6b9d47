//! Geometry computation and primitive emission

#[cfg(feature = "cairo")]
mod cairo_backend;
mod dirty;
mod frame;
mod geometry;

#[cfg(feature = "cairo")]
pub use cairo_backend::CairoBackend;
pub use dirty::{DirtyRect, DirtyRegionTracker};
pub use frame::{GeometryFrame, PaintRole, Primitive};
pub use geometry::{render_clock_face, ROMAN_NUMERALS};
