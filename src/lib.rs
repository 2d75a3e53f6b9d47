//! clockface: analog clock face rendering core
//!
//! This library computes, for a point in wall-clock time and a style
//! configuration, the vector primitives of a traditional analog dial —
//! face, rims, markers, numerals, three hands, center dot — plus the
//! bookkeeping for minimal repaints and the one-shot catch-up sweep
//! played when a clock widget first appears.
//!
//! The library draws nothing itself: hosts implement [`RenderBackend`]
//! over their 2D surface (a Cairo adapter ships behind the `cairo`
//! feature) and drive [`RenderLoopDriver::frame`] from their frame
//! clock.

pub mod core;
pub mod render;
pub mod sources;

// Re-export commonly used types
pub use crate::core::{
    dial_radius, measure, FontMetrics, RenderBackend, RenderLoopDriver, Repaint, SweepAnimation,
    SweepSample,
};
pub use clockface_types::{ClockStyle, Color, ColorParseError, NumeralStyle};
pub use render::{
    render_clock_face, DirtyRect, DirtyRegionTracker, GeometryFrame, PaintRole, Primitive,
};
pub use sources::{TimeSample, TimeSampler};
