//! Drawing backend trait and font metrics
//!
//! The engine decides which primitives to draw and where; rasterization
//! belongs to the host. Backends implement the four primitive calls and
//! supply font metrics for the numeral face.

use anyhow::Result;

use crate::render::PaintRole;

/// Font metrics for the numeral text face, supplied by the backend.
///
/// `ascent` and `descent` are distances from the baseline (both
/// non-negative); `bottom` is the lowest reach of any glyph below the
/// baseline, which for most backends equals the descent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f64,
    pub descent: f64,
    pub bottom: f64,
}

impl FontMetrics {
    /// Sentinel used when numerals are disabled: the numeral band
    /// collapses and the inner rim moves out to the thick markers.
    pub const ZERO: FontMetrics = FontMetrics {
        ascent: 0.0,
        descent: 0.0,
        bottom: 0.0,
    };

    /// Total glyph height above plus below the baseline
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Trait for 2D drawing backends
///
/// All coordinates are in the engine's local frame: origin at the dial
/// center, y pointing down. The backend is expected to resolve each
/// [`PaintRole`] against the active [`ClockStyle`](clockface_types::ClockStyle)
/// for color and stroke width.
pub trait RenderBackend {
    /// Draw a filled circle
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, role: PaintRole) -> Result<()>;

    /// Draw a stroked circle outline
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, role: PaintRole) -> Result<()>;

    /// Draw a stroked line segment
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, role: PaintRole) -> Result<()>;

    /// Draw a text label. `x` is the horizontal center of the string,
    /// `y` its baseline.
    fn text(&mut self, text: &str, x: f64, y: f64, role: PaintRole) -> Result<()>;

    /// Metrics of the numeral face at the given text size
    fn numeral_metrics(&mut self, text_size: f64) -> FontMetrics;
}
