//! Cairo drawing backend adapter
//!
//! Implements [`RenderBackend`] over a `cairo::Context` whose user-space
//! origin has already been translated to the dial center. Font face
//! selection is left to the host; the adapter only sets the numeral text
//! size and uses the context's current face.

use std::f64::consts::PI;

use anyhow::Result;
use clockface_types::ClockStyle;

use crate::core::{FontMetrics, RenderBackend};
use crate::render::PaintRole;

/// Backend over a host-provided Cairo context
pub struct CairoBackend<'a> {
    cr: &'a cairo::Context,
    style: &'a ClockStyle,
}

impl<'a> CairoBackend<'a> {
    pub fn new(cr: &'a cairo::Context, style: &'a ClockStyle) -> Self {
        Self { cr, style }
    }

    fn apply_paint(&self, role: PaintRole) {
        role.color(self.style).apply_to_cairo(self.cr);
        if let Some(width) = role.stroke_width(self.style) {
            self.cr.set_line_width(width);
        }
    }
}

impl RenderBackend for CairoBackend<'_> {
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, role: PaintRole) -> Result<()> {
        self.apply_paint(role);
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill()?;
        Ok(())
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, role: PaintRole) -> Result<()> {
        self.apply_paint(role);
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.stroke()?;
        Ok(())
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, role: PaintRole) -> Result<()> {
        self.apply_paint(role);
        self.cr.move_to(x0, y0);
        self.cr.line_to(x1, y1);
        self.cr.stroke()?;
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64, role: PaintRole) -> Result<()> {
        self.apply_paint(role);
        self.cr.set_font_size(self.style.numeral_text_size);
        let extents = self.cr.text_extents(text)?;
        self.cr.move_to(x - extents.width() / 2.0, y);
        self.cr.show_text(text)?;
        Ok(())
    }

    fn numeral_metrics(&mut self, text_size: f64) -> FontMetrics {
        self.cr.set_font_size(text_size);
        match self.cr.font_extents() {
            Ok(fe) => FontMetrics {
                ascent: fe.ascent(),
                descent: fe.descent(),
                bottom: fe.descent(),
            },
            Err(e) => {
                log::warn!("font extents unavailable: {}, using zero metrics", e);
                FontMetrics::ZERO
            }
        }
    }
}
