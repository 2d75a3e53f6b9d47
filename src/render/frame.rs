//! Draw primitives for one rendered frame
//!
//! The engine's output is an ordered list of typed primitives; order is
//! part of the contract, since later primitives cover earlier ones. Each
//! primitive names the style element it is painted with, and the backend
//! resolves that to a color and stroke width.

use anyhow::Result;
use clockface_types::{ClockStyle, Color};

use crate::core::RenderBackend;

/// The style element a primitive is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintRole {
    Face,
    OuterRim,
    InnerRim,
    ThickMarker,
    ThinMarker,
    Numeral,
    HourHand,
    MinuteHand,
    SweepHand,
    CenterDot,
}

impl PaintRole {
    /// Color of this element in the given style
    pub fn color(self, style: &ClockStyle) -> Color {
        match self {
            PaintRole::Face => style.face_color,
            PaintRole::OuterRim => style.outer_rim_color,
            PaintRole::InnerRim => style.inner_rim_color,
            PaintRole::ThickMarker => style.thick_marker_color,
            PaintRole::ThinMarker => style.thin_marker_color,
            PaintRole::Numeral => style.numeral_color,
            PaintRole::HourHand => style.hour_hand_color,
            PaintRole::MinuteHand => style.minute_hand_color,
            PaintRole::SweepHand => style.sweep_hand_color,
            PaintRole::CenterDot => style.center_dot_color,
        }
    }

    /// Stroke width for stroked elements; `None` for filled shapes and
    /// text
    pub fn stroke_width(self, style: &ClockStyle) -> Option<f64> {
        match self {
            PaintRole::Face | PaintRole::CenterDot | PaintRole::Numeral => None,
            PaintRole::OuterRim => Some(style.outer_rim_width),
            PaintRole::InnerRim => Some(style.inner_rim_width),
            PaintRole::ThickMarker => Some(style.thick_marker_width),
            PaintRole::ThinMarker => Some(style.thin_marker_width),
            PaintRole::HourHand => Some(style.hour_hand_width),
            PaintRole::MinuteHand => Some(style.minute_hand_width),
            PaintRole::SweepHand => Some(style.sweep_hand_width),
        }
    }
}

/// One draw primitive in the dial's local, y-down coordinate frame
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        role: PaintRole,
    },
    StrokeCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        role: PaintRole,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        role: PaintRole,
    },
    /// `x` is the horizontal center of the string, `y` its baseline
    Text {
        text: &'static str,
        x: f64,
        y: f64,
        role: PaintRole,
    },
}

/// The engine's output for one frame: an ordered primitive sequence,
/// consumed by the backend and discarded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryFrame {
    primitives: Vec<Primitive>,
}

impl GeometryFrame {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            primitives: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Walk the primitives into a backend, in order
    pub fn replay<B: RenderBackend>(&self, backend: &mut B) -> Result<()> {
        for primitive in &self.primitives {
            match *primitive {
                Primitive::FillCircle {
                    cx,
                    cy,
                    radius,
                    role,
                } => backend.fill_circle(cx, cy, radius, role)?,
                Primitive::StrokeCircle {
                    cx,
                    cy,
                    radius,
                    role,
                } => backend.stroke_circle(cx, cy, radius, role)?,
                Primitive::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    role,
                } => backend.line(x0, y0, x1, y1, role)?,
                Primitive::Text { text, x, y, role } => backend.text(text, x, y, role)?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a GeometryFrame {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
