//! Analog clock style configuration types

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Numeral style for the dial labels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum NumeralStyle {
    #[serde(rename = "arabic")]
    #[default]
    Arabic,
    #[serde(rename = "roman")]
    Roman,
}

impl NumeralStyle {
    /// Resolve an attribute ordinal. Out-of-range values fall back to Arabic.
    pub fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => NumeralStyle::Arabic,
            1 => NumeralStyle::Roman,
            other => {
                log::warn!("unknown numeral style ordinal {}, using arabic", other);
                NumeralStyle::Arabic
            }
        }
    }
}

/// Analog clock style configuration
///
/// A fully-resolved bundle of rendering parameters. Hosts build one at
/// widget construction (converting device-independent dimensions to the
/// engine's native unit first) and replace it wholesale when their
/// configuration changes; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockStyle {
    // Colors
    #[serde(default = "default_face_color")]
    pub face_color: Color,
    #[serde(default)]
    pub outer_rim_color: Color,
    #[serde(default)]
    pub inner_rim_color: Color,
    #[serde(default)]
    pub thick_marker_color: Color,
    #[serde(default)]
    pub thin_marker_color: Color,
    #[serde(default)]
    pub numeral_color: Color,
    #[serde(default)]
    pub hour_hand_color: Color,
    #[serde(default)]
    pub minute_hand_color: Color,
    #[serde(default)]
    pub sweep_hand_color: Color,
    #[serde(default)]
    pub center_dot_color: Color,

    // Stroke widths and lengths
    #[serde(default = "default_rim_width")]
    pub outer_rim_width: f64,
    #[serde(default = "default_rim_width")]
    pub inner_rim_width: f64,
    #[serde(default = "default_thick_marker_width")]
    pub thick_marker_width: f64,
    #[serde(default = "default_thick_marker_length")]
    pub thick_marker_length: f64,
    #[serde(default = "default_thin_marker_width")]
    pub thin_marker_width: f64,
    #[serde(default = "default_thin_marker_length")]
    pub thin_marker_length: f64,
    #[serde(default = "default_numeral_text_size")]
    pub numeral_text_size: f64,
    #[serde(default = "default_hour_hand_width")]
    pub hour_hand_width: f64,
    #[serde(default = "default_minute_hand_width")]
    pub minute_hand_width: f64,
    #[serde(default = "default_sweep_hand_width")]
    pub sweep_hand_width: f64,
    #[serde(default = "default_center_dot_radius")]
    pub center_dot_radius: f64,
    /// Gap between the inner rim (or thin markers, for the minute hand)
    /// and the hand tips
    #[serde(default = "default_hand_margin")]
    pub hand_margin: f64,

    // Feature toggles
    #[serde(default = "default_true")]
    pub show_thick_markers: bool,
    #[serde(default = "default_true")]
    pub show_thin_markers: bool,
    #[serde(default = "default_true")]
    pub show_numbers: bool,
    #[serde(default = "default_true")]
    pub show_sweep_hand: bool,
    /// Play the one-shot catch-up sweep when the widget first appears
    #[serde(default = "default_true")]
    pub animation: bool,

    #[serde(default)]
    pub numeral_style: NumeralStyle,

    /// Timezone ID (e.g., "America/New_York", "Europe/London", "Local")
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_face_color() -> Color {
    Color::from_rgba8(0xA9, 0xAD, 0xB0, 0xFF)
}

fn default_rim_width() -> f64 {
    1.0
}

fn default_thick_marker_width() -> f64 {
    3.0
}

fn default_thick_marker_length() -> f64 {
    20.0
}

fn default_thin_marker_width() -> f64 {
    1.0
}

fn default_thin_marker_length() -> f64 {
    10.0
}

fn default_numeral_text_size() -> f64 {
    18.0
}

fn default_hour_hand_width() -> f64 {
    5.0
}

fn default_minute_hand_width() -> f64 {
    3.0
}

fn default_sweep_hand_width() -> f64 {
    1.0
}

fn default_center_dot_radius() -> f64 {
    5.0
}

fn default_hand_margin() -> f64 {
    5.0
}

fn default_true() -> bool {
    true
}

fn default_timezone() -> String {
    "Local".to_string()
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            face_color: default_face_color(),
            outer_rim_color: Color::default(),
            inner_rim_color: Color::default(),
            thick_marker_color: Color::default(),
            thin_marker_color: Color::default(),
            numeral_color: Color::default(),
            hour_hand_color: Color::default(),
            minute_hand_color: Color::default(),
            sweep_hand_color: Color::default(),
            center_dot_color: Color::default(),
            outer_rim_width: default_rim_width(),
            inner_rim_width: default_rim_width(),
            thick_marker_width: default_thick_marker_width(),
            thick_marker_length: default_thick_marker_length(),
            thin_marker_width: default_thin_marker_width(),
            thin_marker_length: default_thin_marker_length(),
            numeral_text_size: default_numeral_text_size(),
            hour_hand_width: default_hour_hand_width(),
            minute_hand_width: default_minute_hand_width(),
            sweep_hand_width: default_sweep_hand_width(),
            center_dot_radius: default_center_dot_radius(),
            hand_margin: default_hand_margin(),
            show_thick_markers: true,
            show_thin_markers: true,
            show_numbers: true,
            show_sweep_hand: true,
            animation: true,
            numeral_style: NumeralStyle::default(),
            timezone: default_timezone(),
        }
    }
}

impl ClockStyle {
    /// Clamp every width, length, and radius to be non-negative.
    ///
    /// Negative dimensions produce a degraded but valid style rather than
    /// inverted geometry further down the pipeline.
    pub fn sanitize(mut self) -> Self {
        for (name, dim) in [
            ("outer_rim_width", &mut self.outer_rim_width),
            ("inner_rim_width", &mut self.inner_rim_width),
            ("thick_marker_width", &mut self.thick_marker_width),
            ("thick_marker_length", &mut self.thick_marker_length),
            ("thin_marker_width", &mut self.thin_marker_width),
            ("thin_marker_length", &mut self.thin_marker_length),
            ("numeral_text_size", &mut self.numeral_text_size),
            ("hour_hand_width", &mut self.hour_hand_width),
            ("minute_hand_width", &mut self.minute_hand_width),
            ("sweep_hand_width", &mut self.sweep_hand_width),
            ("center_dot_radius", &mut self.center_dot_radius),
            ("hand_margin", &mut self.hand_margin),
        ] {
            if !dim.is_finite() || *dim < 0.0 {
                log::warn!("clock style {} = {} clamped to 0", name, dim);
                *dim = 0.0;
            }
        }
        self
    }
}
