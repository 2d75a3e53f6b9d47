//! clockface-types: Shared data types for the clockface rendering core.
//!
//! This crate contains pure data types (colors, style configuration) that
//! have no Cairo dependency, making them suitable as a foundation layer.
//! The optional `cairo` feature adds convenience methods for hosts that
//! draw with Cairo.

pub mod color;
pub mod style;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorParseError};
pub use style::{ClockStyle, NumeralStyle};
