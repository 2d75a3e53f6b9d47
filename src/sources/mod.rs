//! Time sources for the rendering core

mod clock;

pub use clock::{TimeSample, TimeSampler};
