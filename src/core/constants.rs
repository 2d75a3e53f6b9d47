//! Shared constants for the rendering core

use std::time::Duration;

/// Duration of the one-shot catch-up sweep animation
pub const SWEEP_ANIMATION_DURATION: Duration = Duration::from_millis(1200);

/// Delay before the catch-up sweep starts rendering
pub const SWEEP_ANIMATION_START_DELAY: Duration = Duration::from_millis(500);

/// Minimum widget footprint in density-independent units, reported when
/// the host does not impose exact dimensions
pub const MIN_WIDTH_DP: f64 = 50.0;
pub const MIN_HEIGHT_DP: f64 = 50.0;

/// Upper bound (exclusive) for the millisecond-of-minute channel
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
