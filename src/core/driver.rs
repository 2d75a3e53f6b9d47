//! Per-frame orchestration: time sampling, rendering, repaint scoping
//!
//! The driver owns every piece of mutable frame state — the sweep
//! animation, the dirty-region tracker, the resolved time sampler — and
//! is only ever touched from the host's frame callback, so the whole
//! render path is single-threaded and lock-free.
//!
//! Lifecycle: a driver starts in the animating state when the style
//! enables the catch-up sweep, and drops into live sampling the moment
//! the sweep completes (or is cancelled). The transition is one-way;
//! after it, repaints shrink to the region the hands actually moved
//! through.

use std::time::Duration;

use anyhow::Result;
use clockface_types::ClockStyle;

use crate::core::animation::{SweepAnimation, SweepSample};
use crate::core::backend::{FontMetrics, RenderBackend};
use crate::core::constants::{MIN_HEIGHT_DP, MIN_WIDTH_DP};
use crate::render::{render_clock_face, DirtyRect, DirtyRegionTracker};
use crate::sources::TimeSampler;

/// Repaint scope requested for the frame just rendered. The host applies
/// it and must schedule the next frame unconditionally either way — the
/// sweep hand never stops moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repaint {
    /// Repaint the whole surface (catch-up sweep in progress)
    Full,
    /// Repaint only the given region, already expanded to cover stroke
    /// caps
    Region(DirtyRect),
}

enum DriverState {
    Animating(SweepAnimation),
    Live,
}

/// Drives the render loop for one clock widget
pub struct RenderLoopDriver {
    style: ClockStyle,
    sampler: TimeSampler,
    tracker: DirtyRegionTracker,
    state: DriverState,
}

impl RenderLoopDriver {
    /// Build a driver from a style bundle. The style is sanitized here;
    /// a new driver is built wholesale if the host's configuration
    /// changes.
    pub fn new(style: ClockStyle) -> Self {
        let style = style.sanitize();
        let sampler = TimeSampler::new(&style.timezone);
        let state = if style.animation {
            DriverState::Animating(SweepAnimation::new(sampler.sample()))
        } else {
            DriverState::Live
        };
        Self {
            style,
            sampler,
            tracker: DirtyRegionTracker::new(),
            state,
        }
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// True until the catch-up sweep has completed
    pub fn is_animating(&self) -> bool {
        matches!(self.state, DriverState::Animating(_))
    }

    /// Render one frame into `backend` and decide the repaint scope.
    ///
    /// `elapsed` is the time since widget construction per the host's
    /// frame clock; it only matters while the catch-up sweep plays.
    pub fn frame<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        elapsed: Duration,
        width: f64,
        height: f64,
    ) -> Result<Repaint> {
        let mut finished = false;
        let (sample, animating) = match &mut self.state {
            DriverState::Live => (self.sampler.sample(), false),
            DriverState::Animating(anim) => match anim.sample(elapsed) {
                SweepSample::Playing(sample) => (sample, true),
                // Start delay: the sweep has not begun, show live time
                SweepSample::Pending => (self.sampler.sample(), true),
                SweepSample::Finished => {
                    finished = true;
                    (self.sampler.sample(), false)
                }
            },
        };
        if finished {
            self.state = DriverState::Live;
        }

        let metrics = if self.style.show_numbers {
            backend.numeral_metrics(self.style.numeral_text_size)
        } else {
            FontMetrics::ZERO
        };

        let radius = dial_radius(width, height);
        let frame = render_clock_face(&self.style, &sample, radius, &metrics, &mut self.tracker);
        frame.replay(backend)?;

        let rect = self.tracker.take();
        if animating {
            // Hands are sweeping across the whole dial
            Ok(Repaint::Full)
        } else {
            Ok(Repaint::Region(rect.expand(self.style.thick_marker_width)))
        }
    }

    /// Cancel the catch-up sweep (e.g., the widget was detached mid
    /// animation). Treated as completion: the clock switches to live
    /// sampling and keeps ticking.
    pub fn cancel_animation(&mut self) {
        if let DriverState::Animating(anim) = &mut self.state {
            anim.cancel();
            self.state = DriverState::Live;
        }
    }
}

/// Half the shorter side: the master scale for every dial measurement
pub fn dial_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 2.0
}

/// Sizing contract: exact host constraints win; otherwise report the
/// minimum footprint, converted from density-independent units with the
/// host's density factor.
pub fn measure(
    exact_width: Option<f64>,
    exact_height: Option<f64>,
    density: f64,
) -> (f64, f64) {
    (
        exact_width.unwrap_or(MIN_WIDTH_DP * density),
        exact_height.unwrap_or(MIN_HEIGHT_DP * density),
    )
}
