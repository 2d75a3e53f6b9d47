//! One-shot catch-up sweep played when a clock widget first appears
//!
//! The hands start collapsed at the twelve o'clock zero position and
//! sweep forward to the current time over a fixed duration, after a
//! fixed start delay. All four channels (hour, minute, second,
//! millisecond-of-minute) are driven by one symmetric
//! accelerate/decelerate curve so the hands move in visual unison.
//!
//! The animation is sampled by pull: the driver passes the elapsed time
//! since widget construction and receives either a catch-up sample, a
//! "not started yet" marker, or the terminal completion marker. Once
//! finished it never produces samples again.

use std::time::Duration;

use crate::core::constants::{
    MILLIS_PER_MINUTE, SWEEP_ANIMATION_DURATION, SWEEP_ANIMATION_START_DELAY,
};
use crate::sources::TimeSample;

/// What the animation yields for a given elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepSample {
    /// Still inside the start delay; nothing attributable to the
    /// animation is drawn yet
    Pending,
    /// Catch-up in progress
    Playing(TimeSample),
    /// The sweep has completed (or was cancelled); switch to live
    /// sampling permanently
    Finished,
}

/// One-shot sweep animation state
#[derive(Debug, Clone)]
pub struct SweepAnimation {
    /// The time the hands sweep toward: real time at expected completion
    target: TimeSample,
    duration: Duration,
    start_delay: Duration,
    finished: bool,
}

/// Symmetric ease-in-ease-out curve: accelerate through the first half,
/// decelerate through the second
fn ease_in_out(t: f64) -> f64 {
    (1.0 - (std::f64::consts::PI * t).cos()) / 2.0
}

impl SweepAnimation {
    /// Build the animation from the time at widget construction.
    ///
    /// The target leads `now` by the start delay plus the duration, so
    /// the hands land on true current time the moment the sweep ends.
    /// The millisecond channel is clamped into [0, 60000); the second
    /// channel keeps the lead even when it crosses a minute boundary so
    /// that the minute-hand correction term stays continuous.
    pub fn new(now: TimeSample) -> Self {
        let lead = (SWEEP_ANIMATION_DURATION + SWEEP_ANIMATION_START_DELAY).as_secs_f64();
        let second = now.second + lead;
        let target = TimeSample {
            hour: now.hour,
            minute: now.minute,
            second,
            millisecond: (1000.0 * second).clamp(0.0, MILLIS_PER_MINUTE - 1.0),
        };
        Self {
            target,
            duration: SWEEP_ANIMATION_DURATION,
            start_delay: SWEEP_ANIMATION_START_DELAY,
            finished: false,
        }
    }

    /// Sample the animation at `elapsed` since widget construction
    pub fn sample(&mut self, elapsed: Duration) -> SweepSample {
        if self.finished {
            return SweepSample::Finished;
        }
        if elapsed < self.start_delay {
            return SweepSample::Pending;
        }
        let t = (elapsed - self.start_delay).as_secs_f64() / self.duration.as_secs_f64();
        if t >= 1.0 {
            self.finished = true;
            return SweepSample::Finished;
        }
        let k = ease_in_out(t);
        SweepSample::Playing(TimeSample {
            hour: self.target.hour * k,
            minute: self.target.minute * k,
            second: self.target.second * k,
            millisecond: self.target.millisecond * k,
        })
    }

    /// Cancel the sweep. Treated as completion so the clock keeps
    /// ticking on live time.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
