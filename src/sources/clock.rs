//! Wall-clock time sampling in a configured time zone
//!
//! Resolves "now" into the fractional components the geometry engine
//! consumes. Samples are transient; one is produced per frame and
//! nothing here retains state between frames beyond the resolved zone.

use chrono::{Local, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::MILLIS_PER_MINUTE;

/// One frame's time-of-day components.
///
/// `hour` is the whole hour on a 12-hour dial, `minute` the whole
/// minute, `second` the second smoothed with sub-second milliseconds,
/// and `millisecond` the millisecond-of-minute in [0, 60000). The hand
/// angle formulas combine the coarse channels with the finer ones, so
/// the coarse channels stay whole-valued for live samples; the catch-up
/// animation interpolates all four fractionally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSample {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub millisecond: f64,
}

impl TimeSample {
    /// Build a sample from clock components. The 24-hour value is folded
    /// onto the 12-hour dial, and the millisecond-of-minute channel is
    /// clamped into range (leap seconds can push it past a minute).
    pub fn from_clock(hour24: u32, minute: u32, second: u32, millis: u32) -> Self {
        Self {
            hour: (hour24 % 12) as f64,
            minute: minute as f64,
            second: second as f64 + millis as f64 / 1000.0,
            millisecond: (1000.0 * second as f64 + millis as f64)
                .clamp(0.0, MILLIS_PER_MINUTE - 1.0),
        }
    }
}

/// Samples the current time in a configured time zone.
///
/// The zone identifier follows the convention of the host configuration
/// layer: `"Local"` selects the system zone, anything else is parsed as
/// an IANA zone name. Unresolvable names fall back to the system zone.
#[derive(Debug, Clone)]
pub struct TimeSampler {
    zone: Option<Tz>,
}

impl TimeSampler {
    pub fn new(timezone: &str) -> Self {
        let zone = if timezone == "Local" {
            None
        } else {
            match timezone.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    log::warn!(
                        "unresolvable time zone {:?}, falling back to system zone",
                        timezone
                    );
                    None
                }
            }
        };
        Self { zone }
    }

    /// Resolve "now" into a [`TimeSample`]
    pub fn sample(&self) -> TimeSample {
        match self.zone {
            Some(tz) => {
                let now = Utc::now().with_timezone(&tz);
                TimeSample::from_clock(
                    now.hour(),
                    now.minute(),
                    now.second(),
                    now.timestamp_subsec_millis(),
                )
            }
            None => {
                let now = Local::now();
                TimeSample::from_clock(
                    now.hour(),
                    now.minute(),
                    now.second(),
                    now.timestamp_subsec_millis(),
                )
            }
        }
    }
}

impl Default for TimeSampler {
    fn default() -> Self {
        Self::new("Local")
    }
}
