//! Clock face geometry
//!
//! Computes the full primitive sequence for one frame of a traditional
//! analog dial. Everything is positioned in a local frame with the
//! origin at the dial center, 0° pointing right and +90° pointing down
//! (y-down surface convention). The twelve o'clock position is at −90°.
//!
//! The computation is pure and total: any well-formed style and sample
//! yields a frame, and a degenerate dial radius yields an empty one.

use std::f64::consts::PI;

use clockface_types::{ClockStyle, NumeralStyle};

use crate::core::FontMetrics;
use crate::render::dirty::DirtyRegionTracker;
use crate::render::frame::{GeometryFrame, PaintRole, Primitive};
use crate::sources::TimeSample;

/// Dial labels, index 0 = one o'clock
const ARABIC_NUMERALS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Roman dial labels, precomposed Unicode numeral forms
pub const ROMAN_NUMERALS: [&str; 12] = [
    "Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ", "Ⅺ", "Ⅻ",
];

/// Hour hand direction. The hand creeps forward with the minute and
/// second so its motion is continuous rather than stepped.
fn hour_hand_angle(sample: &TimeSample) -> f64 {
    (sample.hour - 3.0) * PI / 6.0 + sample.minute * PI / 360.0 + sample.second * PI / 21_600.0
}

/// Minute hand direction, smoothed with the second channel
fn minute_hand_angle(sample: &TimeSample) -> f64 {
    (sample.minute - 15.0) * PI / 30.0 + sample.second * PI / 1_800.0
}

/// Sweep hand direction from the millisecond-of-minute channel: π/30000
/// radians per millisecond, one full revolution per minute
fn sweep_hand_angle(sample: &TimeSample) -> f64 {
    (sample.millisecond - 15_000.0) * PI / 30_000.0
}

/// Compute all primitives for one frame.
///
/// `numeral_metrics` comes from the backend's numeral face; it is
/// ignored (treated as zero) when numerals are disabled, which collapses
/// the numeral band and moves the inner rim out to the thick markers.
/// The tip of every drawn hand is reported to `tracker` so the caller
/// can scope the next repaint.
pub fn render_clock_face(
    style: &ClockStyle,
    sample: &TimeSample,
    dial_radius: f64,
    numeral_metrics: &FontMetrics,
    tracker: &mut DirtyRegionTracker,
) -> GeometryFrame {
    let mut frame = GeometryFrame::with_capacity(80);
    if dial_radius <= 0.0 {
        return frame;
    }

    let metrics = if style.show_numbers {
        *numeral_metrics
    } else {
        FontMetrics::ZERO
    };

    frame.push(Primitive::FillCircle {
        cx: 0.0,
        cy: 0.0,
        radius: dial_radius,
        role: PaintRole::Face,
    });

    if style.show_thick_markers {
        draw_thick_markers(&mut frame, style, dial_radius);
    }
    if style.show_thin_markers {
        draw_thin_markers(&mut frame, style, dial_radius);
    }

    frame.push(Primitive::StrokeCircle {
        cx: 0.0,
        cy: 0.0,
        radius: (dial_radius - style.thin_marker_length).max(0.0),
        role: PaintRole::OuterRim,
    });

    if style.show_numbers {
        draw_numerals(&mut frame, style, dial_radius, &metrics);
    }

    frame.push(Primitive::StrokeCircle {
        cx: 0.0,
        cy: 0.0,
        radius: (dial_radius - style.thick_marker_length - metrics.height() - metrics.bottom)
            .max(0.0),
        role: PaintRole::InnerRim,
    });

    draw_hands(&mut frame, style, sample, dial_radius, &metrics, tracker);

    frame.push(Primitive::FillCircle {
        cx: 0.0,
        cy: 0.0,
        radius: style.center_dot_radius,
        role: PaintRole::CenterDot,
    });

    frame
}

/// Twelve markers at the hour positions, 30° apart
fn draw_thick_markers(frame: &mut GeometryFrame, style: &ClockStyle, radius: f64) {
    let inner = (radius - style.thick_marker_length).max(0.0);
    for degree in (0..360).step_by(30) {
        let radian = degree as f64 * PI / 180.0;
        frame.push(Primitive::Line {
            x0: radius * radian.cos(),
            y0: radius * radian.sin(),
            x1: inner * radian.cos(),
            y1: inner * radian.sin(),
            role: PaintRole::ThickMarker,
        });
    }
}

/// Minute markers at 6° spacing, skipping the hour positions: 48 total
fn draw_thin_markers(frame: &mut GeometryFrame, style: &ClockStyle, radius: f64) {
    let inner = (radius - style.thin_marker_length).max(0.0);
    for degree in (0..360).step_by(6) {
        if degree % 30 == 0 {
            continue;
        }
        let radian = degree as f64 * PI / 180.0;
        frame.push(Primitive::Line {
            x0: radius * radian.cos(),
            y0: radius * radian.sin(),
            x1: inner * radian.cos(),
            y1: inner * radian.sin(),
            role: PaintRole::ThinMarker,
        });
    }
}

/// Twelve labels, starting at −60° (one o'clock) and proceeding
/// clockwise, centered inside the thick-marker band
fn draw_numerals(frame: &mut GeometryFrame, style: &ClockStyle, radius: f64, metrics: &FontMetrics) {
    let ring = (radius - style.thick_marker_length - metrics.height() / 2.0).max(0.0);
    // Shift the baseline so the glyph box is vertically centered on the ring
    let baseline_shift = (metrics.ascent - metrics.descent) / 2.0;
    for (index, degree) in (-60..300).step_by(30).enumerate() {
        let radian = degree as f64 * PI / 180.0;
        let text = match style.numeral_style {
            NumeralStyle::Arabic => ARABIC_NUMERALS[index],
            NumeralStyle::Roman => ROMAN_NUMERALS[index],
        };
        frame.push(Primitive::Text {
            text,
            x: ring * radian.cos(),
            y: ring * radian.sin() + baseline_shift,
            role: PaintRole::Numeral,
        });
    }
}

/// Hour, minute, and (optionally) sweep hand, each a segment from the
/// dial center; tips feed the dirty-region tracker
fn draw_hands(
    frame: &mut GeometryFrame,
    style: &ClockStyle,
    sample: &TimeSample,
    radius: f64,
    metrics: &FontMetrics,
    tracker: &mut DirtyRegionTracker,
) {
    let hour_radius = (radius
        - style.thick_marker_length
        - metrics.height()
        - metrics.bottom
        - style.hand_margin)
        .max(0.0);
    let minute_radius = (radius - style.thin_marker_length - style.hand_margin).max(0.0);

    draw_hand(
        frame,
        tracker,
        hour_radius,
        hour_hand_angle(sample),
        PaintRole::HourHand,
    );
    draw_hand(
        frame,
        tracker,
        minute_radius,
        minute_hand_angle(sample),
        PaintRole::MinuteHand,
    );
    if style.show_sweep_hand {
        draw_hand(
            frame,
            tracker,
            radius,
            sweep_hand_angle(sample),
            PaintRole::SweepHand,
        );
    }
}

fn draw_hand(
    frame: &mut GeometryFrame,
    tracker: &mut DirtyRegionTracker,
    length: f64,
    angle: f64,
    role: PaintRole,
) {
    let tip_x = length * angle.cos();
    let tip_y = length * angle.sin();
    frame.push(Primitive::Line {
        x0: 0.0,
        y0: 0.0,
        x1: tip_x,
        y1: tip_y,
        role,
    });
    tracker.accumulate(tip_x, tip_y);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn test_metrics() -> FontMetrics {
        FontMetrics {
            ascent: 14.0,
            descent: 4.0,
            bottom: 4.0,
        }
    }

    fn render(style: &ClockStyle, sample: &TimeSample) -> (GeometryFrame, DirtyRegionTracker) {
        let mut tracker = DirtyRegionTracker::new();
        let frame = render_clock_face(style, sample, 100.0, &test_metrics(), &mut tracker);
        (frame, tracker)
    }

    fn hand_tip(frame: &GeometryFrame, role: PaintRole) -> (f64, f64) {
        frame
            .iter()
            .find_map(|p| match *p {
                Primitive::Line {
                    x1, y1, role: r, ..
                } if r == role => Some((x1, y1)),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no {:?} segment in frame", role))
    }

    fn labels(frame: &GeometryFrame) -> Vec<&'static str> {
        frame
            .iter()
            .filter_map(|p| match *p {
                Primitive::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_three_oclock_hand_angles_are_exact() {
        let style = ClockStyle::default();
        let sample = TimeSample::from_clock(3, 0, 0, 0);
        let (frame, _) = render(&style, &sample);

        // Hour hand due right: radius 100-20-18-4-5 = 53 along +x
        let (hx, hy) = hand_tip(&frame, PaintRole::HourHand);
        assert!((hx - 53.0).abs() < EPS);
        assert!(hy.abs() < EPS);

        // Minute hand straight up: radius 100-10-5 = 85 along -y
        let (mx, my) = hand_tip(&frame, PaintRole::MinuteHand);
        assert!(mx.abs() < EPS);
        assert!((my + 85.0).abs() < EPS);

        // Sweep hand at millisecond 0 also points straight up, full radius
        let (sx, sy) = hand_tip(&frame, PaintRole::SweepHand);
        assert!(sx.abs() < EPS);
        assert!((sy + 100.0).abs() < EPS);
    }

    #[test]
    fn test_twelve_oclock_hour_and_minute_hands_overlap() {
        let sample = TimeSample::from_clock(12, 0, 0, 0);
        assert!((hour_hand_angle(&sample) + PI / 2.0).abs() < EPS);
        assert!((minute_hand_angle(&sample) + PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_hour_hand_angle_is_monotone_over_a_cycle() {
        let mut last = f64::NEG_INFINITY;
        for hour in 0..12 {
            for minute in (0..60).step_by(5) {
                for second in (0..60).step_by(15) {
                    let sample = TimeSample::from_clock(hour, minute, second, 0);
                    let angle = hour_hand_angle(&sample);
                    assert!(
                        angle >= last,
                        "hour angle went backwards at {}:{}:{}",
                        hour,
                        minute,
                        second
                    );
                    last = angle;
                }
            }
        }
    }

    #[test]
    fn test_sweep_hand_turns_once_per_minute() {
        let start = TimeSample {
            millisecond: 0.0,
            ..TimeSample::default()
        };
        let end = TimeSample {
            millisecond: 60_000.0,
            ..TimeSample::default()
        };
        assert!((sweep_hand_angle(&end) - sweep_hand_angle(&start) - 2.0 * PI).abs() < EPS);
        // Quarter past the minute points due right
        let quarter = TimeSample {
            millisecond: 15_000.0,
            ..TimeSample::default()
        };
        assert!(sweep_hand_angle(&quarter).abs() < EPS);
    }

    #[test]
    fn test_arabic_labels_run_one_to_twelve() {
        let style = ClockStyle::default();
        let (frame, _) = render(&style, &TimeSample::default());
        assert_eq!(
            labels(&frame),
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
        );
    }

    #[test]
    fn test_roman_labels_end_at_twelve() {
        let style = ClockStyle {
            numeral_style: NumeralStyle::Roman,
            ..ClockStyle::default()
        };
        let (frame, _) = render(&style, &TimeSample::default());
        let labels = labels(&frame);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Ⅰ");
        assert_eq!(labels[11], "Ⅻ");
    }

    #[test]
    fn test_exactly_48_thin_markers() {
        let style = ClockStyle::default();
        let (frame, _) = render(&style, &TimeSample::default());
        let thin = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Line { role, .. } if *role == PaintRole::ThinMarker))
            .count();
        assert_eq!(thin, 48);
        let thick = frame
            .iter()
            .filter(
                |p| matches!(p, Primitive::Line { role, .. } if *role == PaintRole::ThickMarker),
            )
            .count();
        assert_eq!(thick, 12);
    }

    #[test]
    fn test_face_first_center_dot_last() {
        let style = ClockStyle::default();
        let (frame, _) = render(&style, &TimeSample::default());
        assert!(matches!(
            frame.iter().next(),
            Some(Primitive::FillCircle {
                role: PaintRole::Face,
                ..
            })
        ));
        assert!(matches!(
            frame.iter().last(),
            Some(Primitive::FillCircle {
                role: PaintRole::CenterDot,
                ..
            })
        ));
    }

    #[test]
    fn test_degenerate_radius_yields_empty_frame() {
        let style = ClockStyle::default();
        let mut tracker = DirtyRegionTracker::new();
        let frame =
            render_clock_face(&style, &TimeSample::default(), 0.0, &test_metrics(), &mut tracker);
        assert!(frame.is_empty());
        assert_eq!(tracker.peek(), crate::render::DirtyRect::ZERO);

        let frame = render_clock_face(
            &style,
            &TimeSample::default(),
            -5.0,
            &test_metrics(),
            &mut tracker,
        );
        assert!(frame.is_empty());
    }

    #[test]
    fn test_tracker_tightly_bounds_hand_tips_at_three_oclock() {
        let style = ClockStyle::default();
        let sample = TimeSample::from_clock(3, 0, 0, 0);
        let (frame, tracker) = render(&style, &sample);
        let rect = tracker.peek();

        let (hx, _) = hand_tip(&frame, PaintRole::HourHand);
        let (_, sy) = hand_tip(&frame, PaintRole::SweepHand);
        assert!((rect.right - hx).abs() < EPS);
        assert!((rect.top - sy).abs() < EPS);
        assert!(rect.left.abs() < EPS);
        assert!(rect.bottom.abs() < EPS);
    }

    #[test]
    fn test_disabled_numerals_collapse_inner_rim() {
        let style = ClockStyle {
            show_numbers: false,
            ..ClockStyle::default()
        };
        let (frame, _) = render(&style, &TimeSample::default());
        let inner = frame
            .iter()
            .find_map(|p| match *p {
                Primitive::StrokeCircle { radius, role, .. } if role == PaintRole::InnerRim => {
                    Some(radius)
                }
                _ => None,
            })
            .unwrap();
        // Metrics are ignored: the rim sits at the thick-marker depth
        assert!((inner - 80.0).abs() < EPS);
        assert!(labels(&frame).is_empty());
    }

    #[test]
    fn test_sweep_hand_can_be_hidden() {
        let style = ClockStyle {
            show_sweep_hand: false,
            ..ClockStyle::default()
        };
        let (frame, tracker) = render(&style, &TimeSample::from_clock(3, 0, 0, 0));
        assert!(!frame
            .iter()
            .any(|p| matches!(p, Primitive::Line { role, .. } if *role == PaintRole::SweepHand)));
        // Only hour and minute tips accumulated
        assert!((tracker.peek().top + 85.0).abs() < EPS);
    }

    #[test]
    fn test_full_frame_primitive_budget() {
        let style = ClockStyle::default();
        let (frame, _) = render(&style, &TimeSample::default());
        // face + 12 thick + 48 thin + outer rim + 12 numerals + inner rim
        // + 3 hands + center dot
        assert_eq!(frame.len(), 79);
    }
}
