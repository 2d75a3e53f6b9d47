//! Minimal-repaint bookkeeping
//!
//! Between catch-up frames only the hands move, so the region needing
//! repaint is the box spanned by the hand tips (the hands share the dial
//! center, which the zero rect always contains). The tracker accumulates
//! tip positions while a frame renders and is drained by the driver when
//! it decides the repaint scope.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the dial's local coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DirtyRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DirtyRect {
    pub const ZERO: DirtyRect = DirtyRect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Expand to include the point (x, y)
    pub fn include(&mut self, x: f64, y: f64) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }

    /// Grow all four edges outward by `margin`
    pub fn expand(&self, margin: f64) -> DirtyRect {
        DirtyRect {
            left: self.left - margin,
            top: self.top - margin,
            right: self.right + margin,
            bottom: self.bottom + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Accumulates the bounding box of hand tips drawn in the current frame
#[derive(Debug, Clone, Default)]
pub struct DirtyRegionTracker {
    rect: DirtyRect,
}

impl DirtyRegionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hand tip position
    pub fn accumulate(&mut self, x: f64, y: f64) {
        self.rect.include(x, y);
    }

    /// Current rect without draining it
    pub fn peek(&self) -> DirtyRect {
        self.rect
    }

    /// Read the accumulated rect and reset to the zero state for the
    /// next frame
    pub fn take(&mut self) -> DirtyRect {
        std::mem::take(&mut self.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_rect() {
        let tracker = DirtyRegionTracker::new();
        assert_eq!(tracker.peek(), DirtyRect::ZERO);
    }

    #[test]
    fn test_accumulate_spans_points_and_origin() {
        let mut tracker = DirtyRegionTracker::new();
        tracker.accumulate(30.0, -40.0);
        tracker.accumulate(-10.0, 5.0);
        let rect = tracker.peek();
        assert_eq!(rect.left, -10.0);
        assert_eq!(rect.top, -40.0);
        assert_eq!(rect.right, 30.0);
        assert_eq!(rect.bottom, 5.0);
        // The zero start keeps the dial center inside
        assert!(rect.contains(0.0, 0.0));
    }

    #[test]
    fn test_take_drains_and_resets() {
        let mut tracker = DirtyRegionTracker::new();
        tracker.accumulate(12.0, 7.0);
        let rect = tracker.take();
        assert_eq!(rect.right, 12.0);
        assert_eq!(rect.bottom, 7.0);
        assert_eq!(tracker.peek(), DirtyRect::ZERO);
    }

    #[test]
    fn test_expand_grows_every_edge() {
        let mut rect = DirtyRect::ZERO;
        rect.include(10.0, -20.0);
        let grown = rect.expand(3.0);
        assert_eq!(grown.left, -3.0);
        assert_eq!(grown.top, -23.0);
        assert_eq!(grown.right, 13.0);
        assert_eq!(grown.bottom, 3.0);
        assert_eq!(grown.width(), rect.width() + 6.0);
        assert_eq!(grown.height(), rect.height() + 6.0);
    }
}
