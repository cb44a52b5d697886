//! Touch swipe detection.
//!
//! A [`SwipeTracker`] records where a touch started and where it was last
//! seen, and classifies the gesture when the touch ends. It is reset after
//! every gesture regardless of the outcome.

use crate::config::swipe;

/// Direction a completed swipe asks the widget to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left.
    Next,
    /// Finger travelled left-to-right.
    Prev,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Tracks a single touch gesture.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    start: Option<Point>,
    last: Point,
    threshold: f64,
    max_vertical: Option<f64>,
}

impl SwipeTracker {
    /// Tracker that only looks at horizontal travel.
    pub fn horizontal() -> Self {
        Self {
            start: None,
            last: Point::default(),
            threshold: swipe::THRESHOLD_PX,
            max_vertical: None,
        }
    }

    /// Tracker that also rejects gestures with too much vertical travel,
    /// so page scrolling is not mistaken for a swipe.
    pub fn with_vertical_limit(max_vertical: f64) -> Self {
        Self {
            max_vertical: Some(max_vertical),
            ..Self::horizontal()
        }
    }

    /// Whether a touch is in progress.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Records the touch-start position.
    pub fn begin(&mut self, x: f64, y: f64) {
        let point = Point { x, y };
        self.start = Some(point);
        self.last = point;
    }

    /// Records an intermediate position. Ignored when no touch is active.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.start.is_some() {
            self.last = Point { x, y };
        }
    }

    /// Records the touch-end position and classifies the gesture.
    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        self.move_to(x, y);
        self.finish()
    }

    /// Classifies the gesture from the last recorded position and resets.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let last = std::mem::take(&mut self.last);

        let dx = start.x - last.x;
        let dy = (start.y - last.y).abs();

        if dx.abs() <= self.threshold {
            return None;
        }
        if let Some(max) = self.max_vertical
            && dy >= max
        {
            return None;
        }

        Some(if dx > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        })
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::horizontal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_is_next() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.begin(300.0, 0.0);
        assert_eq!(tracker.end(200.0, 0.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_swipe_right_is_prev() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.begin(100.0, 0.0);
        assert_eq!(tracker.end(200.0, 0.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn test_below_threshold_ignored() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.begin(100.0, 0.0);
        assert_eq!(tracker.end(150.0, 0.0), None);
    }

    #[test]
    fn test_tap_without_move_is_not_a_swipe() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.begin(400.0, 10.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_vertical_limit() {
        let mut tracker = SwipeTracker::with_vertical_limit(100.0);
        tracker.begin(300.0, 0.0);
        assert_eq!(tracker.end(100.0, 150.0), None);

        tracker.begin(300.0, 0.0);
        assert_eq!(tracker.end(100.0, 99.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_reset_after_gesture() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.begin(300.0, 0.0);
        tracker.move_to(100.0, 0.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.finish(), Some(SwipeDirection::Next));
        assert!(!tracker.is_active());
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_move_without_begin_ignored() {
        let mut tracker = SwipeTracker::horizontal();
        tracker.move_to(10.0, 0.0);
        assert!(!tracker.is_active());
        assert_eq!(tracker.end(500.0, 0.0), None);
    }
}
