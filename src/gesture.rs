//! Landmark comparisons for deriving the per-frame gesture booleans.
//!
//! Callers that receive raw hand landmarks can use these helpers to fill
//! in [`crate::FrameInput`]. Canvas coordinates grow downward, so "above"
//! means a smaller `y`.

use crate::geometry::Point;

/// Vertical margin the thumb must clear above the finger base before the
/// erase gesture is recognized, keeping it distinct from ordinary pointing.
pub const ERASE_MARGIN: i32 = 40;

/// A fingertip extended above its base landmark reads as pointing.
pub fn is_pointing(fingertip: Point, finger_base: Point) -> bool {
    fingertip.y < finger_base.y
}

/// The thumb tip raised above the finger base by more than `margin` reads
/// as the erase gesture.
pub fn is_erasing(thumb_tip: Point, finger_base: Point, margin: i32) -> bool {
    thumb_tip.y < finger_base.y - margin
}
