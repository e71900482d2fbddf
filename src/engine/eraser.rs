use log::debug;

use crate::canvas::CanvasHistory;
use crate::geometry::Point;

/// Removes committed ink within a fixed radius of the erase position.
#[derive(Debug, Clone, Copy)]
pub struct Eraser {
    radius: i32,
}

impl Eraser {
    pub fn new(radius: i32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Delete every committed point within `radius` of `center`. Strokes
    /// left too short to render are dropped from history; survivors keep
    /// their reduced sequence, so the gap is rendered as one connected
    /// polyline. Re-running with the same center and radius is a no-op.
    ///
    /// A radius of zero or less erases nothing.
    pub fn erase(&self, history: &mut CanvasHistory, center: Point) {
        if self.radius <= 0 {
            return;
        }
        let radius_sq = i64::from(self.radius) * i64::from(self.radius);

        // Back to front so removals do not shift indices still to visit.
        for index in (0..history.len()).rev() {
            let stroke = &history.strokes()[index];
            let kept: Vec<Point> = stroke
                .points()
                .iter()
                .copied()
                .filter(|point| point.distance_sq(center) > radius_sq)
                .collect();
            if kept.len() == stroke.len() {
                continue;
            }
            debug!(
                "erase at ({},{}): stroke {} reduced {} -> {} points",
                center.x,
                center.y,
                index,
                stroke.len(),
                kept.len()
            );
            history.erase_rewrite(index, kept);
        }
    }
}
