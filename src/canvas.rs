use log::debug;

use crate::geometry::Point;
use crate::stroke::{Stroke, StrokeRef};

/// Committed strokes never hold fewer points than this; shorter ones are
/// discarded at commit time and dropped by erase rewrites.
pub const MIN_STROKE_POINTS: usize = 2;

/// The ordered collection of committed strokes, oldest first.
///
/// `CanvasHistory` is the sole owner of finished ink. Everything that
/// changes it goes through the operations below, so a render snapshot
/// taken between frames is always consistent.
#[derive(Debug, Default)]
pub struct CanvasHistory {
    strokes: Vec<StrokeRef>,
}

impl CanvasHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke. Callers uphold the minimum-length
    /// invariant; the stroke machine never commits anything shorter.
    pub fn commit(&mut self, stroke: StrokeRef) {
        debug_assert!(stroke.len() >= MIN_STROKE_POINTS);
        debug!(
            "committed {} stroke with {} points",
            stroke.color().name(),
            stroke.len()
        );
        self.strokes.push(stroke);
    }

    /// Remove the most recently committed stroke, if any. Single-level:
    /// repeated calls walk back one stroke at a time, and there is no redo.
    pub fn undo(&mut self) -> Option<StrokeRef> {
        let removed = self.strokes.pop();
        if removed.is_some() {
            debug!("undo: {} strokes remain", self.strokes.len());
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.strokes.is_empty() {
            debug!("cleared {} strokes", self.strokes.len());
        }
        self.strokes.clear();
    }

    /// Replace the point sequence of the stroke at `index`, deleting the
    /// stroke outright when too few points remain. Used by the eraser.
    pub fn erase_rewrite(&mut self, index: usize, new_points: Vec<Point>) {
        if index >= self.strokes.len() {
            return;
        }
        if new_points.len() < MIN_STROKE_POINTS {
            self.strokes.remove(index);
        } else {
            let color = self.strokes[index].color();
            self.strokes[index] = Stroke::new_ref(color, new_points);
        }
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Cheap copy for renderers: the strokes themselves are shared.
    pub fn snapshot(&self) -> Vec<StrokeRef> {
        self.strokes.clone()
    }
}
