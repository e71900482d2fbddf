use log::debug;

use crate::canvas::{CanvasHistory, MIN_STROKE_POINTS};
use crate::color::ColorId;
use crate::geometry::Point;
use crate::stroke::{MutableStroke, Stroke};

/// Segments the smoothed pointer into strokes.
///
/// Two states, Idle and Drawing, represented by the presence of an
/// in-progress stroke. A pointing frame begins or extends the stroke; the
/// first non-pointing frame commits it into history when it has enough
/// points to render, and discards it otherwise. Transitions are acted on
/// the frame they are observed unless a debounce window is configured.
#[derive(Debug)]
pub struct StrokeEngine {
    active_color: ColorId,
    current: Option<MutableStroke>,
    debounce_frames: u32,
    // Pointing value transitions are measured against `settled`; `run`
    // counts how long the opposite value has been observed.
    settled: bool,
    run: u32,
}

impl StrokeEngine {
    pub fn new(debounce_frames: u32) -> Self {
        Self {
            active_color: ColorId::Red,
            current: None,
            debounce_frames,
            settled: false,
            run: 0,
        }
    }

    pub fn active_color(&self) -> ColorId {
        self.active_color
    }

    /// Change the ink used for strokes started after this call. The
    /// in-progress stroke, if any, keeps the color it was created with.
    pub fn set_active_color(&mut self, color: ColorId) {
        if self.active_color != color {
            debug!("active color: {}", color.name());
            self.active_color = color;
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Snapshot of the in-progress stroke for rendering, if any.
    pub fn active_stroke(&self) -> Option<Stroke> {
        self.current.as_ref().map(MutableStroke::to_stroke)
    }

    /// Advance one frame with the stabilized pointer position.
    pub fn update(&mut self, smoothed: Point, pointing: bool, history: &mut CanvasHistory) {
        if self.debounced(pointing) {
            match &mut self.current {
                Some(stroke) => stroke.add_point(smoothed),
                None => {
                    let mut stroke = MutableStroke::new(self.active_color);
                    stroke.add_point(smoothed);
                    self.current = Some(stroke);
                }
            }
        } else if self.current.is_some() {
            self.finish(history);
        }
    }

    /// End the gesture without a new pointer sample, e.g. when the hand
    /// leaves the frame. Commits or discards like an observed
    /// pointing-released frame and resets the debounce window.
    pub fn release(&mut self, history: &mut CanvasHistory) {
        self.settled = false;
        self.run = 0;
        self.finish(history);
    }

    /// Drop the in-progress stroke without committing it. Undo and clear
    /// do this so stale points cannot leak into the next stroke.
    pub fn cancel_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            debug!("cancelled in-progress stroke with {} points", stroke.len());
        }
    }

    fn finish(&mut self, history: &mut CanvasHistory) {
        if let Some(stroke) = self.current.take() {
            if stroke.len() >= MIN_STROKE_POINTS {
                history.commit(stroke.into_stroke_ref());
            } else {
                debug!("discarding {}-point stroke", stroke.len());
            }
        }
    }

    // With a debounce window, a changed value only takes effect once it
    // has been observed for `debounce_frames` consecutive frames.
    fn debounced(&mut self, observed: bool) -> bool {
        if self.debounce_frames == 0 {
            return observed;
        }
        if observed == self.settled {
            self.run = 0;
        } else {
            self.run += 1;
            if self.run >= self.debounce_frames {
                self.settled = observed;
                self.run = 0;
            }
        }
        self.settled
    }
}
