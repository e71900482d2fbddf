mod eraser;
mod stroke_engine;

pub use eraser::Eraser;
pub use stroke_engine::StrokeEngine;

use crate::canvas::CanvasHistory;
use crate::color::ColorId;
use crate::config::EngineConfig;
use crate::input::FrameInput;
use crate::smoothing::PointerSmoother;
use crate::stroke::{Stroke, StrokeRef};
use crate::zones::{ZoneAction, ZoneLayout};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Committed strokes, oldest first. Shared `Arc`s, so the snapshot
    /// is cheap to take every frame.
    pub strokes: Vec<StrokeRef>,
    /// The stroke being drawn this frame, if any.
    pub active_stroke: Option<Stroke>,
    pub active_color: ColorId,
}

/// The per-frame drawing pipeline over one owned canvas.
///
/// Each tick runs, in order: pointer smoothing, zone dispatch, the stroke
/// machine, and erasure. All of it is synchronous and single-threaded;
/// the caller drives one tick per captured video frame. For a canvas
/// shared by several tracked hands, give each hand its own engine and
/// route history mutations through [`crate::SharedHistory`].
#[derive(Debug)]
pub struct CanvasEngine {
    smoother: PointerSmoother,
    layout: ZoneLayout,
    strokes: StrokeEngine,
    eraser: Eraser,
    history: CanvasHistory,
}

impl CanvasEngine {
    pub fn new(config: EngineConfig, layout: ZoneLayout) -> Self {
        Self {
            smoother: PointerSmoother::new(config.smoothing_window),
            layout,
            strokes: StrokeEngine::new(config.debounce_frames),
            eraser: Eraser::new(config.erase_radius),
            history: CanvasHistory::new(),
        }
    }

    pub fn history(&self) -> &CanvasHistory {
        &self.history
    }

    pub fn active_color(&self) -> ColorId {
        self.strokes.active_color()
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Advance one captured frame.
    pub fn on_frame(&mut self, input: &FrameInput) -> RenderState {
        let smoothed = self.smoother.push_sample(input.pointer);

        if let Some(action) = self.layout.hit_test(smoothed) {
            self.apply_zone(action);
        }

        self.strokes.update(smoothed, input.pointing, &mut self.history);

        if input.erasing {
            if let Some(thumb) = input.thumb {
                self.eraser.erase(&mut self.history, thumb);
            }
        }

        self.render_state()
    }

    /// Tick for a frame with no detected hand. Both gestures read as
    /// released: a mid-air stroke commits (or is discarded) exactly as if
    /// a pointing-released frame had been observed, and the smoothing
    /// window is left untouched.
    pub fn on_hand_lost(&mut self) -> RenderState {
        self.strokes.release(&mut self.history);
        self.render_state()
    }

    fn apply_zone(&mut self, action: ZoneAction) {
        match action {
            ZoneAction::Undo => {
                if self.history.undo().is_some() {
                    self.strokes.cancel_stroke();
                }
            }
            ZoneAction::Clear => {
                self.history.clear();
                self.strokes.cancel_stroke();
            }
            ZoneAction::SelectColor(color) => self.strokes.set_active_color(color),
        }
    }

    fn render_state(&self) -> RenderState {
        RenderState {
            strokes: self.history.snapshot(),
            active_stroke: self.strokes.active_stroke(),
            active_color: self.strokes.active_color(),
        }
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), ZoneLayout::default())
    }
}
