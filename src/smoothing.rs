use std::collections::VecDeque;

use crate::geometry::Point;

/// Samples averaged per frame when no other window size is configured.
/// Five samples damp detector jitter without visible pointer lag at
/// webcam frame rates.
pub const DEFAULT_WINDOW: usize = 5;

/// Rolling mean over the most recent raw pointer samples.
///
/// The window is a bounded FIFO: pushing a sample past capacity evicts the
/// oldest one, so the smoother never needs an explicit reset.
#[derive(Debug)]
pub struct PointerSmoother {
    window: VecDeque<Point>,
    capacity: usize,
}

impl PointerSmoother {
    /// `capacity` is clamped to at least one sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `raw` and return the componentwise mean of the window,
    /// truncated to integer pixels.
    pub fn push_sample(&mut self, raw: Point) -> Point {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(raw);

        let n = self.window.len() as i64;
        let (sum_x, sum_y) = self
            .window
            .iter()
            .fold((0i64, 0i64), |(sx, sy), p| (sx + i64::from(p.x), sy + i64::from(p.y)));
        Point::new((sum_x / n) as i32, (sum_y / n) as i32)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PointerSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
