use std::sync::Arc;

use crate::color::ColorId;
use crate::geometry::Point;

// Immutable stroke for sharing between history and render snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point>,
    color: ColorId,
}

// Mutable stroke owned by the engine while the gesture is held
#[derive(Debug, Clone)]
pub struct MutableStroke {
    points: Vec<Point>,
    color: ColorId,
}

// Reference-counted alias so per-frame snapshots stay cheap
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: ColorId, points: Vec<Point>) -> Self {
        Self { points, color }
    }

    pub fn new_ref(color: ColorId, points: Vec<Point>) -> StrokeRef {
        Arc::new(Self::new(color, points))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MutableStroke {
    /// Start an empty stroke in the given color. The color is fixed for
    /// the stroke's lifetime; later palette changes affect new strokes only.
    pub fn new(color: ColorId) -> Self {
        Self {
            points: Vec::new(),
            color,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // Snapshot for previewing the stroke while it is still being drawn
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.points.clone())
    }

    // Consume into an immutable committed stroke
    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke::new(self.color, self.points))
    }
}
