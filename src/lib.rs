#![warn(clippy::all, rust_2018_idioms)]

pub mod canvas;
pub mod color;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod shared;
pub mod smoothing;
pub mod stroke;
pub mod zones;

pub use canvas::CanvasHistory;
pub use color::ColorId;
pub use config::EngineConfig;
pub use engine::{CanvasEngine, Eraser, RenderState, StrokeEngine};
pub use geometry::{Point, ZoneRect};
pub use input::FrameInput;
pub use shared::SharedHistory;
pub use smoothing::PointerSmoother;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
pub use zones::{Zone, ZoneAction, ZoneLayout};
