#![warn(clippy::all, rust_2018_idioms)]

use aircanvas::{CanvasEngine, FrameInput, Point, gesture};

/// Replays a short scripted hand session against the engine and prints
/// the resulting canvas. Stands in for the camera + pose pipeline when
/// exercising the engine from a terminal.
fn main() {
    env_logger::init();

    let mut engine = CanvasEngine::default();

    // A diagonal stroke in the default red.
    for i in 0..30 {
        engine.on_frame(&FrameInput::draw(Point::new(500 + i * 8, 300 + i * 4)));
    }
    engine.on_frame(&FrameInput::hover(Point::new(740, 420)));
    report("after first stroke", &engine);

    // Dwell on the green picker, then draw a vertical stroke.
    for _ in 0..5 {
        engine.on_frame(&FrameInput::hover(Point::new(210, 690)));
    }
    for i in 0..20 {
        engine.on_frame(&FrameInput::draw(Point::new(600, 200 + i * 10)));
    }
    engine.on_frame(&FrameInput::hover(Point::new(600, 400)));
    report("after color change and second stroke", &engine);

    // Sweep the raised thumb across the first stroke, deriving the erase
    // gesture from landmark positions the way a pose-driven caller would.
    for i in 0..12 {
        let thumb = Point::new(520 + i * 20, 340);
        let finger_base = Point::new(520 + i * 20, 420);
        let input = if gesture::is_erasing(thumb, finger_base, gesture::ERASE_MARGIN) {
            FrameInput::erase(Point::new(520 + i * 20, 420), thumb)
        } else {
            FrameInput::hover(Point::new(520 + i * 20, 420))
        };
        engine.on_frame(&input);
    }
    report("after erasing", &engine);

    // Dwell on the undo zone; each frame inside it walks history back one
    // stroke, so a short dwell empties this small canvas.
    for _ in 0..5 {
        engine.on_frame(&FrameInput::hover(Point::new(300, 50)));
    }
    let state = engine.on_hand_lost();
    report("after undo dwell", &engine);

    println!(
        "session done: {} strokes, active color {}",
        state.strokes.len(),
        state.active_color.name()
    );
}

fn report(label: &str, engine: &CanvasEngine) {
    println!(
        "{label}: {} committed strokes, active color {}",
        engine.history().len(),
        engine.active_color().name()
    );
    for (i, stroke) in engine.history().strokes().iter().enumerate() {
        println!(
            "  stroke {i}: {} points, {}",
            stroke.len(),
            stroke.color().name()
        );
    }
}
