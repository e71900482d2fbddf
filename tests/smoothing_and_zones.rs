use aircanvas::zones::LayoutError;
use aircanvas::{ColorId, Point, PointerSmoother, Zone, ZoneAction, ZoneLayout, ZoneRect};

#[test]
fn smoothing_converges_on_identical_input() {
    let mut smoother = PointerSmoother::new(5);
    let mut out = Point::new(0, 0);
    for _ in 0..5 {
        out = smoother.push_sample(Point::new(7, 9));
    }
    assert_eq!(out, Point::new(7, 9));

    // Staying put keeps returning the exact point.
    for _ in 0..10 {
        assert_eq!(smoother.push_sample(Point::new(7, 9)), Point::new(7, 9));
    }
}

#[test]
fn smoothing_averages_the_window() {
    let mut smoother = PointerSmoother::new(5);
    assert_eq!(smoother.push_sample(Point::new(0, 0)), Point::new(0, 0));
    // Mean of (0,0) and (3,1) truncates to (1,0).
    assert_eq!(smoother.push_sample(Point::new(3, 1)), Point::new(1, 0));
}

#[test]
fn smoothing_depends_only_on_the_window() {
    // After capacity further samples, an old outlier has no influence.
    let mut with_outlier = PointerSmoother::new(3);
    with_outlier.push_sample(Point::new(1000, 1000));

    let mut without = PointerSmoother::new(3);

    let mut a = Point::new(0, 0);
    let mut b = Point::new(0, 0);
    for i in 0..3 {
        let sample = Point::new(10 + i, 20 + i);
        a = with_outlier.push_sample(sample);
        b = without.push_sample(sample);
    }
    assert_eq!(a, b);
}

#[test]
fn smoothing_capacity_is_at_least_one() {
    let mut smoother = PointerSmoother::new(0);
    assert_eq!(smoother.capacity(), 1);
    assert_eq!(smoother.push_sample(Point::new(5, 5)), Point::new(5, 5));
    assert_eq!(smoother.push_sample(Point::new(9, 1)), Point::new(9, 1));
}

#[test]
fn first_zone_in_order_wins_on_overlap() {
    let layout = ZoneLayout::new(vec![
        Zone::new(ZoneRect::new(0, 0, 100, 100), ZoneAction::Undo),
        Zone::new(
            ZoneRect::new(0, 0, 100, 100),
            ZoneAction::SelectColor(ColorId::Blue),
        ),
    ])
    .unwrap();

    assert_eq!(layout.hit_test(Point::new(50, 50)), Some(ZoneAction::Undo));
}

#[test]
fn zone_bounds_are_inclusive() {
    let layout = ZoneLayout::new(vec![Zone::new(
        ZoneRect::new(10, 20, 30, 40),
        ZoneAction::Clear,
    )])
    .unwrap();

    assert_eq!(layout.hit_test(Point::new(10, 20)), Some(ZoneAction::Clear));
    assert_eq!(layout.hit_test(Point::new(30, 40)), Some(ZoneAction::Clear));
    assert_eq!(layout.hit_test(Point::new(9, 20)), None);
    assert_eq!(layout.hit_test(Point::new(30, 41)), None);
}

#[test]
fn default_layout_has_toolbar_and_palette() {
    let layout = ZoneLayout::default();

    assert_eq!(layout.hit_test(Point::new(300, 50)), Some(ZoneAction::Undo));
    assert_eq!(layout.hit_test(Point::new(400, 50)), Some(ZoneAction::Clear));
    assert_eq!(
        layout.hit_test(Point::new(100, 700)),
        Some(ZoneAction::SelectColor(ColorId::Red))
    );
    assert_eq!(
        layout.hit_test(Point::new(430, 700)),
        Some(ZoneAction::SelectColor(ColorId::Black))
    );
    // The middle of the frame is dead space.
    assert_eq!(layout.hit_test(Point::new(640, 360)), None);
}

#[test]
fn empty_layout_never_hits() {
    let layout = ZoneLayout::empty();
    assert_eq!(layout.hit_test(Point::new(0, 0)), None);
}

#[test]
fn layout_parses_from_json() {
    let json = r#"{
        "zones": [
            {"rect": {"x1": 0, "y1": 0, "x2": 10, "y2": 10}, "action": "undo"},
            {"rect": {"x1": 0, "y1": 20, "x2": 10, "y2": 30},
             "action": {"select_color": "green"}}
        ]
    }"#;

    let layout = ZoneLayout::from_json(json).unwrap();
    assert_eq!(layout.zones().len(), 2);
    assert_eq!(layout.hit_test(Point::new(5, 5)), Some(ZoneAction::Undo));
    assert_eq!(
        layout.hit_test(Point::new(5, 25)),
        Some(ZoneAction::SelectColor(ColorId::Green))
    );
}

#[test]
fn inverted_rect_is_rejected() {
    let result = ZoneLayout::new(vec![Zone::new(
        ZoneRect::new(50, 0, 10, 10),
        ZoneAction::Undo,
    )]);
    assert!(matches!(
        result,
        Err(LayoutError::InvertedRect { index: 0, .. })
    ));

    let json = r#"{"zones": [{"rect": {"x1": 50, "y1": 0, "x2": 10, "y2": 10}, "action": "undo"}]}"#;
    assert!(ZoneLayout::from_json(json).is_err());
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        ZoneLayout::from_json("{not json"),
        Err(LayoutError::Parse(_))
    ));
}
