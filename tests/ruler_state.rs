use ruler::data::angle::Quadrant;
use ruler::data::geometry::{Point, Rect, Size};
use ruler::data::ruler::*;
use ruler::data::units::{Edge, Orientation, Units, ZeroPoint};

#[test]
fn default_ruler_is_horizontal_with_zero_on_the_left() {
    let s = RulerState::default();
    assert_eq!((s.width, s.height), (800.0, 80.0));
    assert_eq!(s.active_edge, Edge::Top);
    assert_eq!(s.origin, Point::new(200.0, 400.0));
    assert_eq!(s.resize_border, ResizeBorder::new(RESIZE_GRIP, 0.0, RESIZE_GRIP, 0.0));
    assert_eq!(s.units, Units::Dip);
}

#[test]
fn flip_moves_ticks_and_origin_to_the_bottom() {
    let mut s = RulerState::default();
    s.set_flip(true);
    assert_eq!(s.active_edge, Edge::Bottom);
    assert_eq!(s.origin, Point::new(200.0, 480.0));
}

#[test]
fn far_zero_point_moves_origin_to_the_right() {
    let mut s = RulerState::default();
    s.set_zero_point(ZeroPoint::Far);
    assert_eq!(s.origin, Point::new(1000.0, 400.0));
}

#[test]
fn vertical_swaps_axes() {
    let mut s = RulerState::default();
    s.set_orientation(Orientation::Vertical);
    assert_eq!((s.width, s.height), (80.0, 800.0));
    assert_eq!(s.active_edge, Edge::Right);
    assert_eq!(s.origin, Point::new(280.0, 400.0));
    assert_eq!(s.resize_border, ResizeBorder::new(0.0, RESIZE_GRIP, 0.0, RESIZE_GRIP));

    s.set_flip(true);
    assert_eq!(s.active_edge, Edge::Left);
    assert_eq!(s.origin, Point::new(200.0, 400.0));

    s.set_zero_point(ZeroPoint::Far);
    assert_eq!(s.origin, Point::new(200.0, 1200.0));
}

#[test]
fn width_and_height_map_to_long_and_short_axis() {
    let mut s = RulerState::default();
    s.set_width(500.0);
    assert_eq!(s.long_axis, 500.0);
    s.set_height(60.0);
    assert_eq!(s.short_axis, 60.0);

    s.set_orientation(Orientation::Vertical);
    s.set_height(700.0);
    assert_eq!(s.long_axis, 700.0);
    s.set_size(Size::new(5.0, 300.0));
    assert_eq!(s.short_axis, MIN_AXIS);
    assert_eq!((s.width, s.height), (MIN_AXIS, 300.0));
}

#[test]
fn with_rect_picks_long_axis_by_orientation() {
    let s = RulerState::with_rect(Orientation::Vertical, Rect::new(10.0, 20.0, 80.0, 600.0));
    assert_eq!((s.long_axis, s.short_axis), (600.0, 80.0));
    assert_eq!(s.window_rect(), Rect::new(10.0, 20.0, 80.0, 600.0));
}

#[test]
fn nudge_and_grow() {
    let mut s = RulerState::default();
    s.nudge(0.5, -5.0);
    assert_eq!((s.left, s.top), (200.5, 395.0));
    assert_eq!(s.origin, Point::new(200.5, 395.0));
    s.grow(100.0);
    assert_eq!(s.width, 900.0);
    s.grow(-10_000.0);
    assert_eq!(s.long_axis, MIN_AXIS);
}

#[test]
fn cursor_updates_track_point() {
    let mut s = RulerState::default();
    assert!(s.update_cursor(Point::new(300.0, 390.0)));
    assert_eq!(s.track_point, Point::new(100.0, 10.0));
    assert_eq!(s.mouse_point, Point::new(300.0, 390.0));
    assert!(!s.update_cursor(Point::new(300.0, 390.0)));
}

#[test]
fn markers_are_placed_at_the_track_position() {
    let mut s = RulerState::default();
    s.update_cursor(Point::new(300.0, 390.0));
    s.set_marker();
    s.set_marker();
    assert_eq!(s.markers, vec![100.0]);
    s.update_cursor(Point::new(450.0, 390.0));
    s.set_marker();
    assert_eq!(s.markers, vec![100.0, 250.0]);
    assert_eq!(s.remove_marker(), Some(250.0));
    s.clear_markers();
    assert!(s.markers.is_empty());
    assert_eq!(s.remove_marker(), None);
}

#[test]
fn no_marker_at_the_zero_edge() {
    let mut s = RulerState::default();
    s.update_cursor(Point::new(100.0, 390.0));
    s.set_marker();
    assert!(s.markers.is_empty());
}

#[test]
fn arc_uses_origin_and_mouse() {
    let mut s = RulerState::default();
    s.update_cursor(Point::new(190.0, 390.0));
    let arc = s.arc();
    assert_eq!(arc.quadrant, Quadrant::TopLeft);
    assert!((arc.sweep_degrees - 135.0).abs() < 1e-9);
}

#[test]
fn resize_border_hits_only_the_ends() {
    let s = RulerState::default();
    let size = s.size();
    assert_eq!(s.resize_border.hit(size, Point::new(2.0, 40.0)), Some(Edge::Left));
    assert_eq!(s.resize_border.hit(size, Point::new(798.0, 40.0)), Some(Edge::Right));
    assert_eq!(s.resize_border.hit(size, Point::new(400.0, 1.0)), None);
}

#[test]
fn scale_params_follow_state() {
    let mut s = RulerState::default();
    s.set_units(Units::Cm);
    s.set_flip(true);
    let p = s.scale_params();
    assert_eq!(p.units, Units::Cm);
    assert!(p.flip);
    assert_eq!(p.length(), 800.0);
}
