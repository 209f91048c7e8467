use ruler::data::geometry::{Point, Size};
use ruler::data::scale::*;
use ruler::data::screen::Screen;
use ruler::data::ticks::TickKind;
use ruler::data::units::{Orientation, Units, ZeroPoint};

fn params(units: Units, zero_point: ZeroPoint) -> ScaleParams {
    ScaleParams {
        size: Size::new(800.0, 80.0),
        units,
        orientation: Orientation::Horizontal,
        zero_point,
        flip: false,
    }
}

#[test]
fn dip_scale_has_a_mark_every_five() {
    let marks = params(Units::Dip, ZeroPoint::Near).marks(&Screen::default()).unwrap();
    assert_eq!(marks.len(), 160);
    assert_eq!(marks.iter().filter(|m| m.label.is_some()).count(), 16);

    let first = &marks[0];
    assert_eq!(first.unit_value, 0.0);
    assert_eq!(first.kind, TickKind::Large);
    assert_eq!(first.label.as_deref(), Some("0"));

    let fifty = marks.iter().find(|m| m.unit_value == 50.0).unwrap();
    assert_eq!(fifty.kind, TickKind::Large);
    assert_eq!(fifty.position, 50.0);
    assert_eq!(fifty.label.as_deref(), Some("50"));

    let ten = marks.iter().find(|m| m.unit_value == 10.0).unwrap();
    assert_eq!(ten.kind, TickKind::Medium);
    assert!(ten.label.is_none());
}

#[test]
fn far_zero_point_counts_from_the_right() {
    let marks = params(Units::Dip, ZeroPoint::Far).marks(&Screen::default()).unwrap();
    let fifty = marks.iter().find(|m| m.unit_value == 50.0).unwrap();
    assert_eq!(fifty.position, 750.0);
}

#[test]
fn inch_scale_stops_before_the_end() {
    let p = ScaleParams {
        size: Size::new(96.0, 80.0),
        ..params(Units::Inch, ZeroPoint::Near)
    };
    let marks = p.marks(&Screen::default()).unwrap();
    assert_eq!(marks.len(), 16);
    assert_eq!(marks[8].kind, TickKind::MediumLarge);
    assert_eq!(marks[8].position, 48.0);
    assert_eq!(marks.iter().filter(|m| m.label.is_some()).count(), 1);
}

#[test]
fn cm_scale_marks_each_centimetre_once() {
    let marks = params(Units::Cm, ZeroPoint::Near).marks(&Screen::default()).unwrap();

    let large: Vec<f64> = marks
        .iter()
        .filter(|m| m.kind == TickKind::Large)
        .map(|m| m.unit_value)
        .collect();
    assert_eq!(large.len(), 22);
    for (cm, value) in large.iter().enumerate() {
        assert!((value - cm as f64).abs() < 1e-9, "large tick {cm} at {value}");
    }

    let labels: Vec<&str> = marks.iter().filter_map(|m| m.label.as_deref()).collect();
    let expected: Vec<String> = (0..22).map(|cm| cm.to_string()).collect();
    assert_eq!(labels, expected);
    assert_eq!(labels.iter().filter(|l| **l == "3").count(), 1);

    // millimetre ticks only, no mark between them
    assert_eq!(marks.iter().filter(|m| m.kind == TickKind::Medium).count(), 212 - 22);
    assert_eq!(marks.len(), 212);
}

#[test]
fn ticks_hang_from_the_active_edge() {
    let p = params(Units::Dip, ZeroPoint::Near);
    assert_eq!(p.tick_line(10.0, 8.0), (Point::new(10.0, 0.0), Point::new(10.0, 8.0)));
    let flipped = ScaleParams { flip: true, ..p };
    assert_eq!(flipped.tick_line(10.0, 8.0), (Point::new(10.0, 80.0), Point::new(10.0, 72.0)));

    let v = ScaleParams {
        size: Size::new(80.0, 600.0),
        orientation: Orientation::Vertical,
        ..p
    };
    assert_eq!(v.tick_line(10.0, 8.0), (Point::new(72.0, 10.0), Point::new(80.0, 10.0)));
    let vf = ScaleParams { flip: true, ..v };
    assert_eq!(vf.tick_line(10.0, 8.0), (Point::new(0.0, 10.0), Point::new(8.0, 10.0)));
}

#[test]
fn labels_are_centred_and_clamped() {
    let p = params(Units::Dip, ZeroPoint::Near);
    let label = Size::new(20.0, 12.0);
    assert_eq!(p.label_origin(50.0, label), Point::new(40.0, LABEL_INSET));
    assert_eq!(p.label_origin(0.0, label).x, 1.0);
    assert_eq!(p.label_origin(800.0, label).x, 779.0);
}

#[test]
fn readout_flips_side_near_the_start() {
    let p = params(Units::Dip, ZeroPoint::Near);
    let text = Size::new(30.0, 12.0);
    assert_eq!(p.readout_origin(5.0, text, 0.0), Point::new(6.0, LABEL_INSET));
    assert_eq!(p.readout_origin(100.0, text, 12.0), Point::new(64.0, LABEL_INSET + 12.0));
}

#[test]
fn readout_sits_below_the_label_row() {
    let p = params(Units::Dip, ZeroPoint::Near);
    let label = Size::new(20.0, 14.0);
    let text = Size::new(30.0, 12.0);
    let (readout_row, marker_row) = p.readout_rows(label.height, text.height);

    let label_at = p.label_origin(100.0, label);
    let readout_at = p.readout_origin(100.0, text, readout_row);
    let marker_at = p.readout_origin(100.0, text, marker_row);
    assert_eq!(readout_at.y, label_at.y + label.height);
    assert_eq!(marker_at.y, readout_at.y + text.height);

    let flipped = ScaleParams { flip: true, ..p };
    let label_at = flipped.label_origin(100.0, label);
    let readout_at = flipped.readout_origin(100.0, text, readout_row);
    let marker_at = flipped.readout_origin(100.0, text, marker_row);
    assert_eq!(readout_at.y + text.height, label_at.y);
    assert_eq!(marker_at.y + text.height, readout_at.y);

    let v = ScaleParams {
        size: Size::new(80.0, 600.0),
        orientation: Orientation::Vertical,
        ..p
    };
    assert_eq!(v.readout_rows(label.height, text.height), (0.0, 0.0));
}

#[test]
fn track_value_respects_zero_point_and_units() {
    let s = Screen::default();
    let track = Point::new(100.0, -20.0);
    assert_eq!(params(Units::Dip, ZeroPoint::Near).track_value(track, &s), 100.0);
    assert_eq!(params(Units::Dip, ZeroPoint::Far).track_value(track, &s), 700.0);
    assert_eq!(params(Units::Inch, ZeroPoint::Near).track_value(Point::new(96.0, 0.0), &s), 1.0);
}

#[test]
fn markers_outside_the_ruler_are_hidden() {
    let s = Screen::default();
    let p = params(Units::Inch, ZeroPoint::Near);
    let visible = p.visible_markers(&[0.0, 96.0, 900.0], &s);
    assert_eq!(visible, vec![(96.0, "1".to_string())]);

    let far = params(Units::Dip, ZeroPoint::Far);
    assert_eq!(far.visible_markers(&[100.0], &s), vec![(100.0, "700".to_string())]);
}
