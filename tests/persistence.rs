use ruler::data::units::{Orientation, Units, ZeroPoint};
use ruler::error::RulerError;
use ruler::persistence::*;

#[test]
fn defaults() {
    let s = Settings::default();
    assert_eq!(s.orientation, Orientation::Horizontal);
    assert_eq!(s.units, Units::Dip);
    assert_eq!(s.magnification, 1.6);
    assert_eq!(s.horizontal, Layout::HORIZONTAL_DEFAULT);
    assert_eq!(s.vertical, Layout::VERTICAL_DEFAULT);
}

#[test]
fn json_round_trip() {
    let mut s = Settings::default();
    s.units = Units::Inch;
    s.vertical.zero_point = ZeroPoint::Far;
    let json = settings_to_json(&s).unwrap();
    assert_eq!(settings_from_json(&json).unwrap(), s);
}

#[test]
fn unset_layouts_get_defaults() {
    let s = settings_from_json(r#"{"units": "Cm", "horizontal": {"left": 5.0, "width": -1.0}}"#).unwrap();
    assert_eq!(s.units, Units::Cm);
    assert_eq!(s.horizontal, Layout::HORIZONTAL_DEFAULT);
    assert_eq!(s.vertical, Layout::VERTICAL_DEFAULT);

    let empty = settings_from_json("{}").unwrap();
    assert_eq!(empty, Settings::default());
}

#[test]
fn bad_json_is_reported() {
    assert!(matches!(settings_from_json("{"), Err(RulerError::Json(_))));
}

#[test]
fn state_from_settings() {
    let mut settings = Settings::default();
    settings.orientation = Orientation::Vertical;
    settings.units = Units::Point;
    let state = settings.to_state();
    assert_eq!(state.orientation, Orientation::Vertical);
    assert_eq!(state.units, Units::Point);
    assert_eq!((state.left, state.top, state.width, state.height), (200.0, 200.0, 80.0, 600.0));
}

#[test]
fn switching_orientation_keeps_each_layout() {
    let mut settings = Settings::default();
    let mut state = settings.to_state();
    state.nudge(10.0, 0.0);
    state.set_flip(true);

    settings.switch_orientation(&mut state, Orientation::Vertical);
    assert_eq!(state.orientation, Orientation::Vertical);
    assert_eq!((state.left, state.top, state.width, state.height), (200.0, 200.0, 80.0, 600.0));
    assert!(!state.flip);
    assert_eq!(settings.horizontal.left, 210.0);
    assert!(settings.horizontal.flip);

    settings.switch_orientation(&mut state, Orientation::Horizontal);
    assert_eq!((state.left, state.width), (210.0, 800.0));
    assert!(state.flip);
}

#[test]
fn capture_records_current_layout() {
    let mut settings = Settings::default();
    let mut state = settings.to_state();
    state.set_units(Units::Percent);
    state.set_width(640.0);
    settings.capture(&state);
    assert_eq!(settings.units, Units::Percent);
    assert_eq!(settings.horizontal.width, 640.0);
}

#[test]
fn save_and_load_path() {
    let dir = std::env::temp_dir().join(format!("ruler-settings-{}", std::process::id()));
    let path = dir.join("settings.json");
    let mut s = Settings::default();
    s.orientation = Orientation::Vertical;
    save_settings_to_path(&s, &path).unwrap();
    assert_eq!(load_settings_from_path(&path).unwrap(), s);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("ruler-does-not-exist/settings.json");
    assert!(matches!(load_settings_from_path(&path), Err(RulerError::Io { .. })));
}
