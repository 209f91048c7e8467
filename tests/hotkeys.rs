use ruler::data::hotkeys::*;
use ruler::data::ruler::RulerState;
use ruler::data::units::{Orientation, Units, ZeroPoint};

#[test]
fn parse_single_key() {
    let hk: Hotkey = "m".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::None, 'M'));
}

#[test]
fn parse_modifiers_in_any_order() {
    let hk: Hotkey = "Ctrl+M".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::Ctrl, 'M'));
    let hk: Hotkey = "shift + alt + x".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::AltShift, 'X'));
    let hk: Hotkey = "Shift+Control+Alt+1".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::CtrlAltShift, '1'));
}

#[test]
fn parse_space() {
    let hk: Hotkey = "Space".parse().unwrap();
    assert_eq!(hk.key, ' ');
    assert_eq!(hk.to_string(), "Space");
}

#[test]
fn parse_errors() {
    assert!("".parse::<Hotkey>().is_err());
    assert!("Meta+M".parse::<Hotkey>().is_err());
    assert!("Ctrl+Ctrl+M".parse::<Hotkey>().is_err());
}

#[test]
fn display_round_trips() {
    let hk = Hotkey::new(Modifier::CtrlShift, 'M');
    assert_eq!(hk.to_string(), "Ctrl+Shift+M");
    assert_eq!(hk.to_string().parse::<Hotkey>().unwrap(), hk);
}

#[test]
fn default_bindings() {
    let hk = Hotkeys::default();
    assert_eq!(hk.toggle_angle, Some(Hotkey::new(Modifier::None, 'A')));
    assert_eq!(hk.flip, Some(Hotkey::new(Modifier::None, 'S')));
    let bindings = hk.bindings();
    let units: Vec<(char, Units)> = bindings
        .iter()
        .filter_map(|(k, a)| match (k, a) {
            (Some(k), RulerAction::Units(u)) => Some((k.key, *u)),
            _ => None,
        })
        .collect();
    assert_eq!(
        units,
        vec![
            ('1', Units::Pixel),
            ('2', Units::Dip),
            ('3', Units::Point),
            ('4', Units::Cm),
            ('5', Units::Inch),
            ('6', Units::Percent),
        ]
    );
}

#[test]
fn yaml_fills_missing_bindings_with_defaults() {
    let yaml = "toggle_angle:\n  modifier: Ctrl\n  key: G\nclear_markers: null\n";
    let hk: Hotkeys = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(hk.toggle_angle, Some(Hotkey::new(Modifier::Ctrl, 'G')));
    assert_eq!(hk.clear_markers, None);
    assert_eq!(hk.flip, Hotkeys::default().flip);
}

#[test]
fn save_and_load_path() {
    let dir = std::env::temp_dir().join(format!("ruler-hotkeys-{}", std::process::id()));
    let path = dir.join("hotkeys.yaml");
    let mut hk = Hotkeys::default();
    hk.set_marker = Some(Hotkey::new(Modifier::Alt, 'K'));
    hk.save_to_path(&path).unwrap();
    let loaded = Hotkeys::load_from_path(&path).unwrap();
    assert_eq!(loaded, hk);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn actions_drive_the_state() {
    let mut s = RulerState::default();
    apply_action(&mut s, RulerAction::Units(Units::Cm));
    assert_eq!(s.units, Units::Cm);
    apply_action(&mut s, RulerAction::Flip);
    assert!(s.flip);
    apply_action(&mut s, RulerAction::Flip);
    assert!(!s.flip);
    apply_action(&mut s, RulerAction::ZeroPoint(ZeroPoint::Far));
    assert_eq!(s.zero_point, ZeroPoint::Far);
    apply_action(&mut s, RulerAction::Orientation(Orientation::Vertical));
    assert_eq!(s.orientation, Orientation::Vertical);
    apply_action(&mut s, RulerAction::ToggleAngle);
    assert!(s.angle_visible);
    apply_action(&mut s, RulerAction::TogglePerpendicular);
    assert!(s.perpendicular);
    apply_action(&mut s, RulerAction::Nudge(NUDGE_STEP_FAST, 0.0));
    assert_eq!(s.left, 205.0);
    apply_action(&mut s, RulerAction::Grow(-100.0));
    assert_eq!(s.long_axis, 700.0);
    let before = s.clone();
    apply_action(&mut s, RulerAction::Exit);
    assert_eq!(s, before);
}
