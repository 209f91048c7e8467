#![allow(clippy::match_same_arms)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use eframe::egui;

use super::ruler::RulerState;
use super::units::{Orientation, Units, ZeroPoint};
use crate::error::{Result, RulerError};

// Types
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };

        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let Some((last, mods)) = parts.split_last() else {
            return Err("invalid hotkey".to_string());
        };
        let ch = match last.to_lowercase().as_str() {
            "space" => ' ',
            _ => last
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .ok_or_else(|| "no key char".to_string())?,
        };
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        for m in lowers.iter_mut() {
            if m == "control" {
                *m = "ctrl".to_string();
            }
        }
        lowers.sort();
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["alt", "ctrl"] => Modifier::CtrlAlt,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            ["alt", "shift"] => Modifier::AltShift,
            ["alt", "ctrl", "shift"] => Modifier::CtrlAltShift,
            [single] => return Err(format!("unknown modifier '{}'", single)),
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey { modifier, key: ch })
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

/// Configurable single-key bindings. Arrow keys and `Esc` are fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub toggle_angle: Option<Hotkey>,
    pub toggle_perpendicular: Option<Hotkey>,
    pub horizontal: Option<Hotkey>,
    pub vertical: Option<Hotkey>,
    pub flip: Option<Hotkey>,
    pub zero_near: Option<Hotkey>,
    pub zero_far: Option<Hotkey>,
    pub units_pixel: Option<Hotkey>,
    pub units_dip: Option<Hotkey>,
    pub units_point: Option<Hotkey>,
    pub units_cm: Option<Hotkey>,
    pub units_inch: Option<Hotkey>,
    pub units_percent: Option<Hotkey>,
    pub set_marker: Option<Hotkey>,
    pub remove_marker: Option<Hotkey>,
    pub clear_markers: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            toggle_angle: Some(Hotkey::new(Modifier::None, 'A')),
            toggle_perpendicular: Some(Hotkey::new(Modifier::None, 'P')),
            horizontal: Some(Hotkey::new(Modifier::None, 'H')),
            vertical: Some(Hotkey::new(Modifier::None, 'V')),
            flip: Some(Hotkey::new(Modifier::None, 'S')),
            zero_near: Some(Hotkey::new(Modifier::None, 'N')),
            zero_far: Some(Hotkey::new(Modifier::None, 'F')),
            units_pixel: Some(Hotkey::new(Modifier::None, '1')),
            units_dip: Some(Hotkey::new(Modifier::None, '2')),
            units_point: Some(Hotkey::new(Modifier::None, '3')),
            units_cm: Some(Hotkey::new(Modifier::None, '4')),
            units_inch: Some(Hotkey::new(Modifier::None, '5')),
            units_percent: Some(Hotkey::new(Modifier::None, '6')),
            set_marker: Some(Hotkey::new(Modifier::None, 'M')),
            remove_marker: Some(Hotkey::new(Modifier::None, 'D')),
            clear_markers: Some(Hotkey::new(Modifier::None, 'C')),
        }
    }
}

/// Directory holding the ruler's settings and hotkeys files.
pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| RulerError::HomeNotSet)?;
    Ok(PathBuf::from(home).join(".ruler"))
}

impl Hotkeys {
    /// Every binding paired with the action it triggers.
    pub fn bindings(&self) -> [(Option<Hotkey>, RulerAction); 16] {
        [
            (self.toggle_angle, RulerAction::ToggleAngle),
            (self.toggle_perpendicular, RulerAction::TogglePerpendicular),
            (self.horizontal, RulerAction::Orientation(Orientation::Horizontal)),
            (self.vertical, RulerAction::Orientation(Orientation::Vertical)),
            (self.flip, RulerAction::Flip),
            (self.zero_near, RulerAction::ZeroPoint(ZeroPoint::Near)),
            (self.zero_far, RulerAction::ZeroPoint(ZeroPoint::Far)),
            (self.units_pixel, RulerAction::Units(Units::Pixel)),
            (self.units_dip, RulerAction::Units(Units::Dip)),
            (self.units_point, RulerAction::Units(Units::Point)),
            (self.units_cm, RulerAction::Units(Units::Cm)),
            (self.units_inch, RulerAction::Units(Units::Inch)),
            (self.units_percent, RulerAction::Units(Units::Percent)),
            (self.set_marker, RulerAction::SetMarker),
            (self.remove_marker, RulerAction::RemoveMarker),
            (self.clear_markers, RulerAction::ClearMarkers),
        ]
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| RulerError::io(dir, e))?;
        }
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path).map_err(|e| RulerError::io(path, e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| RulerError::io(path, e))?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Hotkeys> {
        let s = fs::read_to_string(path).map_err(|e| RulerError::io(path, e))?;
        let hk: Hotkeys = serde_yaml::from_str(&s)?;
        Ok(hk)
    }

    /// Load `~/.ruler/hotkeys.yaml`, falling back to the defaults when it is missing.
    pub fn load_from_default_path() -> Result<Hotkeys> {
        let path = config_dir()?.join("hotkeys.yaml");
        if !path.exists() {
            return Ok(Hotkeys::default());
        }
        Self::load_from_path(&path)
    }
}

/// Everything the keyboard can do to the ruler.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RulerAction {
    ToggleAngle,
    TogglePerpendicular,
    Orientation(Orientation),
    Flip,
    ZeroPoint(ZeroPoint),
    Units(Units),
    SetMarker,
    RemoveMarker,
    ClearMarkers,
    /// Move the window by `(dx, dy)` DIPs.
    Nudge(f64, f64),
    /// Lengthen or shorten the ruler along its axis.
    Grow(f64),
    Exit,
}

/// Arrow-key step in DIPs, and with Shift held.
pub const NUDGE_STEP: f64 = 0.5;
pub const NUDGE_STEP_FAST: f64 = 5.0;

pub fn key_from_char(c: char) -> Option<egui::Key> {
    match c.to_ascii_uppercase() {
        'A' => Some(egui::Key::A),
        'B' => Some(egui::Key::B),
        'C' => Some(egui::Key::C),
        'D' => Some(egui::Key::D),
        'E' => Some(egui::Key::E),
        'F' => Some(egui::Key::F),
        'G' => Some(egui::Key::G),
        'H' => Some(egui::Key::H),
        'I' => Some(egui::Key::I),
        'J' => Some(egui::Key::J),
        'K' => Some(egui::Key::K),
        'L' => Some(egui::Key::L),
        'M' => Some(egui::Key::M),
        'N' => Some(egui::Key::N),
        'O' => Some(egui::Key::O),
        'P' => Some(egui::Key::P),
        'Q' => Some(egui::Key::Q),
        'R' => Some(egui::Key::R),
        'S' => Some(egui::Key::S),
        'T' => Some(egui::Key::T),
        'U' => Some(egui::Key::U),
        'V' => Some(egui::Key::V),
        'W' => Some(egui::Key::W),
        'X' => Some(egui::Key::X),
        'Y' => Some(egui::Key::Y),
        'Z' => Some(egui::Key::Z),
        '0' => Some(egui::Key::Num0),
        '1' => Some(egui::Key::Num1),
        '2' => Some(egui::Key::Num2),
        '3' => Some(egui::Key::Num3),
        '4' => Some(egui::Key::Num4),
        '5' => Some(egui::Key::Num5),
        '6' => Some(egui::Key::Num6),
        '7' => Some(egui::Key::Num7),
        '8' => Some(egui::Key::Num8),
        '9' => Some(egui::Key::Num9),
        ' ' => Some(egui::Key::Space),
        _ => None,
    }
}

pub fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt,
        Modifier::Ctrl => ctrl && !alt,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlAlt => ctrl && alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
        Modifier::AltShift => alt && shift && !ctrl,
        Modifier::CtrlAltShift => ctrl && alt && shift,
    }
}

pub fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    if !modifiers_match(&input.modifiers, hk.modifier) {
        return false;
    }
    input.key_pressed(key)
}

/// Actions bound to the arrow keys and `Esc`.
fn fixed_actions(input: &egui::InputState) -> Vec<RulerAction> {
    let mut actions = Vec::new();
    let step = if input.modifiers.shift {
        NUDGE_STEP_FAST
    } else {
        NUDGE_STEP
    };
    let arrows = [
        (egui::Key::ArrowLeft, -1.0, 0.0),
        (egui::Key::ArrowRight, 1.0, 0.0),
        (egui::Key::ArrowUp, 0.0, -1.0),
        (egui::Key::ArrowDown, 0.0, 1.0),
    ];
    for (key, dx, dy) in arrows {
        if !input.key_pressed(key) {
            continue;
        }
        if input.modifiers.alt {
            // right/down lengthen, left/up shorten
            actions.push(RulerAction::Grow((dx + dy) * step));
        } else {
            actions.push(RulerAction::Nudge(dx * step, dy * step));
        }
    }
    if input.key_pressed(egui::Key::Escape) {
        actions.push(RulerAction::Exit);
    }
    actions
}

pub fn detect_hotkey_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<RulerAction> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        let mut actions = fixed_actions(input);
        for (hk, action) in cfg.bindings() {
            if is_hotkey_pressed(hk.as_ref(), input) && !actions.contains(&action) {
                actions.push(action);
            }
        }
        actions
    })
}

/// Apply one action to the ruler state. [`RulerAction::Exit`] is left to the caller.
pub fn apply_action(state: &mut RulerState, action: RulerAction) {
    match action {
        RulerAction::ToggleAngle => state.toggle_angle(),
        RulerAction::TogglePerpendicular => state.toggle_perpendicular(),
        RulerAction::Orientation(o) => state.set_orientation(o),
        RulerAction::Flip => state.set_flip(!state.flip),
        RulerAction::ZeroPoint(z) => state.set_zero_point(z),
        RulerAction::Units(u) => state.set_units(u),
        RulerAction::SetMarker => state.set_marker(),
        RulerAction::RemoveMarker => {
            state.remove_marker();
        }
        RulerAction::ClearMarkers => state.clear_markers(),
        RulerAction::Nudge(dx, dy) => state.nudge(dx, dy),
        RulerAction::Grow(delta) => state.grow(delta),
        RulerAction::Exit => {}
    }
    tracing::debug!(?action, "applied");
}
