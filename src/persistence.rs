//! Settings persistence: save and load the ruler's layout to/from JSON files.
//!
//! Each orientation remembers its own window rectangle, zero point and flip,
//! so switching between horizontal and vertical restores where that ruler
//! was last left.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::geometry::Rect;
use crate::data::hotkeys::config_dir;
use crate::data::ruler::RulerState;
use crate::data::units::{Orientation, Units, ZeroPoint};
use crate::error::{Result, RulerError};

/// Window rectangle and scale direction of one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub left: f64,
    pub top: f64,
    /// Negative means "not set yet".
    pub width: f64,
    /// Negative means "not set yet".
    pub height: f64,
    pub zero_point: ZeroPoint,
    pub flip: bool,
}

impl Layout {
    pub const HORIZONTAL_DEFAULT: Layout = Layout {
        left: 200.0,
        top: 400.0,
        width: 800.0,
        height: 80.0,
        zero_point: ZeroPoint::Near,
        flip: false,
    };

    pub const VERTICAL_DEFAULT: Layout = Layout {
        left: 200.0,
        top: 200.0,
        width: 80.0,
        height: 600.0,
        zero_point: ZeroPoint::Near,
        flip: false,
    };

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Capture the current geometry of `state`.
    pub fn from_state(state: &RulerState) -> Self {
        Self {
            left: state.left,
            top: state.top,
            width: state.width,
            height: state.height,
            zero_point: state.zero_point,
            flip: state.flip,
        }
    }

    /// Move `state` into this layout, keeping its orientation.
    pub fn apply_to(&self, state: &mut RulerState) {
        let units = state.units;
        let markers = std::mem::take(&mut state.markers);
        let mut next = RulerState::with_rect(state.orientation, self.rect());
        next.units = units;
        next.markers = markers;
        next.zero_point = self.zero_point;
        next.flip = self.flip;
        next.angle_visible = state.angle_visible;
        next.perpendicular = state.perpendicular;
        next.recompute();
        *state = next;
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: -1.0,
            height: -1.0,
            ..Self::HORIZONTAL_DEFAULT
        }
    }
}

/// Everything written to `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub orientation: Orientation,
    pub units: Units,
    /// Magnifier zoom; unused, kept so files written by other builds load unchanged.
    pub magnification: f64,
    pub horizontal: Layout,
    pub vertical: Layout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            units: Units::Dip,
            magnification: 1.6,
            horizontal: Layout::HORIZONTAL_DEFAULT,
            vertical: Layout::VERTICAL_DEFAULT,
        }
    }
}

impl Settings {
    /// Replace unset (negative) layout sizes with the per-orientation defaults.
    pub fn fix_defaults(&mut self) {
        if self.horizontal.width < 0.0 || self.horizontal.height < 0.0 {
            self.horizontal = Layout::HORIZONTAL_DEFAULT;
        }
        if self.vertical.width < 0.0 || self.vertical.height < 0.0 {
            self.vertical = Layout::VERTICAL_DEFAULT;
        }
    }

    pub fn layout(&self, orientation: Orientation) -> &Layout {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub fn layout_mut(&mut self, orientation: Orientation) -> &mut Layout {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Build the initial ruler from the stored layout of the stored orientation.
    pub fn to_state(&self) -> RulerState {
        let mut state = RulerState {
            orientation: self.orientation,
            units: self.units,
            ..RulerState::default()
        };
        self.layout(self.orientation).apply_to(&mut state);
        state
    }

    /// Record the current ruler into the layout of its orientation.
    pub fn capture(&mut self, state: &RulerState) {
        self.orientation = state.orientation;
        self.units = state.units;
        *self.layout_mut(state.orientation) = Layout::from_state(state);
    }

    /// Switch `state` to `orientation`, saving the old layout and restoring the new one.
    pub fn switch_orientation(&mut self, state: &mut RulerState, orientation: Orientation) {
        if state.orientation == orientation {
            return;
        }
        self.capture(state);
        state.orientation = orientation;
        self.orientation = orientation;
        self.layout(orientation).apply_to(state);
    }
}

// ---------- Public API ----------

/// `~/.ruler/settings.json`.
pub fn default_settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

/// Serialize the settings as pretty JSON.
pub fn settings_to_json(settings: &Settings) -> Result<String> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Deserialize settings from JSON and fix up unset layouts.
pub fn settings_from_json(json: &str) -> Result<Settings> {
    let mut settings: Settings = serde_json::from_str(json)?;
    settings.fix_defaults();
    Ok(settings)
}

/// Save the settings to a JSON file at the given path, creating its directory.
pub fn save_settings_to_path(settings: &Settings, path: &Path) -> Result<()> {
    let txt = settings_to_json(settings)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| RulerError::io(dir, e))?;
    }
    std::fs::write(path, txt).map_err(|e| RulerError::io(path, e))
}

/// Load the settings from a JSON file at the given path.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    let txt = std::fs::read_to_string(path).map_err(|e| RulerError::io(path, e))?;
    settings_from_json(&txt)
}
