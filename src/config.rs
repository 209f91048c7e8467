//! Configuration for the ruler application.

use std::path::PathBuf;
use std::time::Duration;

use crate::data::hotkeys::Hotkeys;
use crate::persistence::Settings;

/// How often the cursor is re-sampled while nothing else triggers a repaint.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration passed to [`crate::run_ruler`].
pub struct RulerConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options. Size, position and decorations
    /// are overridden from the settings.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Behaviour ────────────────────────────────────────────────────────────
    pub redraw_interval: Duration,
    /// Initial settings; see [`crate::persistence::load_settings_from_path`].
    pub settings: Settings,
    /// Where settings are written on close. `None` disables saving.
    pub settings_path: Option<PathBuf>,
    pub hotkeys: Hotkeys,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            title: "Ruler".to_string(),
            native_options: None,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
            settings: Settings::default(),
            settings_path: None,
            hotkeys: Hotkeys::default(),
        }
    }
}
