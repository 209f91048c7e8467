use ruler::config::RulerConfig;
use ruler::data::hotkeys::Hotkeys;
use ruler::persistence::{default_settings_path, load_settings_from_path, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings_path = match default_settings_path() {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!("settings will not be saved: {e}");
            None
        }
    };
    let settings = match &settings_path {
        Some(p) if p.exists() => load_settings_from_path(p).unwrap_or_else(|e| {
            tracing::warn!("ignoring {}: {e}", p.display());
            Settings::default()
        }),
        _ => Settings::default(),
    };
    let hotkeys = Hotkeys::load_from_default_path().unwrap_or_else(|e| {
        tracing::warn!("using default hotkeys: {e}");
        Hotkeys::default()
    });

    let cfg = RulerConfig {
        settings,
        settings_path,
        hotkeys,
        ..RulerConfig::default()
    };
    let result = ruler::run_ruler(cfg);
    tracing::info!("ruler closed");
    result
}
