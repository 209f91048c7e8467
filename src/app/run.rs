//! Top-level entry point for running the ruler as a native window.

use eframe::egui;

use super::ruler_app::RulerApp;
use crate::config::RulerConfig;

/// Launch the ruler in an undecorated, always-on-top native window.
///
/// The window is placed and sized from the stored layout of the current
/// orientation. The call blocks until the window is closed.
pub fn run_ruler(mut cfg: RulerConfig) -> eframe::Result<()> {
    let app = RulerApp::new(&cfg);
    let rect = app.state.window_rect();

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    let mut viewport = opts
        .viewport
        .clone()
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_min_inner_size(egui::vec2(
            crate::data::ruler::MIN_AXIS as f32,
            crate::data::ruler::MIN_AXIS as f32,
        ))
        .with_position(egui::pos2(rect.left as f32, rect.top as f32))
        .with_inner_size(egui::vec2(rect.width as f32, rect.height as f32));

    // Try to set application icon from icon.svg if available.
    if viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            viewport = viewport.with_icon(icon);
        }
    }
    opts.viewport = viewport;

    tracing::info!(
        orientation = ?app.state.orientation,
        units = %app.state.units,
        "starting ruler at {:?}",
        rect
    );

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
