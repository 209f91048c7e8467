//! Standalone ruler application.
//!
//! [`RulerApp`] owns the ruler state and the settings, turns input into
//! [`RulerAction`]s and keeps the native window in sync with the state. The
//! cursor is re-sampled every `redraw_interval`.

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use egui::viewport::ResizeDirection;

use crate::config::RulerConfig;
use crate::data::geometry::{Point, Rect};
use crate::data::hotkeys::{apply_action, detect_hotkey_actions, Hotkeys, RulerAction};
use crate::data::ruler::RulerState;
use crate::data::screen::Screen;
use crate::data::units::Edge;
use crate::panels::menu_ui::context_menu;
use crate::panels::{AnglePanel, ScalePanel};
use crate::persistence::{save_settings_to_path, Settings};

fn to_rect(r: egui::Rect) -> Rect {
    Rect::new(r.min.x as f64, r.min.y as f64, r.width() as f64, r.height() as f64)
}

pub struct RulerApp {
    pub state: RulerState,
    pub settings: Settings,
    pub settings_path: Option<PathBuf>,
    pub hotkeys: Hotkeys,
    pub redraw_interval: Duration,
    pub scale_panel: ScalePanel,
    pub angle_panel: AnglePanel,
    /// Window rectangle seen on the previous frame (screen DIPs).
    last_seen: Option<Rect>,
    /// Set once the scale failed to lay out, so the warning is logged once.
    scale_failed: bool,
    saved: bool,
}

impl RulerApp {
    pub fn new(cfg: &RulerConfig) -> Self {
        let mut settings = cfg.settings.clone();
        settings.fix_defaults();
        Self {
            state: settings.to_state(),
            settings,
            settings_path: cfg.settings_path.clone(),
            hotkeys: cfg.hotkeys.clone(),
            redraw_interval: cfg.redraw_interval,
            scale_panel: ScalePanel::default(),
            angle_panel: AnglePanel::default(),
            last_seen: None,
            scale_failed: false,
            saved: false,
        }
    }

    /// The monitor the ruler is on.
    fn current_screen(&self, ctx: &egui::Context) -> Screen {
        #[cfg(feature = "display_info")]
        {
            let screens = Screen::all();
            if let Some(s) = Screen::from_window(&screens, self.state.window_rect()) {
                return s.clone();
            }
        }
        ctx.input(|i| {
            let scale = i.pixels_per_point as f64;
            match i.viewport().monitor_size {
                Some(size) => {
                    let bounds = Rect::new(0.0, 0.0, size.x as f64, size.y as f64);
                    Screen::from_dips(bounds, bounds, scale)
                }
                None => Screen::default(),
            }
        })
    }

    /// Adopt window moves and resizes made by the OS or a drag.
    fn sync_from_viewport(&mut self, ctx: &egui::Context) {
        let Some(seen) = ctx.input(|i| i.viewport().inner_rect).map(to_rect) else {
            return;
        };
        if self.last_seen != Some(seen) {
            self.last_seen = Some(seen);
            if seen != self.state.window_rect() {
                self.state.set_position(seen.left, seen.top);
                self.state.set_size(seen.size());
            }
        }
    }

    fn push_geometry(&self, ctx: &egui::Context) {
        let r = self.state.window_rect();
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::Pos2::new(
            r.left as f32,
            r.top as f32,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::Vec2::new(
            r.width as f32,
            r.height as f32,
        )));
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: RulerAction) {
        let before = self.state.window_rect();
        match action {
            RulerAction::Exit => {
                self.save_settings();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            RulerAction::Orientation(o) => self.settings.switch_orientation(&mut self.state, o),
            other => apply_action(&mut self.state, other),
        }
        if self.state.window_rect() != before {
            self.push_geometry(ctx);
        }
    }

    pub fn save_settings(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        self.settings.capture(&self.state);
        let Some(path) = &self.settings_path else {
            return;
        };
        match save_settings_to_path(&self.settings, path) {
            Ok(()) => tracing::info!("settings saved to {}", path.display()),
            Err(e) => tracing::warn!("failed to save settings: {e}"),
        }
    }

    /// Ruler body, drag/resize handling and the context menu.
    fn ruler_ui(&mut self, ui: &mut egui::Ui, screen: &Screen) -> Option<RulerAction> {
        let rect = ui.max_rect();
        let response = ui.interact(rect, ui.id().with("ruler_body"), egui::Sense::click_and_drag());

        if let Some(p) = response.interact_pointer_pos() {
            if response.drag_started_by(egui::PointerButton::Primary) {
                let local = Point::new((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64);
                let cmd = match self.state.resize_border.hit(self.state.size(), local) {
                    Some(Edge::Left) => egui::ViewportCommand::BeginResize(ResizeDirection::West),
                    Some(Edge::Right) => egui::ViewportCommand::BeginResize(ResizeDirection::East),
                    Some(Edge::Top) => egui::ViewportCommand::BeginResize(ResizeDirection::North),
                    Some(Edge::Bottom) => egui::ViewportCommand::BeginResize(ResizeDirection::South),
                    None => egui::ViewportCommand::StartDrag,
                };
                ui.ctx().send_viewport_cmd(cmd);
            }
        }

        match self.scale_panel.draw(ui.painter(), rect.min, &self.state, screen) {
            Ok(()) => self.scale_failed = false,
            Err(e) => {
                if !self.scale_failed {
                    tracing::warn!("skipping scale: {e}");
                }
                self.scale_failed = true;
            }
        }

        let mut picked = None;
        response.context_menu(|ui| {
            picked = context_menu(ui, &self.state, &self.hotkeys);
        });
        picked
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for RulerApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // the angle overlay is see-through; the ruler paints its own background
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_settings();
        }

        self.sync_from_viewport(ctx);
        let screen = self.current_screen(ctx);

        // cursor in screen DIPs while it is over the ruler
        let pointer = ctx.input(|i| {
            let min = i.viewport().inner_rect.map(|r| r.min)?;
            i.pointer.hover_pos().map(|p| p + min.to_vec2())
        });
        if let Some(p) = pointer {
            self.state.update_cursor(Point::new(p.x as f64, p.y as f64));
        }

        for action in detect_hotkey_actions(&self.hotkeys, ctx) {
            self.handle_action(ctx, action);
        }

        let picked = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.ruler_ui(ui, &screen))
            .inner;
        if let Some(action) = picked {
            self.handle_action(ctx, action);
        }

        if self.state.angle_visible {
            let area = screen.working_area_dip;
            if !self.angle_panel.show(ctx, area, &mut self.state, &screen) {
                self.state.angle_visible = false;
                tracing::debug!("angle overlay closed");
            }
        }

        ctx.request_repaint_after(self.redraw_interval);
    }
}
