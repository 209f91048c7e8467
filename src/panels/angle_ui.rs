//! Angle overlay: a transparent viewport over the working area that draws the
//! gauge arc between the ruler axis and the cursor.

use eframe::egui;
use egui::{Color32, FontId, Pos2, Stroke};

use super::scale_ui::{to_pos, to_size};
use crate::data::angle::{arc_radius, perpendicular_foot};
use crate::data::geometry::{point_at_angle, Point, Rect};
use crate::data::label::{format_angle, format_readout};
use crate::data::ruler::RulerState;
use crate::data::screen::Screen;
use crate::data::units::convert;

const ARC_SEGMENTS: usize = 48;

#[derive(Debug, Clone)]
pub struct AnglePanel {
    pub line: Color32,
    pub arc: Color32,
    pub perpendicular: Color32,
    pub text: Color32,
    pub text_background: Color32,
    pub font: FontId,
}

impl Default for AnglePanel {
    fn default() -> Self {
        Self {
            line: Color32::from_rgb(200, 30, 30),
            arc: Color32::from_rgb(30, 90, 200),
            perpendicular: Color32::from_rgb(30, 140, 60),
            text: Color32::WHITE,
            text_background: Color32::from_black_alpha(180),
            font: FontId::proportional(13.0),
        }
    }
}

impl AnglePanel {
    fn label(&self, painter: &egui::Painter, at: Pos2, text: String, color: Color32) -> egui::Rect {
        let galley = painter.layout_no_wrap(text, self.font.clone(), color);
        let rect = egui::Rect::from_min_size(at, galley.size()).expand(2.0);
        painter.rect_filled(rect, 3.0, self.text_background);
        painter.galley(at, galley, color);
        rect
    }

    /// Paint the gauge. `offset` is where screen DIP `(0, 0)` lands in the painter.
    pub fn draw(&self, painter: &egui::Painter, offset: Pos2, ruler: &RulerState, screen: &Screen) {
        let origin = ruler.origin;
        let mouse = ruler.mouse_point;
        let arc = ruler.arc();
        let radius = arc_radius(origin, mouse);

        // ruler axis leg, hypotenuse, arc
        let leg = point_at_angle(origin, radius.max(mouse.distance(origin)), arc.start_degrees);
        painter.line_segment([to_pos(offset, origin), to_pos(offset, leg)], Stroke::new(1.0, self.line));
        painter.line_segment([to_pos(offset, origin), to_pos(offset, mouse)], Stroke::new(1.5, self.line));
        if radius > 0.0 {
            let points: Vec<Pos2> = arc
                .points(origin, radius, ARC_SEGMENTS)
                .into_iter()
                .map(|p| to_pos(offset, p))
                .collect();
            painter.add(egui::Shape::line(points, Stroke::new(1.5, self.arc)));
        }

        if ruler.perpendicular {
            let foot = perpendicular_foot(origin, mouse, ruler.orientation);
            painter.add(egui::Shape::dashed_line(
                &[to_pos(offset, mouse), to_pos(offset, foot)],
                Stroke::new(1.0, self.perpendicular),
                6.0,
                4.0,
            ));
            // the perpendicular runs across the ruler axis
            let across = ruler.orientation.other();
            let length = convert(mouse.distance(foot), ruler.units, across, screen);
            let mid = Point::new((mouse.x + foot.x) / 2.0, (mouse.y + foot.y) / 2.0);
            self.label(
                painter,
                to_pos(offset, mid.offset(6.0, 0.0)),
                format_readout(length, ruler.units),
                self.perpendicular,
            );
        }

        let text = format_angle(arc.sweep_degrees);
        let size = to_size(painter.layout_no_wrap(text.clone(), self.font.clone(), self.text).size());
        let anchor = arc.text_anchor(origin, radius, size);
        self.label(painter, to_pos(offset, anchor), text, self.text);
    }

    /// Show the overlay viewport covering `area` (screen DIPs).
    ///
    /// Returns `false` once the user closed the overlay (see [`close_requested`]).
    pub fn show(&self, ctx: &egui::Context, area: Rect, ruler: &mut RulerState, screen: &Screen) -> bool {
        let builder = egui::ViewportBuilder::default()
            .with_title("Angle")
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false)
            .with_position(egui::pos2(area.left as f32, area.top as f32))
            .with_inner_size(egui::vec2(area.width as f32, area.height as f32));

        ctx.show_viewport_immediate(egui::ViewportId::from_hash_of("ruler_angle"), builder, |ctx, _class| {
            let (close, pointer, min) = ctx.input(|i| {
                let close = close_requested(i);
                let min = i
                    .viewport()
                    .inner_rect
                    .map(|r| r.min)
                    .unwrap_or(egui::pos2(area.left as f32, area.top as f32));
                (close, i.pointer.latest_pos(), min)
            });
            if let Some(p) = pointer {
                ruler.update_cursor(Point::new((p.x + min.x) as f64, (p.y + min.y) as f64));
            }
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let offset = Pos2::ZERO - min.to_vec2();
                    self.draw(ui.painter(), offset, ruler, screen);
                });
            !close
        })
    }
}

/// Whether the overlay should close this frame: its window was closed or
/// `Esc` was pressed. Clicking inside the overlay keeps it open.
pub fn close_requested(input: &egui::InputState) -> bool {
    input.viewport().close_requested() || input.key_pressed(egui::Key::Escape)
}
