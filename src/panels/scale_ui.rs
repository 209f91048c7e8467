//! Painter for the ruler body: background, ticks, labels, track line and markers.

use eframe::egui;
use egui::{Color32, FontId, Pos2, Stroke};

use crate::data::geometry::{Point, Size};
use crate::data::label::format_readout;
use crate::data::ruler::RulerState;
use crate::data::screen::Screen;
use crate::data::ticks::TickKind;
use crate::data::units::Orientation;
use crate::error::Result;

/// Colors and fonts of the ruler body.
#[derive(Debug, Clone)]
pub struct ScaleStyle {
    pub background: Color32,
    pub border: Color32,
    pub tick: Color32,
    pub label: Color32,
    pub track: Color32,
    pub marker: Color32,
    pub label_font: FontId,
    pub readout_font: FontId,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgba_unmultiplied(255, 250, 205, 235),
            border: Color32::from_gray(120),
            tick: Color32::from_gray(30),
            label: Color32::from_gray(30),
            track: Color32::from_rgb(200, 30, 30),
            marker: Color32::from_rgb(30, 90, 200),
            label_font: FontId::proportional(11.0),
            readout_font: FontId::monospace(11.0),
        }
    }
}

pub(crate) fn to_pos(offset: Pos2, p: Point) -> Pos2 {
    offset + egui::vec2(p.x as f32, p.y as f32)
}

pub(crate) fn to_size(v: egui::Vec2) -> Size {
    Size::new(v.x as f64, v.y as f64)
}

#[derive(Debug, Clone, Default)]
pub struct ScalePanel {
    pub style: ScaleStyle,
}

impl ScalePanel {
    /// Paint the ruler whose window-local top-left corner is `offset`.
    ///
    /// # Errors
    /// Propagates tick classification failures; nothing is drawn past the
    /// background in that case.
    pub fn draw(&self, painter: &egui::Painter, offset: Pos2, ruler: &RulerState, screen: &Screen) -> Result<()> {
        let style = &self.style;
        let params = ruler.scale_params();
        let body = egui::Rect::from_min_size(offset, egui::vec2(ruler.width as f32, ruler.height as f32));
        painter.rect_filled(body, 0.0, style.background);
        painter.rect_stroke(body, 0.0, Stroke::new(1.0, style.border), egui::StrokeKind::Inside);

        let marks = params.marks(screen)?;
        let tick_stroke = Stroke::new(1.0, style.tick);
        let mut label_height: f64 = 0.0;
        for mark in &marks {
            if mark.kind != TickKind::None {
                let (a, b) = params.tick_line(mark.position, mark.kind.length(ruler.orientation));
                painter.line_segment([to_pos(offset, a), to_pos(offset, b)], tick_stroke);
            }
            if let Some(text) = &mark.label {
                let galley = painter.layout_no_wrap(text.clone(), style.label_font.clone(), style.label);
                let size = to_size(galley.size());
                label_height = label_height.max(size.height);
                let at = params.label_origin(mark.position, size);
                painter.galley(to_pos(offset, at), galley, style.label);
            }
        }

        let full = match ruler.orientation {
            Orientation::Horizontal => ruler.height,
            Orientation::Vertical => ruler.width,
        };

        // track line and readout
        let along = match ruler.orientation {
            Orientation::Horizontal => ruler.track_point.x,
            Orientation::Vertical => ruler.track_point.y,
        };
        let (a, b) = params.tick_line(along, full);
        painter.line_segment([to_pos(offset, a), to_pos(offset, b)], Stroke::new(1.0, style.track));
        let value = params.track_value(ruler.track_point, screen);
        let readout = painter.layout_no_wrap(format_readout(value, ruler.units), style.readout_font.clone(), style.track);
        let readout_size = to_size(readout.size());
        let (readout_row, marker_row) = params.readout_rows(label_height, readout_size.height);
        let at = params.readout_origin(along, readout_size, readout_row);
        painter.galley(to_pos(offset, at), readout, style.track);

        for (position, text) in params.visible_markers(&ruler.markers, screen) {
            let (a, b) = params.tick_line(position, full);
            painter.line_segment([to_pos(offset, a), to_pos(offset, b)], Stroke::new(1.0, style.marker));
            let galley = painter.layout_no_wrap(text, style.readout_font.clone(), style.marker);
            let at = params.readout_origin(position, to_size(galley.size()), marker_row);
            painter.galley(to_pos(offset, at), galley, style.marker);
        }
        Ok(())
    }
}
