//! Monitor description used by the unit converter.
//!
//! A [`Screen`] captures the per-axis DPI scale of one monitor together with
//! its bounds and working area, both in physical pixels and in DIPs. The GUI
//! rebuilds the current screen every frame because the scale changes as soon
//! as the ruler window is dragged onto a monitor with a different DPI.

use super::geometry::{Point, Rect};
use super::units::Orientation;

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Horizontal device pixels per DIP (1.0 at 96 DPI).
    pub scale_x: f64,
    /// Vertical device pixels per DIP.
    pub scale_y: f64,
    pub bounds_pix: Rect,
    pub bounds_dip: Rect,
    /// Monitor area minus task bars and docks.
    pub working_area_pix: Rect,
    pub working_area_dip: Rect,
    pub device_name: String,
    pub primary: bool,
}

impl Default for Screen {
    fn default() -> Self {
        let full = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        Self::from_pixels(full, full, 1.0, 1.0)
    }
}

impl Screen {
    /// Build a screen from pixel rectangles; the DIP rectangles are derived by
    /// dividing each axis by its scale factor.
    pub fn from_pixels(bounds_pix: Rect, working_area_pix: Rect, scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            bounds_pix,
            bounds_dip: bounds_pix.scaled_down(scale_x, scale_y),
            working_area_pix,
            working_area_dip: working_area_pix.scaled_down(scale_x, scale_y),
            device_name: String::new(),
            primary: false,
        }
    }

    /// Build a screen from DIP rectangles and a uniform scale (what egui reports).
    pub fn from_dips(bounds_dip: Rect, working_area_dip: Rect, scale: f64) -> Self {
        let up = |r: Rect| Rect::new(r.left * scale, r.top * scale, r.width * scale, r.height * scale);
        Self {
            scale_x: scale,
            scale_y: scale,
            bounds_pix: up(bounds_dip),
            bounds_dip,
            working_area_pix: up(working_area_dip),
            working_area_dip,
            device_name: String::new(),
            primary: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>, primary: bool) -> Self {
        self.device_name = name.into();
        self.primary = primary;
        self
    }

    /// Device pixels per DIP along the given axis.
    pub fn scale(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.scale_x,
            Orientation::Vertical => self.scale_y,
        }
    }

    /// Working-area extent in DIPs along the given axis (the 100% of percent units).
    pub fn working_extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.working_area_dip.width,
            Orientation::Vertical => self.working_area_dip.height,
        }
    }

    /// The monitor containing `point` (in DIPs), or the nearest one when the
    /// point lies outside every monitor. `None` only for an empty list.
    pub fn from_point(screens: &[Screen], point: Point) -> Option<&Screen> {
        screens
            .iter()
            .find(|s| s.bounds_dip.contains(point))
            .or_else(|| {
                screens.iter().min_by(|a, b| {
                    a.bounds_dip
                        .distance_sq(point)
                        .total_cmp(&b.bounds_dip.distance_sq(point))
                })
            })
    }

    /// Monitor under the center of a window rectangle (DIPs).
    pub fn from_window(screens: &[Screen], window: Rect) -> Option<&Screen> {
        Self::from_point(screens, window.center())
    }

    /// Enumerate all attached monitors.
    ///
    /// display-info does not report the working area, so it is taken to be the
    /// full monitor bounds.
    #[cfg(feature = "display_info")]
    pub fn all() -> Vec<Screen> {
        match display_info::DisplayInfo::all() {
            Ok(list) => list
                .into_iter()
                .map(|d| {
                    let scale = if d.scale_factor > 0.0 { d.scale_factor as f64 } else { 1.0 };
                    let bounds = Rect::new(d.x as f64, d.y as f64, d.width as f64, d.height as f64);
                    Screen::from_pixels(bounds, bounds, scale, scale).with_name(d.name, d.is_primary)
                })
                .collect(),
            Err(e) => {
                tracing::warn!("display enumeration failed: {e}");
                Vec::new()
            }
        }
    }
}
