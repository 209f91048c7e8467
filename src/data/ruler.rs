//! Ruler view state.
//!
//! [`RulerState`] holds the user-facing settings of the ruler (orientation,
//! units, zero point, flip), its window geometry and the live cursor data.
//! Several fields are derived from others; every setter ends in
//! [`RulerState::recompute`] so the derived fields never go stale.

use super::angle::{compute_arc, ArcLayout};
use super::geometry::{Point, Rect, Size};
use super::scale::ScaleParams;
use super::track::track_point;
use super::units::{Edge, Orientation, Units, ZeroPoint};

/// Shortest allowed ruler length along either axis, in DIPs.
pub const MIN_AXIS: f64 = 20.0;

/// Width of the grab zone at each end of the ruler that resizes instead of moving.
pub const RESIZE_GRIP: f64 = 4.0;

/// Per-edge widths of the resize grab zones (0 means the edge does not resize).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeBorder {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ResizeBorder {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The edge whose grab zone contains the window-relative point `p`, if any.
    pub fn hit(&self, size: Size, p: Point) -> Option<Edge> {
        if self.left > 0.0 && p.x < self.left {
            Some(Edge::Left)
        } else if self.right > 0.0 && p.x > size.width - self.right {
            Some(Edge::Right)
        } else if self.top > 0.0 && p.y < self.top {
            Some(Edge::Top)
        } else if self.bottom > 0.0 && p.y > size.height - self.bottom {
            Some(Edge::Bottom)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RulerState {
    // ── settings ────────────────────────────────────────────────────────────
    pub orientation: Orientation,
    pub units: Units,
    pub zero_point: ZeroPoint,
    pub flip: bool,
    /// Ruler length along its measuring axis.
    pub long_axis: f64,
    /// Ruler thickness.
    pub short_axis: f64,
    pub left: f64,
    pub top: f64,

    // ── derived (see `recompute`) ───────────────────────────────────────────
    pub width: f64,
    pub height: f64,
    /// Edge carrying the ticks.
    pub active_edge: Edge,
    /// Only the two ends of the ruler resize.
    pub resize_border: ResizeBorder,
    /// Screen position of the zero point on the tick edge.
    pub origin: Point,

    // ── live ────────────────────────────────────────────────────────────────
    /// Cursor in window-relative ruler coordinates (see [`track_point`]).
    pub track_point: Point,
    /// Cursor in screen DIPs.
    pub mouse_point: Point,
    /// User markers as DIP offsets along the axis.
    pub markers: Vec<f64>,
    pub angle_visible: bool,
    /// Draw the perpendicular from the cursor to the axis in the angle overlay.
    pub perpendicular: bool,
}

impl Default for RulerState {
    fn default() -> Self {
        let mut s = Self {
            orientation: Orientation::Horizontal,
            units: Units::Dip,
            zero_point: ZeroPoint::Near,
            flip: false,
            long_axis: 800.0,
            short_axis: 80.0,
            left: 200.0,
            top: 400.0,
            width: 0.0,
            height: 0.0,
            active_edge: Edge::Top,
            resize_border: ResizeBorder::default(),
            origin: Point::default(),
            track_point: Point::default(),
            mouse_point: Point::default(),
            markers: Vec::new(),
            angle_visible: false,
            perpendicular: false,
        };
        s.recompute();
        s
    }
}

impl RulerState {
    /// A ruler occupying `rect` (screen DIPs); the longer side becomes the long axis.
    pub fn with_rect(orientation: Orientation, rect: Rect) -> Self {
        let mut s = Self {
            orientation,
            left: rect.left,
            top: rect.top,
            ..Self::default()
        };
        let (long, short) = match orientation {
            Orientation::Horizontal => (rect.width, rect.height),
            Orientation::Vertical => (rect.height, rect.width),
        };
        s.long_axis = long.max(MIN_AXIS);
        s.short_axis = short.max(MIN_AXIS);
        s.recompute();
        s
    }

    /// Re-derive window size, active edge, resize border and origin from the settings.
    pub fn recompute(&mut self) {
        match self.orientation {
            Orientation::Horizontal => {
                self.width = self.long_axis;
                self.height = self.short_axis;
                self.active_edge = if self.flip { Edge::Bottom } else { Edge::Top };
                self.resize_border = ResizeBorder::new(RESIZE_GRIP, 0.0, RESIZE_GRIP, 0.0);
                let x = match self.zero_point {
                    ZeroPoint::Near => self.left,
                    ZeroPoint::Far => self.left + self.width,
                };
                let y = if self.flip { self.top + self.height } else { self.top };
                self.origin = Point::new(x, y);
            }
            Orientation::Vertical => {
                self.width = self.short_axis;
                self.height = self.long_axis;
                self.active_edge = if self.flip { Edge::Left } else { Edge::Right };
                self.resize_border = ResizeBorder::new(0.0, RESIZE_GRIP, 0.0, RESIZE_GRIP);
                let x = if self.flip { self.left } else { self.left + self.width };
                let y = match self.zero_point {
                    ZeroPoint::Near => self.top,
                    ZeroPoint::Far => self.top + self.height,
                };
                self.origin = Point::new(x, y);
            }
        }
    }

    pub fn window_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn scale_params(&self) -> ScaleParams {
        ScaleParams {
            size: self.size(),
            units: self.units,
            orientation: self.orientation,
            zero_point: self.zero_point,
            flip: self.flip,
        }
    }

    /// Gauge arc from the origin towards the current mouse point.
    pub fn arc(&self) -> ArcLayout {
        compute_arc(self.origin, self.mouse_point, self.orientation, self.zero_point)
    }

    // ── setters ─────────────────────────────────────────────────────────────

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.recompute();
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = units;
        self.recompute();
    }

    pub fn set_zero_point(&mut self, zero_point: ZeroPoint) {
        self.zero_point = zero_point;
        self.recompute();
    }

    pub fn set_flip(&mut self, flip: bool) {
        self.flip = flip;
        self.recompute();
    }

    pub fn set_position(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
        self.recompute();
    }

    /// Move the window by `(dx, dy)` DIPs.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.set_position(self.left + dx, self.top + dy);
    }

    /// Set the window width; on a vertical ruler that is the thickness.
    pub fn set_width(&mut self, width: f64) {
        let width = width.max(MIN_AXIS);
        match self.orientation {
            Orientation::Horizontal => self.long_axis = width,
            Orientation::Vertical => self.short_axis = width,
        }
        self.recompute();
    }

    /// Set the window height; on a horizontal ruler that is the thickness.
    pub fn set_height(&mut self, height: f64) {
        let height = height.max(MIN_AXIS);
        match self.orientation {
            Orientation::Horizontal => self.short_axis = height,
            Orientation::Vertical => self.long_axis = height,
        }
        self.recompute();
    }

    pub fn set_size(&mut self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }

    /// Lengthen (or, for negative `delta`, shorten) the ruler along its axis.
    pub fn grow(&mut self, delta: f64) {
        self.long_axis = (self.long_axis + delta).max(MIN_AXIS);
        self.recompute();
    }

    /// Feed a fresh cursor position (screen DIPs). Returns whether the track point moved.
    pub fn update_cursor(&mut self, cursor: Point) -> bool {
        self.mouse_point = cursor;
        let tp = track_point(self.window_rect(), cursor, self.orientation, self.active_edge);
        let changed = tp != self.track_point;
        self.track_point = tp;
        changed
    }

    pub fn toggle_angle(&mut self) {
        self.angle_visible = !self.angle_visible;
    }

    pub fn toggle_perpendicular(&mut self) {
        self.perpendicular = !self.perpendicular;
    }

    // ── markers ─────────────────────────────────────────────────────────────

    /// Drop a marker at the current track position along the axis.
    pub fn set_marker(&mut self) {
        let at = match self.orientation {
            Orientation::Horizontal => self.track_point.x,
            Orientation::Vertical => self.track_point.y,
        };
        if at > 0.0 && !self.markers.contains(&at) {
            self.markers.push(at);
        }
    }

    /// Remove the most recently placed marker.
    pub fn remove_marker(&mut self) -> Option<f64> {
        self.markers.pop()
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }
}
