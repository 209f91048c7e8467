//! Minimal f64 geometry in device-independent units (DIPs).
//!
//! egui works in `f32` points; the measurement core stays in `f64` so that
//! tick classification and unit rounding behave the same at any ruler length.
//! Conversions to and from egui types live in the painters.

/// A point in screen-relative DIPs (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inclusive containment on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Squared distance from `p` to the closest point of the rectangle (0 inside).
    pub fn distance_sq(&self, p: Point) -> f64 {
        let dx = (self.left - p.x).max(0.0).max(p.x - self.right());
        let dy = (self.top - p.y).max(0.0).max(p.y - self.bottom());
        dx * dx + dy * dy
    }

    /// Divide the horizontal components by `sx` and the vertical ones by `sy`.
    pub fn scaled_down(&self, sx: f64, sy: f64) -> Rect {
        Rect::new(self.left / sx, self.top / sy, self.width / sx, self.height / sy)
    }
}

/// Point on a circle around `center` at `degrees` (0° = +x, clockwise on screen).
pub fn point_at_angle(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// End point of an arc of `sweep_degrees` starting at `start_degrees`.
///
/// The start angle is folded into `(-∞, 360]` and the sweep magnitude into
/// `[0, 180]`; a counterclockwise sweep subtracts from the start angle.
pub fn end_point_on_radius(
    center: Point,
    radius: f64,
    mut start_degrees: f64,
    sweep_degrees: f64,
    counterclockwise: bool,
) -> Point {
    while start_degrees > 360.0 {
        start_degrees -= 360.0;
    }
    let mut sweep = sweep_degrees.abs();
    while sweep > 180.0 {
        sweep -= 180.0;
    }
    if counterclockwise {
        sweep = -sweep;
    }
    point_at_angle(center, radius, start_degrees + sweep)
}
