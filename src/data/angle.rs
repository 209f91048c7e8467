//! Angle gauge geometry: which arc to draw between the ruler axis and the
//! line from the ruler origin to the cursor, and where to put its label.
//!
//! Angles are in degrees with 0° pointing right and positive angles turning
//! clockwise on screen (y grows downward). The arc always starts on the ruler
//! axis at the zero point and its sweep is reported as a non-negative
//! magnitude; the direction is carried only by [`SweepDirection`].

use super::geometry::{end_point_on_radius, point_at_angle, Point, Size};
use super::units::{Orientation, ZeroPoint};

/// Gap between the arc and its label.
pub const LABEL_GAP: f64 = 12.0;

/// Position of the cursor relative to the origin, classified on the sign of
/// `origin - cursor`.
///
/// The names follow screen space as the rest of the gauge does, and are not
/// the mathematical quadrants: `TopRight` means `dy >= 0 && dx < 0`, i.e.
/// the cursor is above and to the right of the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// `dy = origin.y - point.y`, `dx = origin.x - point.x`.
    pub fn classify(dy: f64, dx: f64) -> Self {
        if dy >= 0.0 && dx < 0.0 {
            Quadrant::TopRight
        } else if dy >= 0.0 && dx >= 0.0 {
            Quadrant::TopLeft
        } else if dy < 0.0 && dx >= 0.0 {
            Quadrant::BottomLeft
        } else {
            Quadrant::BottomRight
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    Clockwise,
    Counterclockwise,
}

/// Everything needed to draw the gauge arc and place its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    pub quadrant: Quadrant,
    pub start_degrees: f64,
    /// Arc length in degrees, never negative.
    pub sweep_degrees: f64,
    pub sweep_direction: SweepDirection,
    /// Shift the label left by its own width so it does not cover the arc.
    pub text_offset: bool,
}

#[derive(Debug, Clone, Copy)]
enum Sweep {
    /// The base angle itself.
    Angle,
    /// `180 - angle`.
    Supplement,
}

/// The fixed layout table, one entry per orientation × zero point × quadrant.
fn arc_rule(
    orientation: Orientation,
    zero_point: ZeroPoint,
    quadrant: Quadrant,
) -> (f64, Sweep, SweepDirection, bool) {
    use Quadrant::*;
    use SweepDirection::*;

    match (orientation, zero_point, quadrant) {
        // horizontal, zero on the left
        (Orientation::Horizontal, ZeroPoint::Near, TopRight) => (0.0, Sweep::Angle, Counterclockwise, false),
        (Orientation::Horizontal, ZeroPoint::Near, TopLeft) => (0.0, Sweep::Supplement, Counterclockwise, false),
        (Orientation::Horizontal, ZeroPoint::Near, BottomLeft) => (0.0, Sweep::Supplement, Clockwise, false),
        (Orientation::Horizontal, ZeroPoint::Near, BottomRight) => (0.0, Sweep::Angle, Clockwise, false),
        // horizontal, zero on the right
        (Orientation::Horizontal, ZeroPoint::Far, TopRight) => (180.0, Sweep::Supplement, Clockwise, true),
        (Orientation::Horizontal, ZeroPoint::Far, TopLeft) => (180.0, Sweep::Angle, Clockwise, true),
        (Orientation::Horizontal, ZeroPoint::Far, BottomLeft) => (180.0, Sweep::Angle, Counterclockwise, true),
        (Orientation::Horizontal, ZeroPoint::Far, BottomRight) => (180.0, Sweep::Supplement, Counterclockwise, true),
        // vertical, zero at the top (arc starts pointing down)
        (Orientation::Vertical, ZeroPoint::Near, TopRight) => (90.0, Sweep::Supplement, Counterclockwise, false),
        (Orientation::Vertical, ZeroPoint::Near, TopLeft) => (90.0, Sweep::Supplement, Clockwise, true),
        (Orientation::Vertical, ZeroPoint::Near, BottomLeft) => (90.0, Sweep::Angle, Clockwise, true),
        (Orientation::Vertical, ZeroPoint::Near, BottomRight) => (90.0, Sweep::Angle, Counterclockwise, false),
        // vertical, zero at the bottom (arc starts pointing up)
        (Orientation::Vertical, ZeroPoint::Far, TopRight) => (-90.0, Sweep::Angle, Clockwise, false),
        (Orientation::Vertical, ZeroPoint::Far, TopLeft) => (-90.0, Sweep::Angle, Counterclockwise, true),
        (Orientation::Vertical, ZeroPoint::Far, BottomLeft) => (-90.0, Sweep::Supplement, Counterclockwise, true),
        (Orientation::Vertical, ZeroPoint::Far, BottomRight) => (-90.0, Sweep::Supplement, Clockwise, false),
    }
}

/// Angle in degrees between the ruler axis and the vector `(dx, dy)`, in `[0, 90]`.
///
/// A zero denominator gives 0° on a horizontal ruler and 90° on a vertical
/// one instead of NaN.
pub fn base_angle(dy: f64, dx: f64, orientation: Orientation) -> f64 {
    let radians = match orientation {
        Orientation::Horizontal if dx != 0.0 => (dy.abs() / dx.abs()).atan(),
        Orientation::Horizontal => 0.0,
        Orientation::Vertical if dy != 0.0 => (dx.abs() / dy.abs()).atan(),
        Orientation::Vertical => std::f64::consts::FRAC_PI_2,
    };
    radians.to_degrees()
}

/// Lay out the gauge arc from `origin` (the ruler's zero point) towards `point`.
pub fn compute_arc(origin: Point, point: Point, orientation: Orientation, zero_point: ZeroPoint) -> ArcLayout {
    let dy = origin.y - point.y;
    let dx = origin.x - point.x;
    let quadrant = Quadrant::classify(dy, dx);
    let angle = base_angle(dy, dx, orientation);
    let (start_degrees, sweep, sweep_direction, text_offset) = arc_rule(orientation, zero_point, quadrant);
    let sweep_degrees = match sweep {
        Sweep::Angle => angle,
        Sweep::Supplement => 180.0 - angle,
    };
    ArcLayout {
        quadrant,
        start_degrees,
        sweep_degrees,
        sweep_direction,
        text_offset,
    }
}

/// Radius of the gauge arc: two thirds of the larger side of the box spanned
/// by origin and cursor.
pub fn arc_radius(origin: Point, point: Point) -> f64 {
    let w = (origin.x - point.x).abs();
    let h = (origin.y - point.y).abs();
    w.max(h) * 2.0 / 3.0
}

/// Foot of the perpendicular dropped from `point` onto the ruler axis through `origin`.
pub fn perpendicular_foot(origin: Point, point: Point, orientation: Orientation) -> Point {
    match orientation {
        Orientation::Horizontal => Point::new(point.x, origin.y),
        Orientation::Vertical => Point::new(origin.x, point.y),
    }
}

impl ArcLayout {
    fn counterclockwise(&self) -> bool {
        self.sweep_direction == SweepDirection::Counterclockwise
    }

    /// Signed end angle of the arc.
    pub fn end_degrees(&self) -> f64 {
        if self.counterclockwise() {
            self.start_degrees - self.sweep_degrees
        } else {
            self.start_degrees + self.sweep_degrees
        }
    }

    /// Top-left corner of the angle label of size `label`.
    ///
    /// The label sits on the arc bisector at `radius + LABEL_GAP`, vertically
    /// centred, and moved left by its width when `text_offset` is set.
    pub fn text_anchor(&self, origin: Point, radius: f64, label: Size) -> Point {
        let on_bisector = end_point_on_radius(
            origin,
            radius + LABEL_GAP,
            self.start_degrees,
            self.sweep_degrees / 2.0,
            self.counterclockwise(),
        );
        let dx = if self.text_offset { -label.width } else { 0.0 };
        on_bisector.offset(dx, -label.height / 2.0)
    }

    /// Polyline approximation of the arc with `segments` segments (at least one).
    pub fn points(&self, origin: Point, radius: f64, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let start = self.start_degrees;
        let delta = self.end_degrees() - start;
        (0..=segments)
            .map(|i| point_at_angle(origin, radius, start + delta * i as f64 / segments as f64))
            .collect()
    }
}
