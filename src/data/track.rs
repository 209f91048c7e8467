//! Turn a screen cursor position into the ruler's track point.

use super::geometry::{Point, Rect};
use super::units::{Edge, Orientation};

/// Window-relative track point for the cursor at `cursor` (both in screen DIPs).
///
/// Along the measuring axis the value is clamped to the ruler: 0 while the
/// cursor is before the window, the full length once it is past it. Across
/// the axis it is the signed distance between the cursor and the active edge.
pub fn track_point(window: Rect, cursor: Point, orientation: Orientation, edge: Edge) -> Point {
    match orientation {
        Orientation::Horizontal => {
            let x = along(cursor.x, window.left, window.right());
            let y = if edge == Edge::Top {
                window.top - cursor.y
            } else {
                window.bottom() - cursor.y
            };
            Point::new(x, y)
        }
        Orientation::Vertical => {
            let y = along(cursor.y, window.top, window.bottom());
            let x = if edge == Edge::Right {
                cursor.x - window.right()
            } else {
                cursor.x - window.left
            };
            Point::new(x, y)
        }
    }
}

fn along(pos: f64, start: f64, end: f64) -> f64 {
    if pos > end {
        end - start
    } else if pos >= start {
        pos - start
    } else {
        0.0
    }
}
