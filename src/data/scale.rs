//! Scale layout: the ticks, labels, cursor readout and markers a ruler of a
//! given size shows, computed without touching any drawing API.
//!
//! Positions are DIPs along the ruler axis measured from the window's left
//! (horizontal) or top (vertical) edge; the zero point decides whether unit
//! values grow away from that edge or towards it.

use super::geometry::{Point, Size};
use super::label::format_value;
use super::screen::Screen;
use super::ticks::{TickKind, TickSpec};
use super::units::{convert, to_dip_from_zero, Orientation, Units, ZeroPoint};
use crate::error::Result;

/// Distance of the label row from the tick edge on a horizontal ruler.
pub const LABEL_INSET: f64 = 32.0;
/// Distance of the label column from the tick edge on a vertical ruler.
pub const VERTICAL_LABEL_INSET: f64 = 20.0;

/// One graduation of the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMark {
    /// Value in scale units (distance from the zero point).
    pub unit_value: f64,
    /// DIP offset along the axis from the near window edge.
    pub position: f64,
    pub kind: TickKind,
    pub label: Option<String>,
}

/// Everything about a ruler that shapes its scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    /// Window size in DIPs.
    pub size: Size,
    pub units: Units,
    pub orientation: Orientation,
    pub zero_point: ZeroPoint,
    /// Ticks hang from the opposite edge.
    pub flip: bool,
}

impl ScaleParams {
    /// Length of the measuring axis in DIPs.
    pub fn length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.size.width,
            Orientation::Vertical => self.size.height,
        }
    }

    fn to_position(&self, unit_value: f64, screen: &Screen) -> f64 {
        to_dip_from_zero(
            unit_value,
            self.length(),
            self.zero_point,
            self.units,
            self.orientation,
            screen,
        )
    }

    /// All tick marks and labels of the scale, in increasing unit order.
    ///
    /// Unit values are generated as `i * step` so long rulers do not drift,
    /// and each step is classified by its index (see [`TickSpec::classify_step`]).
    ///
    /// # Errors
    /// Propagates [`crate::error::RulerError::InvalidModulus`] from the tick
    /// classifier; the built-in tables never trigger it.
    pub fn marks(&self, screen: &Screen) -> Result<Vec<ScaleMark>> {
        self.marks_with(&TickSpec::for_units(self.units), screen)
    }

    /// [`marks`](Self::marks) with a caller-supplied tick table.
    pub fn marks_with(&self, spec: &TickSpec, screen: &Screen) -> Result<Vec<ScaleMark>> {
        let units_size = convert(self.length(), self.units, self.orientation, screen);
        let mut marks = Vec::new();
        let mut i: u64 = 0;
        loop {
            let index = i;
            let unit_value = index as f64 * spec.step;
            if !(unit_value < units_size) {
                break;
            }
            i += 1;
            let kind = spec.classify_step(index)?;
            let label = if spec.is_label_step(index)? {
                Some(format_value(unit_value, self.units))
            } else {
                None
            };
            if kind == TickKind::None && label.is_none() {
                continue;
            }
            marks.push(ScaleMark {
                unit_value,
                position: self.to_position(unit_value, screen),
                kind,
                label,
            });
        }
        Ok(marks)
    }

    /// End points of a tick of `length` at `location` along the axis.
    pub fn tick_line(&self, location: f64, length: f64) -> (Point, Point) {
        let Size { width, height } = self.size;
        match self.orientation {
            Orientation::Horizontal => {
                let (y1, y2) = if self.flip {
                    (height, height - length)
                } else {
                    (0.0, length)
                };
                (Point::new(location, y1), Point::new(location, y2))
            }
            Orientation::Vertical => {
                let (x1, x2) = if self.flip {
                    (0.0, length)
                } else {
                    (width - length, width)
                };
                (Point::new(x1, location), Point::new(x2, location))
            }
        }
    }

    /// Top-left corner of a tick label centred on `position`, clamped inside the ruler.
    pub fn label_origin(&self, position: f64, label: Size) -> Point {
        let Size { width, height } = self.size;
        match self.orientation {
            Orientation::Horizontal => {
                let x = (position - label.width / 2.0).min(width - label.width - 1.0).max(1.0);
                let y = if self.flip {
                    height - label.height - LABEL_INSET
                } else {
                    LABEL_INSET
                };
                Point::new(x, y)
            }
            Orientation::Vertical => {
                let x = if self.flip {
                    VERTICAL_LABEL_INSET
                } else {
                    width - label.width - VERTICAL_LABEL_INSET
                };
                let y = (position - label.height / 2.0).min(height - label.height).max(0.0);
                Point::new(x, y)
            }
        }
    }

    /// Top-left corner of a readout text next to the line at `position`.
    ///
    /// Readouts sit just before their line unless that would leave the ruler;
    /// `stacked` is the height of text already placed in the same row so
    /// several readouts on a horizontal ruler do not overlap.
    pub fn readout_origin(&self, position: f64, text: Size, stacked: f64) -> Point {
        let Size { width, height } = self.size;
        match self.orientation {
            Orientation::Horizontal => {
                let x = if position - text.width - 6.0 < 0.0 {
                    position + 1.0
                } else {
                    position - text.width - 6.0
                };
                let y = if self.flip {
                    height - text.height - stacked - LABEL_INSET
                } else {
                    LABEL_INSET + stacked
                };
                Point::new(x, y)
            }
            Orientation::Vertical => {
                let x = if self.flip { width - text.width - 4.0 } else { 4.0 };
                let y = if position - text.height - 1.0 < 0.0 {
                    position + 1.0
                } else {
                    position - text.height - 1.0
                };
                Point::new(x, y)
            }
        }
    }

    /// Offsets passed as `stacked` to [`readout_origin`](Self::readout_origin)
    /// for the cursor readout and for the markers.
    ///
    /// On a horizontal ruler the readout sits in the row after the tick labels
    /// and the markers in the row after the readout. Vertical readouts sit
    /// beside their line and never share a row.
    pub fn readout_rows(&self, label_height: f64, readout_height: f64) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (label_height, label_height + readout_height),
            Orientation::Vertical => (0.0, 0.0),
        }
    }

    /// Cursor position along the axis, measured from the zero point, in scale units.
    ///
    /// `track` is the window-relative track point in DIPs.
    pub fn track_value(&self, track: Point, screen: &Screen) -> f64 {
        let along = match self.orientation {
            Orientation::Horizontal => track.x,
            Orientation::Vertical => track.y,
        };
        let from_zero = to_dip_from_zero(
            along,
            self.length(),
            self.zero_point,
            Units::Dip,
            self.orientation,
            screen,
        );
        convert(from_zero, self.units, self.orientation, screen)
    }

    /// Markers inside `(0, length]` with their labels, in the order given.
    ///
    /// A marker is labelled with the value the cursor readout shows at the
    /// same spot, so it counts from the zero point like the readout does.
    pub fn visible_markers(&self, markers: &[f64], screen: &Screen) -> Vec<(f64, String)> {
        let length = self.length();
        markers
            .iter()
            .copied()
            .filter(|m| *m > 0.0 && *m <= length)
            .map(|m| {
                let along = match self.orientation {
                    Orientation::Horizontal => Point::new(m, 0.0),
                    Orientation::Vertical => Point::new(0.0, m),
                };
                (m, format_value(self.track_value(along, screen), self.units))
            })
            .collect()
    }
}
