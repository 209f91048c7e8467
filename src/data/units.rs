//! Unit systems and the DIP ⇄ unit converter.
//!
//! All ruler geometry is kept in device-independent units (96 per inch at 100%
//! scale). The functions here translate a DIP length along one axis into the
//! unit the scale is showing, and back again.
//!
//! Two units depend on the monitor and therefore take a [`Screen`]:
//! * **Pixel** uses the per-axis DPI scale factor.
//! * **Percent** is relative to the working area of the monitor the ruler is
//!   on, so it only round-trips while that geometry stays the same.
//!
//! The Point conversion is deliberately lossy in one direction: DIP → point
//! rounds up to a whole point, point → DIP is exact.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::screen::Screen;

pub const DIPS_PER_INCH: f64 = 96.0;
pub const POINTS_PER_INCH: f64 = 72.0;
pub const CM_PER_INCH: f64 = 2.54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Units {
    Pixel,
    #[default]
    Dip,
    Point,
    Cm,
    Inch,
    Percent,
}

impl Units {
    /// All unit systems in menu/hotkey order (`1`..`6`).
    pub const ALL: [Units; 6] = [
        Units::Pixel,
        Units::Dip,
        Units::Point,
        Units::Cm,
        Units::Inch,
        Units::Percent,
    ];

    /// Short suffix used in readouts and menus.
    pub fn suffix(&self) -> &'static str {
        match self {
            Units::Pixel => "px",
            Units::Dip => "dip",
            Units::Point => "pt",
            Units::Cm => "cm",
            Units::Inch => "in",
            Units::Percent => "%",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Units::Pixel => "Pixels",
            Units::Dip => "DIPs",
            Units::Point => "Points",
            Units::Cm => "Centimeters",
            Units::Inch => "Inches",
            Units::Percent => "Percent",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn other(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Which end of the ruler axis is the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZeroPoint {
    /// Left edge (horizontal) or top edge (vertical).
    #[default]
    Near,
    /// Right edge (horizontal) or bottom edge (vertical).
    Far,
}

/// Window edge carrying the tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Round half-to-even at `digits` decimals.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round_ties_even() / factor
}

/// Convert a DIP length along `orientation` into `units`.
pub fn convert(dip: f64, units: Units, orientation: Orientation, screen: &Screen) -> f64 {
    match units {
        Units::Pixel => dip * screen.scale(orientation),
        Units::Dip => dip,
        Units::Point => (dip * POINTS_PER_INCH / DIPS_PER_INCH).ceil(),
        Units::Inch => dip / DIPS_PER_INCH,
        Units::Cm => round_to(dip * CM_PER_INCH / DIPS_PER_INCH, 2),
        Units::Percent => round_to(dip * 100.0 / screen.working_extent(orientation), 2),
    }
}

/// Convert a length in `units` along `orientation` back into DIPs.
pub fn to_dip(value: f64, units: Units, orientation: Orientation, screen: &Screen) -> f64 {
    match units {
        Units::Pixel => value / screen.scale(orientation),
        Units::Dip => value,
        Units::Point => value * DIPS_PER_INCH / POINTS_PER_INCH,
        Units::Inch => value * DIPS_PER_INCH,
        Units::Cm => value * DIPS_PER_INCH / CM_PER_INCH,
        Units::Percent => value * screen.working_extent(orientation) / 100.0,
    }
}

/// Map a distance measured from the zero point into an absolute `0..=max_value`
/// DIP coordinate along the axis. With the zero point at the far end the
/// scale is mirrored.
pub fn to_dip_from_zero(
    value: f64,
    max_value: f64,
    zero_point: ZeroPoint,
    units: Units,
    orientation: Orientation,
    screen: &Screen,
) -> f64 {
    let value_in_dip = to_dip(value, units, orientation, screen);
    match zero_point {
        ZeroPoint::Near => value_in_dip,
        ZeroPoint::Far => max_value - value_in_dip,
    }
}
