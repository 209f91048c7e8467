//! Text for scale labels, cursor readouts and the angle gauge.

use super::fraction::{format_inches, DEFAULT_MAX_DENOMINATOR};
use super::units::{round_to, Units};

/// Format a value already expressed in `units` the way the scale shows it.
///
/// * Inches render as fractions (`2 ³⁄₈`).
/// * Centimeters round to two decimals, percent to one.
/// * Everything else prints the shortest decimal that round-trips (`50`, `12.5`).
pub fn format_value(value: f64, units: Units) -> String {
    let value = match units {
        Units::Inch => return format_inches(value, DEFAULT_MAX_DENOMINATOR),
        Units::Cm => round_to(value, 2),
        Units::Percent => round_to(value, 1),
        Units::Pixel | Units::Dip | Units::Point => value,
    };
    // avoid printing "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// Like [`format_value`] with the unit suffix appended (`"12.5 pt"`).
pub fn format_readout(value: f64, units: Units) -> String {
    match units {
        Units::Inch => format!("{}\"", format_value(value, units)),
        Units::Percent => format!("{}%", format_value(value, units)),
        _ => format!("{} {}", format_value(value, units), units.suffix()),
    }
}

/// Angle label with two decimals and a degree sign (`"45.00°"`).
pub fn format_angle(degrees: f64) -> String {
    format!("{:.2}\u{00B0}", degrees)
}
