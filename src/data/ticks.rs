//! Tick tables and tick classification for the ruler scale.
//!
//! Each unit system has a fixed [`TickSpec`]: the scale walks the axis in
//! multiples of `step` and asks, for every position, which tick level (if any)
//! it falls on. Levels are tested from the longest tick down so that a label
//! position always gets the longest mark.

use super::units::{Orientation, Units};
use crate::error::{Result, RulerError};

/// Threshold value meaning "this tick level never matches".
pub const DISABLED: f64 = f64::MAX;

/// Visual prominence of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TickKind {
    None,
    Small,
    Medium,
    MediumLarge,
    Large,
}

impl TickKind {
    /// Rendered length in DIPs. Vertical rulers are narrower and use half length.
    pub fn length(&self, orientation: Orientation) -> f64 {
        let horizontal = match self {
            TickKind::None => 0.0,
            TickKind::Small => 8.0,
            TickKind::Medium => 16.0,
            TickKind::MediumLarge => 24.0,
            TickKind::Large => 32.0,
        };
        match orientation {
            Orientation::Horizontal => horizontal,
            Orientation::Vertical => horizontal / 2.0,
        }
    }
}

/// Tick thresholds for one unit system, all expressed in that unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpec {
    pub step: f64,
    pub small: f64,
    pub medium: f64,
    pub medium_large: f64,
    pub large: f64,
    pub label: f64,
}

const PIXEL_TICKS: TickSpec = TickSpec::table(0.5, 5.0, 10.0, DISABLED, 100.0, 100.0);
const DIP_TICKS: TickSpec = TickSpec::table(1.0, 5.0, 10.0, DISABLED, 50.0, 50.0);
const POINT_TICKS: TickSpec = TickSpec::table(0.5, 5.0, 10.0, DISABLED, 50.0, 50.0);
const INCH_TICKS: TickSpec = TickSpec::table(1.0 / 16.0, 1.0 / 16.0, 1.0 / 4.0, 1.0 / 2.0, 1.0, 1.0);
const CM_TICKS: TickSpec = TickSpec::table(1.0 / 500.0, DISABLED, 1.0 / 10.0, DISABLED, 1.0, 1.0);
const PERCENT_TICKS: TickSpec = TickSpec::table(0.5, 0.5, 1.0, DISABLED, 5.0, 5.0);

impl TickSpec {
    const fn table(step: f64, small: f64, medium: f64, medium_large: f64, large: f64, label: f64) -> Self {
        Self {
            step,
            small,
            medium,
            medium_large,
            large,
            label,
        }
    }

    /// Build a custom spec; the step must be finite and positive.
    pub fn new(
        step: f64,
        small: f64,
        medium: f64,
        medium_large: f64,
        large: f64,
        label: f64,
    ) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(RulerError::InvalidStep(step));
        }
        Ok(Self::table(step, small, medium, medium_large, large, label))
    }

    /// The built-in table entry for `units`.
    pub fn for_units(units: Units) -> Self {
        match units {
            Units::Pixel => PIXEL_TICKS,
            Units::Dip => DIP_TICKS,
            Units::Point => POINT_TICKS,
            Units::Inch => INCH_TICKS,
            Units::Cm => CM_TICKS,
            Units::Percent => PERCENT_TICKS,
        }
    }

    /// Tick level at `unit_value`; the first matching level from large down wins.
    pub fn classify(&self, unit_value: f64) -> Result<TickKind> {
        let levels = [
            (self.large, TickKind::Large),
            (self.medium_large, TickKind::MediumLarge),
            (self.medium, TickKind::Medium),
            (self.small, TickKind::Small),
        ];
        for (threshold, kind) in levels {
            if modulo(unit_value, threshold, self.step)? {
                return Ok(kind);
            }
        }
        Ok(TickKind::None)
    }

    /// Whether `unit_value` carries a text label.
    pub fn is_label(&self, unit_value: f64) -> Result<bool> {
        modulo(unit_value, self.label, self.step)
    }

    /// Tick level of the `index`-th step of the scale (`index * step`).
    ///
    /// Thresholds that are whole multiples of `step` match on the index, so
    /// rounding in `index * step` cannot land one step early inside the
    /// `modulo` window. Other thresholds go through [`modulo`].
    pub fn classify_step(&self, index: u64) -> Result<TickKind> {
        let levels = [
            (self.large, TickKind::Large),
            (self.medium_large, TickKind::MediumLarge),
            (self.medium, TickKind::Medium),
            (self.small, TickKind::Small),
        ];
        for (threshold, kind) in levels {
            if self.on_step(index, threshold)? {
                return Ok(kind);
            }
        }
        Ok(TickKind::None)
    }

    /// Whether the `index`-th step carries a text label.
    pub fn is_label_step(&self, index: u64) -> Result<bool> {
        self.on_step(index, self.label)
    }

    fn on_step(&self, index: u64, threshold: f64) -> Result<bool> {
        match self.steps_per(threshold) {
            Some(n) => Ok(index % n == 0),
            None => modulo(index as f64 * self.step, threshold, self.step),
        }
    }

    /// `threshold / step` when it is a whole number of steps.
    fn steps_per(&self, threshold: f64) -> Option<u64> {
        if threshold == DISABLED || !threshold.is_finite() {
            return None;
        }
        let ratio = threshold / self.step;
        let n = ratio.round();
        (n >= 1.0 && (ratio - n).abs() < 1e-6).then_some(n as u64)
    }
}

/// True iff `a` sits on a multiple of `b` or at most `max_delta` before it.
///
/// The comparison is one-sided: a value past the nearest multiple never
/// matches, however close. `modulo(9.6, 5.0, 0.5)` is true,
/// `modulo(10.4, 5.0, 0.5)` is false. `b == DISABLED` always yields false.
///
/// # Errors
/// [`RulerError::InvalidModulus`] when `a` or `b` is NaN or `b` is zero.
pub fn modulo(a: f64, b: f64, max_delta: f64) -> Result<bool> {
    if a.is_nan() || b.is_nan() || b == 0.0 {
        return Err(RulerError::InvalidModulus { a, b });
    }
    if b == DISABLED {
        return Ok(false);
    }
    let closest = (a / b).round_ties_even();
    let residue = a - closest * b;
    Ok(residue <= 0.0 && residue.abs() < max_delta)
}
