//! Inch labels as a whole number plus a power-of-two fraction (`3 ¹⁄₁₆`).

use crate::error::{Result, RulerError};

/// Default finest fraction used by the scale labels.
pub const DEFAULT_MAX_DENOMINATOR: u32 = 32;

/// Literal shown in place of a label that could not be formatted.
pub const ERROR_LABEL: &str = "Error";

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const FRACTION_SLASH: char = '\u{2044}';

fn map_digits(n: u64, glyphs: &[char; 10]) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| glyphs[d as usize])
        .collect()
}

/// Numerator rendered with superscript digits.
pub fn superscript(n: u64) -> String {
    map_digits(n, &SUPERSCRIPT_DIGITS)
}

/// Denominator rendered with subscript digits.
pub fn subscript(n: u64) -> String {
    map_digits(n, &SUBSCRIPT_DIGITS)
}

/// Format `value` inches rounded to the nearest `1 / max_denominator`.
///
/// The fraction uses the smallest power-of-two denominator that represents the
/// remainder exactly, so `3.5` becomes `3 ¹⁄₂` rather than `3 ¹⁶⁄₃₂`. A zero
/// whole part is omitted and replaced by a `-` for negative values.
///
/// # Errors
/// * [`RulerError::InvalidDenominator`] unless `max_denominator` is a power of two ≥ 2.
/// * [`RulerError::NoDenominator`] if no denominator fits; with the rounding
///   above this only happens for non-finite input.
pub fn try_format_inches(value: f64, max_denominator: u32) -> Result<String> {
    if max_denominator < 2 || !max_denominator.is_power_of_two() {
        return Err(RulerError::InvalidDenominator(max_denominator));
    }
    let max = f64::from(max_denominator);
    let rounded = (value * max).round_ties_even() / max;
    let whole = rounded.trunc();
    let remainder = rounded - whole;

    if remainder == 0.0 {
        return Ok(format!("{}", whole as i64));
    }

    let sign = if remainder < 0.0 { "-" } else { "" };
    for exp in 1..=max_denominator.trailing_zeros() {
        let denominator = 2u64.pow(exp);
        let divisor = 1.0 / denominator as f64;
        if remainder % divisor == 0.0 {
            let numerator = (remainder * denominator as f64).round().abs() as u64;
            let prefix = if whole != 0.0 {
                format!("{} ", whole as i64)
            } else {
                sign.to_string()
            };
            return Ok(format!(
                "{}{}{}{}",
                prefix,
                superscript(numerator),
                FRACTION_SLASH,
                subscript(denominator)
            ));
        }
    }

    Err(RulerError::NoDenominator {
        remainder,
        max: max_denominator,
    })
}

/// Label-rendering variant of [`try_format_inches`]: any failure becomes [`ERROR_LABEL`].
pub fn format_inches(value: f64, max_denominator: u32) -> String {
    try_format_inches(value, max_denominator).unwrap_or_else(|e| {
        tracing::debug!("inch label fallback: {e}");
        ERROR_LABEL.to_string()
    })
}
