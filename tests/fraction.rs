use ruler::data::fraction::*;
use ruler::error::RulerError;

#[test]
fn smallest_denominator_is_used() {
    assert_eq!(format_inches(3.03125, 32), "3 ¹⁄₃₂");
    assert_eq!(format_inches(3.5, 32), "3 ¹⁄₂");
    assert_eq!(format_inches(0.3, 32), "⁵⁄₁₆");
}

#[test]
fn whole_inches_have_no_fraction() {
    assert_eq!(format_inches(3.0, 32), "3");
    assert_eq!(format_inches(0.0, 32), "0");
    // rounds to the nearest 1/32 first
    assert_eq!(format_inches(2.999, 32), "3");
}

#[test]
fn zero_whole_part_is_omitted() {
    assert_eq!(format_inches(0.5, 32), "¹⁄₂");
    assert_eq!(format_inches(-0.5, 32), "-¹⁄₂");
    assert_eq!(format_inches(-2.5, 32), "-2 ¹⁄₂");
}

#[test]
fn digits_map_to_script_glyphs() {
    assert_eq!(superscript(123), "¹²³");
    assert_eq!(subscript(16), "₁₆");
}

#[test]
fn denominator_must_be_power_of_two() {
    assert!(matches!(try_format_inches(1.5, 3), Err(RulerError::InvalidDenominator(3))));
    assert!(matches!(try_format_inches(1.5, 1), Err(RulerError::InvalidDenominator(1))));
    assert_eq!(format_inches(1.5, 12), ERROR_LABEL);
    assert_eq!(try_format_inches(1.25, 4).unwrap(), "1 ¹⁄₄");
}

#[test]
fn non_finite_values_fall_back_to_error_label() {
    assert!(matches!(try_format_inches(f64::NAN, 32), Err(RulerError::NoDenominator { .. })));
    assert_eq!(format_inches(f64::NAN, 32), "Error");
    assert_eq!(format_inches(f64::INFINITY, 32), "Error");
}
