/// Number of fractional digits written for every floating-point value in output files.
pub const SCIENTIFIC_PRECISION: usize = 8;

/// Formats a value in C-style scientific notation, e.g. `1.00000000e+00` or `-2.5e-07` written
/// as `-2.50000000e-07`.
///
/// Rust's `{:e}` writes the exponent without sign padding (`1e0`); snapshot and observable
/// files use the conventional signed, at-least-two-digit exponent instead.
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let raw = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unit_values_with_padded_exponent() {
        assert_eq!(format_scientific(1.0), "1.00000000e+00");
        assert_eq!(format_scientific(0.0), "0.00000000e+00");
        assert_eq!(format_scientific(0.9), "9.00000000e-01");
    }

    #[test]
    fn formats_negative_values_and_small_exponents() {
        assert_eq!(format_scientific(-0.000123456789), "-1.23456789e-04");
        assert_eq!(format_scientific(12.5), "1.25000000e+01");
    }

    #[test]
    fn keeps_three_digit_exponents_intact() {
        assert_eq!(format_scientific(1.5e100), "1.50000000e+100");
        assert_eq!(format_scientific(2.0e-120), "2.00000000e-120");
    }

    #[test]
    fn non_finite_values_are_written_verbatim() {
        assert_eq!(format_scientific(f64::INFINITY), "inf");
        assert_eq!(format_scientific(f64::NAN), "NaN");
    }
}
