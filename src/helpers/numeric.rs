//! Numeric wrapping, clamping and decimal rounding.

/// Remainder that is always in `[0, modulus)` for a positive modulus.
pub fn mod_with_neg(x: f64, modulus: f64) -> f64 {
    ((x % modulus) + modulus) % modulus
}

/// Wrap `num` into `[min, max)`.
pub fn roll(num: f64, min: f64, max: f64) -> f64 {
    mod_with_neg(num - min, max - min) + min
}

/// Limit `num` to `[min, max]`. `min` wins when the bounds are inverted.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    num.min(max).max(min)
}

/// Round to `scale` decimal places.
///
/// The shift is done in decimal text rather than by multiplying, so values such as
/// `1.005` round to `1.01`. Halves round towards positive infinity. Non-finite input
/// is returned unchanged.
pub fn round_digits(num: f64, scale: i32) -> f64 {
    if !num.is_finite() {
        return num;
    }

    let shifted: f64 = match format!("{num}e{scale}").parse() {
        Ok(value) => value,
        Err(_) => return num,
    };
    let rounded = (shifted + 0.5).floor();

    format!("{rounded}e{}", -scale).parse().unwrap_or(num)
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Round to `scale` places, then render with `,` thousands separators and at most
/// three fraction digits.
pub fn local_format_number(num: f64, scale: i32) -> String {
    let rounded = round_digits(num, scale);
    if !rounded.is_finite() {
        return if rounded.is_nan() {
            "NaN".to_string()
        } else if rounded > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let display = round_digits(rounded, MAX_FRACTION_DIGITS as i32);
    let text = format!("{:.*}", MAX_FRACTION_DIGITS, display.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if display < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_with_neg() {
        assert_eq!(mod_with_neg(-1.0, 5.0), 4.0);
        assert_eq!(mod_with_neg(7.0, 5.0), 2.0);
        assert_eq!(mod_with_neg(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_roll_wraps_into_range() {
        assert_eq!(roll(370.0, 0.0, 360.0), 10.0);
        assert_eq!(roll(-190.0, -180.0, 180.0), 170.0);
        assert_eq!(roll(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
    }

    #[test]
    fn test_round_digits_is_decimal_exact() {
        assert_eq!(round_digits(1.005, 2), 1.01);
        assert_eq!(round_digits(2.345, 2), 2.35);
        assert_eq!(round_digits(1234.5678, 0), 1235.0);
        assert_eq!(round_digits(-2.5, 0), -2.0);
        assert_eq!(round_digits(1250.0, -2), 1300.0);
        assert!(round_digits(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_local_format_number() {
        assert_eq!(local_format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(local_format_number(1000.0, 0), "1,000");
        assert_eq!(local_format_number(-9876.54321, 4), "-9,876.543");
        assert_eq!(local_format_number(0.5, 1), "0.5");
        assert_eq!(local_format_number(999.0, 2), "999");
    }
}
