//! Numeric text helpers shared by the length and ratio converters.
//!
//! Form fields hand the engine raw text and expect text back, so parsing and
//! fixed-point rendering live here rather than in each converter.

/// Number of fractional digits needed to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Parses trimmed `text` as a finite `f64`.
///
/// Returns `None` for empty input, non-numeric text, and the textual forms of
/// NaN and infinity.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Counts the fractional digits in the shortest round-trip rendering of `value`.
///
/// `16.5` has one, `1920.0` has none, `0.125` has three.
pub fn decimal_places(value: f64) -> u32 {
    let text = format!("{value}");
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
}

/// Renders `value` with exactly `digits` fractional digits.
///
/// Exact decimal ties round away from zero, so `to_fixed(0.03125, 4)` is
/// `"0.0313"` (the default formatter would give `"0.0312"`). Everything
/// else is correctly rounded to nearest.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return format!("{value:.digits$}");
    };

    let (kept, dropped) = fraction.split_at(digits.min(fraction.len()));
    let is_tie = dropped.starts_with('5') && dropped[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.digits$}");
    }

    let mut magnitude: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    increment_decimal(&mut magnitude);

    let split = magnitude.len() - digits;
    let mut out = String::with_capacity(magnitude.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(magnitude[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(magnitude[split..].iter().map(|&b| b as char));
    }
    out
}

/// Adds one unit in the last place to a string of ASCII decimal digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
