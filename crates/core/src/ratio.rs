//! Aspect-ratio simplification.
//!
//! Decimal inputs are scaled by a power of ten until both terms are integers,
//! then reduced by their greatest common divisor. `16.5 x 9.2` becomes
//! `165 x 92`, which is already in lowest terms.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::number::{decimal_places, parse_number, to_fixed};

/// Largest integer every `f64` below it represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Fractional digits shown for the decimal ratio.
const DECIMAL_DIGITS: usize = 3;

/// A width/height pair in lowest integer terms plus its decimal quotient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    pub width: u64,
    pub height: u64,
    /// `width / height` of the original, unscaled inputs.
    pub decimal: f64,
}

impl Ratio {
    /// The reduced ratio as `"width:height"`.
    pub fn ratio_text(&self) -> String {
        format!("{}:{}", self.width, self.height)
    }

    /// The decimal quotient to three places.
    pub fn decimal_text(&self) -> String {
        to_fixed(self.decimal, DECIMAL_DIGITS)
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Ratio", 4)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("ratioText", &self.ratio_text())?;
        state.serialize_field("decimalText", &self.decimal_text())?;
        state.end()
    }
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`; callers must not divide by it.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Simplifies a width/height pair given as text.
///
/// Returns `Ok(None)` when either field is empty, so the caller can clear
/// its result without showing an error.
///
/// # Errors
///
/// - [`ValidationError::InvalidRatio`] if either value is not a number `> 0`.
/// - [`ValidationError::DegenerateRatio`] if a term rounds to zero after scaling.
/// - [`ValidationError::RatioOutOfRange`] if a scaled term exceeds 2^53.
pub fn simplify_ratio(width: &str, height: &str) -> Result<Option<Ratio>, ValidationError> {
    if width.is_empty() || height.is_empty() {
        return Ok(None);
    }

    let (w, h) = match (parse_number(width), parse_number(height)) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => {
            tracing::debug!(width, height, "rejected ratio terms");
            return Err(ValidationError::InvalidRatio);
        }
    };

    let (width, height) = reduce(w, h)?;
    Ok(Some(Ratio {
        width,
        height,
        decimal: w / h,
    }))
}

/// Scales both terms to integers by `10^max(decimals)` and divides out their gcd.
fn reduce(width: f64, height: f64) -> Result<(u64, u64), ValidationError> {
    let decimals = decimal_places(width).max(decimal_places(height));
    let factor = 10f64.powi(decimals as i32);
    let scaled_w = (width * factor).round();
    let scaled_h = (height * factor).round();
    tracing::trace!(decimals, scaled_w, scaled_h, "scaled ratio terms");

    if !(scaled_w <= MAX_EXACT_INTEGER && scaled_h <= MAX_EXACT_INTEGER) {
        return Err(ValidationError::RatioOutOfRange { decimals });
    }
    let (scaled_w, scaled_h) = (scaled_w as u64, scaled_h as u64);

    if scaled_w == 0 || scaled_h == 0 {
        return Err(ValidationError::DegenerateRatio {
            width: scaled_w,
            height: scaled_h,
        });
    }
    let divisor = gcd(scaled_w, scaled_h);
    Ok((scaled_w / divisor, scaled_h / divisor))
}
