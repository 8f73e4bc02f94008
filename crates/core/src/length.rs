//! Pixel ⇄ rem conversion against a configurable base font size.
//!
//! [`convert_length`] is the stateless entry point: it takes the raw text of
//! whichever field was edited and returns the text of both fields.
//! [`LengthForm`] layers the edit/reset behavior of a form on top of it for
//! callers that want the engine to own the field state.

use serde::Serialize;

use crate::error::ValidationError;
use crate::number::{parse_number, to_fixed};

/// Pixel value of 1 rem when the caller does not configure one.
pub const DEFAULT_BASE_SIZE: f64 = 16.0;

/// Fractional digits shown for rem values.
const REM_DIGITS: usize = 4;

/// Fractional digits shown for pixel values.
const PIXEL_DIGITS: usize = 2;

/// Text of the pixel and rem fields after a conversion.
///
/// Both are empty when the edited field was cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LengthPair {
    pub pixels: String,
    pub rem: String,
}

impl LengthPair {
    /// Returns true if both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty() && self.rem.is_empty()
    }
}

/// Which side of the pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Rem,
}

/// Converts pixels to rem.
pub fn px_to_rem(pixels: f64, base: f64) -> f64 {
    pixels / base
}

/// Converts rem to pixels.
pub fn rem_to_px(rem: f64, base: f64) -> f64 {
    rem * base
}

/// Converts whichever of `pixels` or `rem` holds a value into the other unit.
///
/// Pixels win when both are set. The field that held the value is echoed
/// back verbatim; only the other one is recomputed (rem to 4 decimals,
/// pixels to 2). If neither holds a value, both fields come back empty
/// without validating `base`.
///
/// # Errors
///
/// - [`ValidationError::InvalidLength`] if the value is not a number `>= 0`.
/// - [`ValidationError::InvalidBaseSize`] if `base` is not a number `> 0`.
pub fn convert_length(
    pixels: Option<&str>,
    rem: Option<&str>,
    base: &str,
) -> Result<LengthPair, ValidationError> {
    let (unit, value) = match (pixels, rem) {
        (Some(px), _) if !px.is_empty() => (LengthUnit::Pixels, px),
        (_, Some(rem)) if !rem.is_empty() => (LengthUnit::Rem, rem),
        _ => return Ok(LengthPair::default()),
    };
    convert_from(unit, value, base)
}

fn convert_from(unit: LengthUnit, value: &str, base: &str) -> Result<LengthPair, ValidationError> {
    // -0 passes the sign check; abs() keeps it from printing as "-0.0000".
    let number = parse_number(value)
        .filter(|n| *n >= 0.0)
        .map(f64::abs)
        .ok_or_else(|| {
            tracing::debug!(value, "rejected length value");
            ValidationError::InvalidLength
        })?;
    let base_size = parse_number(base)
        .filter(|b| *b > 0.0)
        .ok_or_else(|| {
            tracing::debug!(base, "rejected base font size");
            ValidationError::InvalidBaseSize
        })?;

    let pair = match unit {
        LengthUnit::Pixels => LengthPair {
            pixels: value.to_string(),
            rem: to_fixed(px_to_rem(number, base_size), REM_DIGITS),
        },
        LengthUnit::Rem => LengthPair {
            pixels: to_fixed(rem_to_px(number, base_size), PIXEL_DIGITS),
            rem: value.to_string(),
        },
    };
    tracing::trace!(?unit, pixels = %pair.pixels, rem = %pair.rem, "converted length");
    Ok(pair)
}

/// Field state of a pixel/rem form.
///
/// A failed edit records the error and leaves both fields as they were; the
/// next edit clears the error before trying again.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthForm {
    pair: LengthPair,
    base: String,
    error: Option<ValidationError>,
}

impl Default for LengthForm {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE_SIZE)
    }
}

impl LengthForm {
    /// Creates an empty form with the given base font size.
    pub fn with_base(base: f64) -> Self {
        Self {
            pair: LengthPair::default(),
            base: format!("{base}"),
            error: None,
        }
    }

    pub fn pixels(&self) -> &str {
        &self.pair.pixels
    }

    pub fn rem(&self) -> &str {
        &self.pair.rem
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The error from the last edit, if it failed.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Current field text.
    pub fn pair(&self) -> &LengthPair {
        &self.pair
    }

    /// Sets the pixel field and recomputes rem.
    pub fn edit_pixels(&mut self, value: &str) {
        self.edit(LengthUnit::Pixels, value);
    }

    /// Sets the rem field and recomputes pixels.
    pub fn edit_rem(&mut self, value: &str) {
        self.edit(LengthUnit::Rem, value);
    }

    /// Changes the base font size and recomputes from pixels if set, else rem.
    pub fn set_base(&mut self, base: &str) {
        self.base = base.to_string();
        if !self.pair.pixels.is_empty() {
            let pixels = self.pair.pixels.clone();
            self.edit(LengthUnit::Pixels, &pixels);
        } else if !self.pair.rem.is_empty() {
            let rem = self.pair.rem.clone();
            self.edit(LengthUnit::Rem, &rem);
        } else {
            self.error = None;
        }
    }

    /// Restores the default base and clears both fields and any error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn edit(&mut self, unit: LengthUnit, value: &str) {
        self.error = None;
        if value.is_empty() {
            self.pair = LengthPair::default();
            return;
        }
        match convert_from(unit, value, &self.base) {
            Ok(pair) => self.pair = pair,
            Err(e) => self.error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_convert_to_rem_with_four_decimals() {
        let pair = convert_length(Some("24"), None, "16").unwrap();
        assert_eq!(pair.pixels, "24");
        assert_eq!(pair.rem, "1.5000");
    }

    #[test]
    fn rem_converts_to_pixels_with_two_decimals() {
        let pair = convert_length(None, Some("1.25"), "16").unwrap();
        assert_eq!(pair.pixels, "20.00");
        assert_eq!(pair.rem, "1.25");
    }

    #[test]
    fn pixels_win_when_both_are_set() {
        let pair = convert_length(Some("32"), Some("99"), "16").unwrap();
        assert_eq!(pair.rem, "2.0000");
    }

    #[test]
    fn empty_pixels_fall_back_to_rem() {
        let pair = convert_length(Some(""), Some("2"), "10").unwrap();
        assert_eq!(pair.pixels, "20.00");
    }

    #[test]
    fn whitespace_only_value_is_rejected_not_cleared() {
        let err = convert_length(Some("  "), Some("2"), "10").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength);
    }

    #[test]
    fn empty_input_clears_both_fields_without_checking_base() {
        let pair = convert_length(Some(""), None, "not a number").unwrap();
        assert!(pair.is_empty());
        let pair = convert_length(None, None, "16").unwrap();
        assert!(pair.is_empty());
    }

    #[test]
    fn zero_pixels_is_valid() {
        let pair = convert_length(Some("0"), None, "16").unwrap();
        assert_eq!(pair.rem, "0.0000");
    }

    #[test]
    fn negative_zero_pixels_convert_to_unsigned_zero_rem() {
        let pair = convert_length(Some("-0"), None, "16").unwrap();
        assert_eq!(pair.pixels, "-0");
        assert_eq!(pair.rem, "0.0000");
    }

    #[test]
    fn negative_zero_rem_converts_to_unsigned_zero_pixels() {
        let pair = convert_length(None, Some("-0"), "16").unwrap();
        assert_eq!(pair.pixels, "0.00");
        assert_eq!(pair.rem, "-0");
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = convert_length(Some("-4"), None, "16").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength);
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = convert_length(None, Some("abc"), "16").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength);
    }

    #[test]
    fn value_is_checked_before_base() {
        let err = convert_length(Some("abc"), None, "0").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength);
    }

    #[test]
    fn zero_or_negative_base_is_rejected() {
        for base in ["0", "-16", "", "sixteen"] {
            let err = convert_length(Some("16"), None, base).unwrap_err();
            assert_eq!(err, ValidationError::InvalidBaseSize, "base {base:?}");
        }
    }

    #[test]
    fn custom_base_is_honored() {
        let pair = convert_length(Some("15"), None, "10").unwrap();
        assert_eq!(pair.rem, "1.5000");
    }

    #[test]
    fn rem_ties_round_up() {
        // 0.5 / 16 = 0.03125 exactly
        let pair = convert_length(Some("0.5"), None, "16").unwrap();
        assert_eq!(pair.rem, "0.0313");
    }

    #[test]
    fn px_and_rem_primitives_are_inverse() {
        let rem = px_to_rem(40.0, 16.0);
        assert!((rem - 2.5).abs() < f64::EPSILON);
        assert!((rem_to_px(rem, 16.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn length_pair_serializes_field_names() {
        let pair = LengthPair {
            pixels: "16".into(),
            rem: "1.0000".into(),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({"pixels": "16", "rem": "1.0000"}));
    }

    // -- LengthForm --

    #[test]
    fn form_defaults_to_base_16() {
        let form = LengthForm::default();
        assert_eq!(form.base(), "16");
        assert!(form.pair().is_empty());
        assert!(form.error().is_none());
    }

    #[test]
    fn form_edit_pixels_updates_rem() {
        let mut form = LengthForm::default();
        form.edit_pixels("8");
        assert_eq!(form.pixels(), "8");
        assert_eq!(form.rem(), "0.5000");
    }

    #[test]
    fn form_failed_edit_keeps_fields_and_records_error() {
        let mut form = LengthForm::default();
        form.edit_rem("2");
        form.edit_pixels("-1");
        assert_eq!(form.error(), Some(&ValidationError::InvalidLength));
        assert_eq!(form.pixels(), "32.00");
        assert_eq!(form.rem(), "2");
    }

    #[test]
    fn form_next_edit_clears_error() {
        let mut form = LengthForm::default();
        form.edit_pixels("x");
        assert!(form.error().is_some());
        form.edit_pixels("16");
        assert!(form.error().is_none());
        assert_eq!(form.rem(), "1.0000");
    }

    #[test]
    fn form_whitespace_edit_records_error() {
        let mut form = LengthForm::default();
        form.edit_pixels("16");
        form.edit_pixels(" ");
        assert_eq!(form.error(), Some(&ValidationError::InvalidLength));
        assert_eq!(form.rem(), "1.0000");
    }

    #[test]
    fn form_clearing_a_field_clears_both() {
        let mut form = LengthForm::default();
        form.edit_pixels("16");
        form.edit_pixels("");
        assert!(form.pair().is_empty());
    }

    #[test]
    fn form_set_base_recomputes_from_pixels() {
        let mut form = LengthForm::default();
        form.edit_pixels("20");
        form.set_base("10");
        assert_eq!(form.base(), "10");
        assert_eq!(form.pixels(), "20");
        assert_eq!(form.rem(), "2.0000");
    }

    #[test]
    fn form_set_base_invalid_records_error() {
        let mut form = LengthForm::default();
        form.edit_pixels("20");
        form.set_base("0");
        assert_eq!(form.error(), Some(&ValidationError::InvalidBaseSize));
        assert_eq!(form.rem(), "1.2500");
    }

    #[test]
    fn form_set_base_on_empty_form_only_stores_base() {
        let mut form = LengthForm::default();
        form.set_base("12");
        assert_eq!(form.base(), "12");
        assert!(form.pair().is_empty());
        assert!(form.error().is_none());
    }

    #[test]
    fn form_reset_restores_defaults() {
        let mut form = LengthForm::with_base(10.0);
        form.edit_pixels("5");
        form.edit_rem("bad");
        form.reset();
        assert_eq!(form, LengthForm::default());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rem_is_pixels_over_base_to_four_decimals(
                px in 0.0_f64..10_000.0,
                base in 1.0_f64..64.0,
            ) {
                let px_text = format!("{px}");
                let pair = convert_length(Some(&px_text), None, &format!("{base}")).unwrap();
                let rem: f64 = pair.rem.parse().unwrap();
                prop_assert!((rem - px / base).abs() <= 0.00005 + 1e-12,
                    "rem {} vs {}", rem, px / base);
            }

            #[test]
            fn pixels_survive_a_rem_round_trip(
                px in 0.0_f64..10_000.0,
                base in 1.0_f64..64.0,
            ) {
                let base_text = format!("{base}");
                let there = convert_length(Some(&format!("{px}")), None, &base_text).unwrap();
                let back = convert_length(None, Some(&there.rem), &base_text).unwrap();
                let recovered: f64 = back.pixels.parse().unwrap();
                prop_assert!((recovered - px).abs() <= 0.01 + 1e-9,
                    "recovered {} vs {}", recovered, px);
            }
        }
    }
}
