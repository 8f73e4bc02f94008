//! User-adjustable defaults for the converters.
//!
//! Settings arrive as a JSON object. Missing keys take their defaults and
//! unknown keys are ignored, so `{}` is always valid.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::length::DEFAULT_BASE_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel value of 1 rem.
    pub base_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
        }
    }
}

impl Settings {
    /// Parses settings from JSON text. Fails if a known key has the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Checks that the base size is usable for conversions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_size.is_finite() && self.base_size > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidBaseSize)
        }
    }

    /// The base size as field text, e.g. `"16"`.
    pub fn base_size_text(&self) -> String {
        format!("{}", self.base_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_size_is_16() {
        let settings = Settings::default();
        assert!((settings.base_size - 16.0).abs() < f64::EPSILON);
        assert_eq!(settings.base_size_text(), "16");
    }

    #[test]
    fn empty_object_yields_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn base_size_is_read_from_json() {
        let settings = Settings::from_json_str(r#"{"base_size": 10}"#).unwrap();
        assert_eq!(settings.base_size_text(), "10");
        let settings = Settings::from_json_str(r#"{"base_size": 18.5}"#).unwrap();
        assert_eq!(settings.base_size_text(), "18.5");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = Settings::from_json_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Settings::from_json_str(r#"{"base_size": "big"}"#).is_err());
        assert!(Settings::from_json_str("{not json").is_err());
    }

    #[test]
    fn validate_rejects_non_positive_base() {
        assert!(Settings::default().validate().is_ok());
        let zero = Settings { base_size: 0.0 };
        assert_eq!(zero.validate(), Err(ValidationError::InvalidBaseSize));
        let negative = Settings { base_size: -2.0 };
        assert_eq!(negative.validate(), Err(ValidationError::InvalidBaseSize));
    }

    #[test]
    fn json_round_trip() {
        let original = Settings { base_size: 14.0 };
        let json = serde_json::to_string(&original).unwrap();
        let restored = Settings::from_json_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
