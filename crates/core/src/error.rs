//! Error types for the devconv conversion engine.

use thiserror::Error;

/// Validation failures produced by the conversion functions.
///
/// The `Display` strings are the user-facing messages shown next to the
/// offending form field, so they are worded for end users rather than
/// developers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A pixel or rem value was not a finite number `>= 0`.
    #[error("Please enter a valid positive number")]
    InvalidLength,

    /// The base font size was not a finite number `> 0`.
    #[error("Base font size must be a positive number")]
    InvalidBaseSize,

    /// Width or height was not a finite number `> 0`.
    #[error("Please enter valid positive numbers")]
    InvalidRatio,

    /// A ratio term rounded to zero after decimal scaling, so no gcd exists.
    #[error("Please enter valid positive numbers")]
    DegenerateRatio { width: u64, height: u64 },

    /// A scaled ratio term is too large for exact integer reduction.
    #[error("Please enter smaller numbers or fewer decimal places")]
    RatioOutOfRange { decimals: u32 },

    /// The color string matched none of the supported syntaxes, or a
    /// component was out of range.
    #[error("Invalid color format. Supported formats: HEX, RGB, RGBA, HSL, HSLA, OKLCH")]
    InvalidColorFormat,
}
