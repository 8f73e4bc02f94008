#![deny(unsafe_code)]
//! Conversion engine for devconv.
//!
//! Three independent, side-effect-free converters:
//! - [`length`]: pixels ⇄ rem against a base font size.
//! - [`ratio`]: width/height reduced to lowest integer terms.
//! - [`color`] and [`parse`]: HEX/HEXA, RGB/RGBA and HSL/HSLA input, every
//!   format (plus an HSL-derived OKLCh approximation) as output.
//!
//! Every function takes text and returns text or a [`ValidationError`], so a
//! form layer can call them on each keystroke.

pub mod color;
pub mod error;
pub mod length;
pub mod number;
pub mod parse;
pub mod ratio;
pub mod settings;

pub use color::{
    convert_color, parse_color, Color, ColorFormat, ColorRepresentations, Hsl, OklchApprox, Rgba,
};
pub use error::ValidationError;
pub use length::{convert_length, LengthForm, LengthPair, DEFAULT_BASE_SIZE};
pub use parse::{ColorSyntax, COLOR_SYNTAXES};
pub use ratio::{simplify_ratio, Ratio};
pub use settings::Settings;
