//! Color model and the conversions between its representations.
//!
//! Every accepted input is decoded into an [`Rgba`] with 8-bit channels and a
//! real alpha. All output strings are derived from that canonical value, so
//! `#FF0000`, `rgb(255, 0, 0)` and `hsl(0, 100%, 50%)` produce identical hex
//! and RGB output.
//!
//! The `oklch` output is **not** the CIE-based OKLCh space. It reuses the HSL
//! triple as `(l / 100, s / 100, h)` and is kept that way so existing
//! consumers see the same numbers.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::number::to_fixed;
use crate::parse;

/// An sRGB color with 8-bit channels and alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// HSL with integer degrees and percentages.
///
/// `h` is in [0, 360], `s` and `l` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// The HSL-derived stand-in for OKLCh: `l` and `c` in [0, 1], `h` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchApprox {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgba {
    /// Creates a fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#rrggbb` in lowercase. Channels are already within [0, 255].
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa`, with alpha quantized to a byte.
    pub fn to_hexa(self) -> String {
        format!("{}{:02x}", self.to_hex(), self.alpha_byte())
    }

    /// Alpha scaled to [0, 255] and rounded.
    pub fn alpha_byte(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_rgba_string(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Standard RGB -> HSL of the color channels.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl Hsl {
    pub fn to_hsl_string(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    pub fn to_hsla_string(self, alpha: f64) -> String {
        format!("hsla({}, {}%, {}%, {alpha})", self.h, self.s, self.l)
    }
}

impl OklchApprox {
    /// `oklch(L C H)` with three decimals for L and C, one for H.
    pub fn to_css_string(self) -> String {
        format!(
            "oklch({} {} {})",
            to_fixed(self.l, 3),
            to_fixed(self.c, 3),
            to_fixed(self.h, 1)
        )
    }
}

/// Converts 8-bit RGB to HSL, rounding each component to the nearest integer.
///
/// Hue is taken from whichever channel is largest; a hue that rounds up to
/// 360 wraps to 0. Achromatic colors have hue and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts HSL to 8-bit RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> [u8; 3] {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    ]
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The HSL-based OKLCh approximation (see the module docs).
pub fn oklch_approx(hsl: Hsl) -> OklchApprox {
    OklchApprox {
        l: f64::from(hsl.l) / 100.0,
        c: f64::from(hsl.s) / 100.0,
        h: f64::from(hsl.h),
    }
}

/// Which of the accepted syntaxes an input used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Hexa,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Hexa => "hexa",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully parsed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Canonical value every output is derived from.
    pub rgba: Rgba,
    /// HSL shown in the `hsl`/`hsla` outputs. For HSL input this is the
    /// parsed triple, so achromatic hues are not lost to the RGB round trip.
    pub hsl: Hsl,
    pub format: ColorFormat,
}

impl Color {
    /// Builds a color from RGBA, deriving its HSL.
    pub fn from_rgba(rgba: Rgba, format: ColorFormat) -> Self {
        Self {
            rgba,
            hsl: rgba.to_hsl(),
            format,
        }
    }

    /// Builds a color from HSL and alpha, keeping the given HSL for display.
    pub fn from_hsl(hsl: Hsl, alpha: f64, format: ColorFormat) -> Self {
        let [r, g, b] = hsl_to_rgb(hsl);
        Self {
            rgba: Rgba { r, g, b, a: alpha },
            hsl,
            format,
        }
    }

    /// Parses any supported color syntax. See [`parse::parse`].
    pub fn parse(input: &str) -> Option<Self> {
        parse::parse(input)
    }

    /// OKLCh stand-in, always computed from the RGB channels.
    pub fn oklch(&self) -> OklchApprox {
        oklch_approx(self.rgba.to_hsl())
    }

    /// Every output representation of this color.
    pub fn representations(&self) -> ColorRepresentations {
        let hex = self.rgba.to_hex();
        ColorRepresentations {
            hexa: self.rgba.to_hexa(),
            rgb: self.rgba.to_rgb_string(),
            rgba: self.rgba.to_rgba_string(),
            hsl: self.hsl.to_hsl_string(),
            hsla: self.hsl.to_hsla_string(self.rgba.a),
            oklch: self.oklch().to_css_string(),
            preview: hex.clone(),
            hex,
        }
    }
}

/// All output strings for one color. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRepresentations {
    pub hex: String,
    pub hexa: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
    pub oklch: String,
    /// Swatch color; same value as `hex`.
    pub preview: String,
}

/// Parses `input` and returns every representation, or `None` if it is not
/// a supported color.
pub fn parse_color(input: &str) -> Option<ColorRepresentations> {
    Color::parse(input).map(|color| color.representations())
}

/// Like [`parse_color`] but reports failure as a [`ValidationError`].
pub fn convert_color(input: &str) -> Result<ColorRepresentations, ValidationError> {
    parse_color(input).ok_or(ValidationError::InvalidColorFormat)
}
