//! Color string parsing.
//!
//! Input is trimmed and lowercased, then tried against [`COLOR_SYNTAXES`] in
//! order. The first syntax whose pattern matches decides the result: if its
//! components are out of range the input is rejected rather than handed to
//! the next syntax or clamped.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::{Color, ColorFormat, Hsl, Rgba};

/// One accepted color syntax: a full-string pattern plus its decoder.
pub struct ColorSyntax {
    /// Short name used in logs and the CLI listing.
    pub name: &'static str,
    /// A representative input.
    pub example: &'static str,
    /// Anchored regex applied to the trimmed, lowercased input.
    pub pattern: &'static str,
    decode: fn(&Captures<'_>) -> Option<Color>,
}

impl ColorSyntax {
    /// Decodes captures from this syntax's pattern, checking component ranges.
    pub fn decode(&self, captures: &Captures<'_>) -> Option<Color> {
        (self.decode)(captures)
    }
}

/// Accepted syntaxes in precedence order.
pub static COLOR_SYNTAXES: &[ColorSyntax] = &[
    ColorSyntax {
        name: "hex",
        example: "#ff0000, #f00, #ff000080",
        pattern: r"^#([0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})$",
        decode: decode_hex,
    },
    ColorSyntax {
        name: "rgb",
        example: "rgb(255, 0, 0), rgba(255, 0, 0, 0.5)",
        pattern: r"^rgba?\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*([0-9.]+)\s*)?\)$",
        decode: decode_rgb,
    },
    ColorSyntax {
        name: "hsl",
        example: "hsl(0, 100%, 50%), hsla(0, 100%, 50%, 0.5)",
        pattern: r"^hsla?\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*(?:,\s*([0-9.]+)\s*)?\)$",
        decode: decode_hsl,
    },
];

static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COLOR_SYNTAXES
        .iter()
        .map(|syntax| Regex::new(syntax.pattern).expect("color syntax patterns are valid"))
        .collect()
});

/// Parses a color in any syntax of [`COLOR_SYNTAXES`].
///
/// Returns `None` for blank input, input no syntax matches, and matched
/// input with an out-of-range component.
pub fn parse(input: &str) -> Option<Color> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        tracing::debug!("rejected blank color input");
        return None;
    }

    for (syntax, matcher) in COLOR_SYNTAXES.iter().zip(MATCHERS.iter()) {
        if let Some(captures) = matcher.captures(&normalized) {
            let color = syntax.decode(&captures);
            match color {
                Some(c) => tracing::trace!(syntax = syntax.name, format = %c.format, "parsed color"),
                None => tracing::debug!(syntax = syntax.name, input, "color component out of range"),
            }
            return color;
        }
    }

    tracing::debug!(input, "no color syntax matched");
    None
}

fn capture<T: FromStr>(captures: &Captures<'_>, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse().ok()
}

/// Optional alpha group: absent means opaque, present must be in [0, 1].
fn alpha(captures: &Captures<'_>, index: usize) -> Option<(f64, bool)> {
    match captures.get(index) {
        None => Some((1.0, false)),
        Some(m) => m
            .as_str()
            .parse::<f64>()
            .ok()
            .filter(|a| (0.0..=1.0).contains(a))
            .map(|a| (a, true)),
    }
}

fn hex_byte(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

fn decode_hex(captures: &Captures<'_>) -> Option<Color> {
    let digits = captures.get(1)?.as_str();
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let r = hex_byte(&expanded[0..2])?;
    let g = hex_byte(&expanded[2..4])?;
    let b = hex_byte(&expanded[4..6])?;
    let (a, format) = match expanded.get(6..8) {
        Some(alpha) => (f64::from(hex_byte(alpha)?) / 255.0, ColorFormat::Hexa),
        None => (1.0, ColorFormat::Hex),
    };
    Some(Color::from_rgba(Rgba { r, g, b, a }, format))
}

fn decode_rgb(captures: &Captures<'_>) -> Option<Color> {
    let channel = |index| capture::<u64>(captures, index).and_then(|v| u8::try_from(v).ok());
    let r = channel(1)?;
    let g = channel(2)?;
    let b = channel(3)?;
    let (a, has_alpha) = alpha(captures, 4)?;
    let format = if has_alpha {
        ColorFormat::Rgba
    } else {
        ColorFormat::Rgb
    };
    Some(Color::from_rgba(Rgba { r, g, b, a }, format))
}

fn decode_hsl(captures: &Captures<'_>) -> Option<Color> {
    let h = capture::<u64>(captures, 1).filter(|h| *h <= 360)?;
    let s = capture::<u64>(captures, 2).filter(|s| *s <= 100)?;
    let l = capture::<u64>(captures, 3).filter(|l| *l <= 100)?;
    let (a, has_alpha) = alpha(captures, 4)?;
    let format = if has_alpha {
        ColorFormat::Hsla
    } else {
        ColorFormat::Hsl
    };
    let hsl = Hsl {
        h: h as u16,
        s: s as u8,
        l: l as u8,
    };
    Some(Color::from_hsl(hsl, a, format))
}
