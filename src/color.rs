//! Hex color parsing and linear mixing.
//!
//! Parsing is lenient: anything that is not exactly six hex digits (with an
//! optional leading `#`) reads as opaque white, so a typo in the content
//! document produces a pale theme instead of an error.

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#rrggbb` / `rrggbb`, case-insensitive. Falls back to white.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::WHITE)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Interpolate each channel: `round(a * (1 - t) + b * t)`.
///
/// `t` is not clamped. Ratios outside `[0, 1]` extrapolate, and the resulting
/// channels saturate at 0 and 255 when encoded.
pub fn mix_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let lerp = |x: u8, y: u8| round_half_up(f64::from(x) * (1.0 - t) + f64::from(y) * t);
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Mix two hex colors and return the result as lowercase `#rrggbb`.
pub fn mix(a: &str, b: &str, t: f64) -> String {
    mix_rgb(hex_to_rgb(a), hex_to_rgb(b), t).to_hex()
}

// Halves round toward +inf (127.5 -> 128), unlike f64::round on negatives.
fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
