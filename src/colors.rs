//! Named colors, the rainbow palette and HSV helpers.
//!
//! Everything here produces plain 8-bit [`Color`] values. The HSV helpers are
//! convenient for hue sweeps; no gamma or brightness correction is applied.

use crate::types::Color;
use palette::{FromColor, Hsv, Srgb};

pub const OFF: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

pub const RED: Color = Color::new(255, 0, 0);
pub const ORANGE: Color = Color::new(255, 127, 0);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const INDIGO: Color = Color::new(75, 0, 130);
pub const VIOLET: Color = Color::new(143, 0, 255);

/// The built-in rainbow gradient used by the rainbow effect, indexed cyclically.
pub const RAINBOW: [Color; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// Creates an 8-bit RGB color from HSV (Hue, Saturation, Value) components.
///
/// `hue` is in degrees, `saturation` and `value` in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    let rgb: Srgb = Srgb::from_color(hsv);
    rgb.into_format()
}

/// Creates an 8-bit RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}
