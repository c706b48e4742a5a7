//! Foreground selection against a chosen background.

use crate::color::{Luminance, Rgb, classify};
use crate::palette::Palette;

/// Per-channel amount a too-bright foreground is pushed down when its hue
/// is worth keeping.
pub const DARKEN_OFFSET: u8 = 100;

/// Pick a foreground color that stays legible against `background`.
///
/// The policy is deliberately asymmetric:
/// 1. If `background` is Dark, or the current foreground is Light, the
///    fixed light text color wins. The darkening path below only defends
///    against light-on-light, not light-on-dark.
/// 2. An unresolvable foreground also falls back to the fixed light text.
/// 3. Otherwise the current foreground is darkened by [`DARKEN_OFFSET`]
///    per channel, floored at zero, preserving the original hue intent of
///    deliberately colored text on a light surface.
#[must_use]
pub fn choose_foreground(background: Rgb, current: Option<Rgb>, palette: &Palette) -> Rgb {
    if classify(Some(background)) == Luminance::Dark || classify(current) == Luminance::Light {
        return palette.text;
    }
    match current {
        None => palette.text,
        Some(fg) => fg.darken(DARKEN_OFFSET),
    }
}
