//! Color resolution and luminance classification.
//!
//! A headless stand-in for the host engine's color canonicalization: the
//! same named/hex/functional grammar, resolved without a rendering engine.
//! Unresolvable input degrades to `None` (the "no color" sentinel) and is
//! never treated as black.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Luminance below this value classifies as [`Luminance::Dark`].
pub const DARK_THRESHOLD: f32 = 128.0;
/// Luminance above this value classifies as [`Luminance::Light`].
pub const LIGHT_THRESHOLD: f32 = 200.0;

/// An opaque sRGB color. Transparency carries no information here, so
/// alpha is dropped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Perceptual brightness using BT.601 weights, in `0.0..=255.0`.
    #[must_use]
    pub fn luminance(self) -> f32 {
        (299.0 * f32::from(self.r) + 587.0 * f32::from(self.g) + 114.0 * f32::from(self.b))
            / 1000.0
    }

    /// Darken every channel by `offset`, flooring at zero.
    #[must_use]
    pub const fn darken(self, offset: u8) -> Self {
        Self {
            r: self.r.saturating_sub(offset),
            g: self.g.saturating_sub(offset),
            b: self.b.saturating_sub(offset),
        }
    }

    /// Canonical `rgb(r, g, b)` form, matching what computed styles report.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Three-way brightness classification of a color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Luminance {
    Dark,
    Light,
    Neutral,
}

/// Classify a color sample. The `None` sentinel is Neutral: an unknown
/// color must never pass for an already-dark one.
#[must_use]
pub fn classify(sample: Option<Rgb>) -> Luminance {
    let Some(rgb) = sample else {
        return Luminance::Neutral;
    };
    let lum = rgb.luminance();
    if lum < DARK_THRESHOLD {
        Luminance::Dark
    } else if lum > LIGHT_THRESHOLD {
        Luminance::Light
    } else {
        Luminance::Neutral
    }
}

static RGB_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})").expect("valid rgb pattern"));

/// Resolve an arbitrary CSS color string to an [`Rgb`] sample.
///
/// `transparent` and `inherit` yield `None` ("no information", not black).
/// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional `rgb()`/
/// `rgba()` and the CSS named colors are recognized; anything else also
/// degrades to `None`. This function never panics on malformed input.
#[must_use]
pub fn parse_color(input: &str) -> Option<Rgb> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    let lower = value.to_ascii_lowercase();
    if lower == "transparent" || lower == "inherit" {
        return None;
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }
    if lower.starts_with("rgb") {
        let caps = RGB_TRIPLE.captures(&lower)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        return Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?));
    }
    named_color(&lower)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
    let mut chars = hex.chars();
    match hex.len() {
        // Short forms duplicate each nibble; a trailing alpha nibble/byte
        // is parsed but discarded.
        3 | 4 => {
            let r = nibble(chars.next()?)?;
            let g = nibble(chars.next()?)?;
            let b = nibble(chars.next()?)?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |hi: char, lo: char| Some(nibble(hi)? * 16 + nibble(lo)?);
            let r = byte(chars.next()?, chars.next()?)?;
            let g = byte(chars.next()?, chars.next()?)?;
            let b = byte(chars.next()?, chars.next()?)?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, packed)| Rgb::from_u24(*packed))
}

/// CSS named colors (CSS Color Module level 4 keyword set).
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xF0F8FF),
    ("antiquewhite", 0xFAEBD7),
    ("aqua", 0x00FFFF),
    ("aquamarine", 0x7FFFD4),
    ("azure", 0xF0FFFF),
    ("beige", 0xF5F5DC),
    ("bisque", 0xFFE4C4),
    ("black", 0x000000),
    ("blanchedalmond", 0xFFEBCD),
    ("blue", 0x0000FF),
    ("blueviolet", 0x8A2BE2),
    ("brown", 0xA52A2A),
    ("burlywood", 0xDEB887),
    ("cadetblue", 0x5F9EA0),
    ("chartreuse", 0x7FFF00),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("cornflowerblue", 0x6495ED),
    ("cornsilk", 0xFFF8DC),
    ("crimson", 0xDC143C),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkcyan", 0x008B8B),
    ("darkgoldenrod", 0xB8860B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xA9A9A9),
    ("darkkhaki", 0xBDB76B),
    ("darkmagenta", 0x8B008B),
    ("darkolivegreen", 0x556B2F),
    ("darkorange", 0xFF8C00),
    ("darkorchid", 0x9932CC),
    ("darkred", 0x8B0000),
    ("darksalmon", 0xE9967A),
    ("darkseagreen", 0x8FBC8F),
    ("darkslateblue", 0x483D8B),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("darkturquoise", 0x00CED1),
    ("darkviolet", 0x9400D3),
    ("deeppink", 0xFF1493),
    ("deepskyblue", 0x00BFFF),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1E90FF),
    ("firebrick", 0xB22222),
    ("floralwhite", 0xFFFAF0),
    ("forestgreen", 0x228B22),
    ("fuchsia", 0xFF00FF),
    ("gainsboro", 0xDCDCDC),
    ("ghostwhite", 0xF8F8FF),
    ("gold", 0xFFD700),
    ("goldenrod", 0xDAA520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xADFF2F),
    ("grey", 0x808080),
    ("honeydew", 0xF0FFF0),
    ("hotpink", 0xFF69B4),
    ("indianred", 0xCD5C5C),
    ("indigo", 0x4B0082),
    ("ivory", 0xFFFFF0),
    ("khaki", 0xF0E68C),
    ("lavender", 0xE6E6FA),
    ("lavenderblush", 0xFFF0F5),
    ("lawngreen", 0x7CFC00),
    ("lemonchiffon", 0xFFFACD),
    ("lightblue", 0xADD8E6),
    ("lightcoral", 0xF08080),
    ("lightcyan", 0xE0FFFF),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("lightgray", 0xD3D3D3),
    ("lightgreen", 0x90EE90),
    ("lightgrey", 0xD3D3D3),
    ("lightpink", 0xFFB6C1),
    ("lightsalmon", 0xFFA07A),
    ("lightseagreen", 0x20B2AA),
    ("lightskyblue", 0x87CEFA),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xB0C4DE),
    ("lightyellow", 0xFFFFE0),
    ("lime", 0x00FF00),
    ("limegreen", 0x32CD32),
    ("linen", 0xFAF0E6),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66CDAA),
    ("mediumblue", 0x0000CD),
    ("mediumorchid", 0xBA55D3),
    ("mediumpurple", 0x9370DB),
    ("mediumseagreen", 0x3CB371),
    ("mediumslateblue", 0x7B68EE),
    ("mediumspringgreen", 0x00FA9A),
    ("mediumturquoise", 0x48D1CC),
    ("mediumvioletred", 0xC71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xF5FFFA),
    ("mistyrose", 0xFFE4E1),
    ("moccasin", 0xFFE4B5),
    ("navajowhite", 0xFFDEAD),
    ("navy", 0x000080),
    ("oldlace", 0xFDF5E6),
    ("olive", 0x808000),
    ("olivedrab", 0x6B8E23),
    ("orange", 0xFFA500),
    ("orangered", 0xFF4500),
    ("orchid", 0xDA70D6),
    ("palegoldenrod", 0xEEE8AA),
    ("palegreen", 0x98FB98),
    ("paleturquoise", 0xAFEEEE),
    ("palevioletred", 0xDB7093),
    ("papayawhip", 0xFFEFD5),
    ("peachpuff", 0xFFDAB9),
    ("peru", 0xCD853F),
    ("pink", 0xFFC0CB),
    ("plum", 0xDDA0DD),
    ("powderblue", 0xB0E0E6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xFF0000),
    ("rosybrown", 0xBC8F8F),
    ("royalblue", 0x4169E1),
    ("saddlebrown", 0x8B4513),
    ("salmon", 0xFA8072),
    ("sandybrown", 0xF4A460),
    ("seagreen", 0x2E8B57),
    ("seashell", 0xFFF5EE),
    ("sienna", 0xA0522D),
    ("silver", 0xC0C0C0),
    ("skyblue", 0x87CEEB),
    ("slateblue", 0x6A5ACD),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xFFFAFA),
    ("springgreen", 0x00FF7F),
    ("steelblue", 0x4682B4),
    ("tan", 0xD2B48C),
    ("teal", 0x008080),
    ("thistle", 0xD8BFD8),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("violet", 0xEE82EE),
    ("wheat", 0xF5DEB3),
    ("white", 0xFFFFFF),
    ("whitesmoke", 0xF5F5F5),
    ("yellow", 0xFFFF00),
    ("yellowgreen", 0x9ACD32),
];
