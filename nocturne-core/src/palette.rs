//! The dark color scheme and the style rule injected alongside it.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Marker class attached to every element once a recolor decision has been
/// applied. Doubles as the selector for the injected defense rule.
pub const PROCESSED_CLASS: &str = "nocturne-processed";

/// Framework-supplied light-theme utility classes stripped from elements
/// before inline overrides, so the original stylesheet cannot re-assert a
/// light background after the page's own scripts re-render.
pub const LIGHT_THEME_CLASSES: &[&str] = &[
    "bg-light",
    "bg-white",
    "text-dark",
    "navbar-light",
    "bg-body-tertiary",
];

/// The two background tones, the two fixed foregrounds, and the form
/// control border that make up the whole scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary page background.
    pub background: Rgb,
    /// Slightly lighter surface for elements that were already dark
    /// (code blocks and the like) and for form controls.
    pub accent_background: Rgb,
    /// Fixed light text color.
    pub text: Rgb,
    /// Fixed anchor color.
    pub link: Rgb,
    /// Muted gray border for form controls.
    pub control_border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x12, 0x12, 0x12),
            accent_background: Rgb::new(0x1E, 0x1E, 0x1E),
            text: Rgb::new(0xE0, 0xE0, 0xE0),
            link: Rgb::new(0x4C, 0xAF, 0x50),
            control_border: Rgb::new(0x44, 0x44, 0x44),
        }
    }
}

impl Palette {
    /// The one global rule injected per activation: ties the processed
    /// marker to the primary colors so a late stylesheet cannot win the
    /// cascade back.
    #[must_use]
    pub fn style_rule(&self) -> String {
        format!(
            ".{PROCESSED_CLASS} {{ background-color: {} !important; color: {} !important; }}",
            self.background.to_css(),
            self.text.to_css()
        )
    }
}
