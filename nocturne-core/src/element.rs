//! Per-element recolor decisions and the colorable element kinds.

use crate::color::{Luminance, Rgb, classify};
use crate::contrast::choose_foreground;
use crate::palette::Palette;

/// Element categories that change how a decision is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<a>` — foreground forced to the fixed link color.
    Anchor,
    /// `<input>`, `<textarea>`, `<select>` — accent surface, fixed light
    /// text, fixed muted border.
    FormControl,
    Other,
}

impl ElementKind {
    /// Categorize by tag name, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "a" => Self::Anchor,
            "input" | "textarea" | "select" => Self::FormControl,
            _ => Self::Other,
        }
    }
}

/// The fixed set of element kinds eligible for recoloring: block
/// containers, headings, text blocks, semantic sectioning, navigation,
/// links, buttons and form controls. Deliberately excludes `html`,
/// head-level nodes, scripts and styles to limit the blast radius.
pub const COLORABLE_TAGS: &[&str] = &[
    "body", "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "article", "section", "main",
    "header", "footer", "nav", "aside", "a", "button", "input", "textarea", "select",
];

/// Whether a tag belongs to the colorable kind set.
#[must_use]
pub fn is_colorable(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();
    COLORABLE_TAGS.contains(&lower.as_str())
}

/// CSS selector matching exactly the colorable kind set, for host-side
/// queries and for filtering watcher-inserted nodes.
#[must_use]
pub fn colorable_selector() -> String {
    COLORABLE_TAGS.join(", ")
}

/// Final colors chosen for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecolorDecision {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Set only for form controls.
    pub border: Option<Rgb>,
}

/// Decide the replacement colors for one element from its currently
/// rendered background and foreground.
///
/// An already-dark background keeps the accent surface (a dark-on-darker
/// depth cue for things like code blocks); everything else gets the
/// primary background. Kind overrides are applied last and win outright.
#[must_use]
pub fn decide(
    kind: ElementKind,
    current_bg: Option<Rgb>,
    current_fg: Option<Rgb>,
    palette: &Palette,
) -> RecolorDecision {
    let background = if classify(current_bg) == Luminance::Dark {
        palette.accent_background
    } else {
        palette.background
    };
    let foreground = choose_foreground(background, current_fg, palette);

    match kind {
        ElementKind::Anchor => RecolorDecision {
            background,
            foreground: palette.link,
            border: None,
        },
        ElementKind::FormControl => RecolorDecision {
            background: palette.accent_background,
            foreground: palette.text,
            border: Some(palette.control_border),
        },
        ElementKind::Other => RecolorDecision {
            background,
            foreground,
            border: None,
        },
    }
}
