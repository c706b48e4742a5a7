//! Nocturne Core
//!
//! Platform-agnostic recoloring logic for the Nocturne per-site dark mode.
//! This crate decides which colors an element should get; it never touches
//! a DOM, a store, or any other host facility.

pub mod activation;
pub mod allowlist;
pub mod color;
pub mod contrast;
pub mod element;
pub mod palette;

// Re-export commonly used types
pub use activation::Activation;
pub use allowlist::{AllowList, AllowListError, STORAGE_KEY, normalize_domain};
pub use color::{DARK_THRESHOLD, LIGHT_THRESHOLD, Luminance, Rgb, classify, parse_color};
pub use contrast::{DARKEN_OFFSET, choose_foreground};
pub use element::{
    COLORABLE_TAGS, ElementKind, RecolorDecision, colorable_selector, decide, is_colorable,
};
pub use palette::{LIGHT_THEME_CLASSES, PROCESSED_CLASS, Palette};

/// Trait for abstracting allow-list persistence.
/// Platform-specific implementations should provide this.
pub trait SettingsStore {
    type Error: std::error::Error + 'static;

    /// Load the stored allow-list. A missing list is an empty list, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store is unreachable or holds
    /// an undecodable value.
    fn load_allow_list(&self) -> Result<AllowList, Self::Error>;

    /// Persist the allow-list, replacing the stored sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    fn save_allow_list(&self, list: &AllowList) -> Result<(), Self::Error>;
}
