//! The per-page activation decision.

use crate::allowlist::AllowList;

/// Lifecycle of the recoloring engine within one page lifetime.
///
/// `Unchecked` exists only before the store has answered; after that the
/// state is terminal until the next navigation or reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Unchecked,
    /// Allow-list matched; the page is recolored and watched.
    Active,
    /// No match, or the store could not be read (fail closed).
    Inactive,
}

impl Activation {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Resolve the activation decision from a store read. Any read fault
    /// means `Inactive`: recoloring never runs without confirmed
    /// permission.
    pub fn evaluate<E: std::fmt::Display>(
        page_url: &str,
        loaded: Result<AllowList, E>,
    ) -> Self {
        match loaded {
            Ok(list) if list.matches_url(page_url) => Self::Active,
            Ok(_) => Self::Inactive,
            Err(err) => {
                log::warn!("allow-list unavailable, staying inactive: {err}");
                Self::Inactive
            }
        }
    }
}
