//! The user-curated domain allow-list and its normalization rules.
//!
//! The list itself is owned by the host's key-value store; this module
//! holds the canonical-form rules, the match predicate, and the add and
//! remove validation used by the management surface.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed key under which the stored entry sequence lives.
pub const STORAGE_KEY: &str = "nocturne.allowlist";

static SCHEME_AND_WWW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?").expect("valid prefix pattern"));

/// Reduce a raw URL or hostname to its canonical stored form: no scheme,
/// no leading `www.`, no path or query, lowercase, trimmed.
#[must_use]
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = SCHEME_AND_WWW.replace(trimmed, "");
    let host = stripped.split('/').next().unwrap_or_default();
    let host = host.split('?').next().unwrap_or_default();
    host.to_lowercase().trim().to_string()
}

/// Validation failures surfaced by the list-management collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllowListError {
    #[error("empty domain entry")]
    EmptyEntry,
    #[error("domain already listed: {0}")]
    Duplicate(String),
}

/// Ordered sequence of normalized domain entries.
///
/// Matching is substring containment against the full page address, so an
/// entry `example.com` covers every subdomain and path of that site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a page address is covered by any listed entry. An empty
    /// list never matches.
    #[must_use]
    pub fn matches_url(&self, page_url: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| !entry.is_empty() && page_url.contains(entry.as_str()))
    }

    /// Normalize and append a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AllowListError::EmptyEntry`] when nothing remains after
    /// normalization and [`AllowListError::Duplicate`] when the canonical
    /// form is already listed.
    pub fn add(&mut self, raw: &str) -> Result<&str, AllowListError> {
        let domain = normalize_domain(raw);
        if domain.is_empty() {
            return Err(AllowListError::EmptyEntry);
        }
        if self.entries.iter().any(|e| *e == domain) {
            return Err(AllowListError::Duplicate(domain));
        }
        self.entries.push(domain);
        Ok(self.entries.last().map(String::as_str).unwrap_or_default())
    }

    /// Remove an entry by its canonical form; true when something was
    /// actually removed.
    pub fn remove(&mut self, domain: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != domain);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_scheme_www_path_and_case() {
        assert_eq!(normalize_domain("https://www.Example.com/cart?x=1"), "example.com");
        assert_eq!(normalize_domain("http://example.com"), "example.com");
        assert_eq!(normalize_domain("  news.ycombinator.com/item  "), "news.ycombinator.com");
        assert_eq!(normalize_domain("www.example.org"), "example.org");
        assert_eq!(normalize_domain("example.com?q=1"), "example.com");
    }

    #[test]
    fn normalization_of_bare_hosts_is_identity() {
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("shop.example.com"), "shop.example.com");
    }

    #[test]
    fn substring_matching_covers_subdomains_and_paths() {
        let list = AllowList::new(vec!["example.com".into()]);
        assert!(list.matches_url("https://shop.example.com/cart"));
        assert!(!list.matches_url("https://example.org/"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = AllowList::default();
        assert!(!list.matches_url("https://example.com/"));
    }

    #[test]
    fn add_normalizes_and_rejects_duplicates() {
        let mut list = AllowList::default();
        assert_eq!(list.add("https://www.Example.com/path"), Ok("example.com"));
        assert_eq!(
            list.add("example.com"),
            Err(AllowListError::Duplicate("example.com".into()))
        );
        assert_eq!(list.add("   "), Err(AllowListError::EmptyEntry));
        assert_eq!(list.add("https://"), Err(AllowListError::EmptyEntry));
        assert_eq!(list.entries(), ["example.com"]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut list = AllowList::new(vec!["example.com".into(), "example.org".into()]);
        assert!(list.remove("example.com"));
        assert!(!list.remove("example.com"));
        assert_eq!(list.entries(), ["example.org"]);
    }

    #[test]
    fn stored_form_is_a_plain_json_array() {
        let list = AllowList::new(vec!["example.com".into(), "example.org".into()]);
        let json = serde_json::to_string(&list).expect("serialize allow-list");
        assert_eq!(json, r#"["example.com","example.org"]"#);
        let back: AllowList = serde_json::from_str(&json).expect("deserialize allow-list");
        assert_eq!(back, list);
    }
}
