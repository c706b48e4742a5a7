//! Allow-list persistence over `localStorage`.

use nocturne_core::{AllowList, STORAGE_KEY, SettingsStore};
use thiserror::Error;

use crate::dom;

/// Faults surfaced by the browser store. Any of these makes the
/// activation decision fail closed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("stored allow-list is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// [`SettingsStore`] backed by the page's `localStorage`, holding the
/// allow-list as a JSON string array under [`STORAGE_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSettings;

impl SettingsStore for LocalSettings {
    type Error = StoreError;

    fn load_allow_list(&self) -> Result<AllowList, StoreError> {
        let storage = dom::local_storage()
            .map_err(|err| StoreError::Unavailable(dom::js_error_message(&err)))?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|err| StoreError::Unavailable(dom::js_error_message(&err)))?;
        match raw {
            None => Ok(AllowList::default()),
            Some(json) => Ok(serde_json::from_str(&json)?),
        }
    }

    fn save_allow_list(&self, list: &AllowList) -> Result<(), StoreError> {
        let storage = dom::local_storage()
            .map_err(|err| StoreError::Unavailable(dom::js_error_message(&err)))?;
        let json = serde_json::to_string(list)?;
        storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|err| StoreError::Unavailable(dom::js_error_message(&err)))
    }
}
