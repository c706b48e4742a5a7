//! Page activation: the once-per-load decision and the initial pass.

use nocturne_core::{Activation, Palette, SettingsStore, colorable_selector};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;
use crate::observer;
use crate::recolor::Recolorer;
use crate::store::LocalSettings;

/// Evaluate the allow-list for the current page and, on a match, recolor
/// the existing DOM and start watching for inserted nodes. Runs once per
/// page load; the returned state is terminal until the next navigation.
pub fn boot() -> Activation {
    let href = match dom::page_href() {
        Ok(href) => href,
        Err(err) => {
            // No readable address means no confirmed permission.
            log::warn!("page address unavailable: {}", dom::js_error_message(&err));
            return Activation::Inactive;
        }
    };

    let state = Activation::evaluate(&href, LocalSettings.load_allow_list());
    log::info!("activation for {href}: {state:?}");
    if state.is_active() {
        activate(&dom::document());
    }
    state
}

/// Inject the defense style rule, recolor the colorable element kinds
/// already in the document, and install the mutation watcher.
///
/// The initial pass queries the fixed colorable selector instead of
/// walking from the document element, so head-level and structural nodes
/// are never touched.
fn activate(document: &Document) {
    let recolorer = Recolorer::new(Palette::default());

    if let Err(err) = recolorer.inject_style_rule(document) {
        log::warn!("style rule injection failed: {}", dom::js_error_message(&err));
    }

    match document.query_selector_all(&colorable_selector()) {
        Ok(nodes) => {
            for index in 0..nodes.length() {
                if let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok())
                {
                    recolorer.process(&element);
                }
            }
        }
        Err(err) => {
            log::warn!("initial query failed: {}", dom::js_error_message(&err));
        }
    }

    match document.body() {
        Some(body) => {
            if let Err(err) = observer::watch(recolorer, &body) {
                log::warn!("mutation watcher unavailable: {}", dom::js_error_message(&err));
            }
        }
        None => log::warn!("document has no body; skipping mutation watcher"),
    }
}
