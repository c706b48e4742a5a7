//! Subtree mutation watcher for dynamically inserted content.

use js_sys::Array;
use nocturne_core::colorable_selector;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

use crate::dom;
use crate::recolor::Recolorer;

/// Install a `childList` + `subtree` observer on `target` that feeds every
/// inserted colorable element through the recolorer.
///
/// Each inserted node is processed individually rather than re-scanning
/// the tree from the root; the processed mark keeps overlap with the
/// initial pass a no-op. The observer stays alive for the page lifetime.
///
/// # Errors
/// Returns an error if the observer cannot be constructed or attached.
pub fn watch(recolorer: Recolorer, target: &Node) -> Result<(), JsValue> {
    let selector = colorable_selector();
    let on_mutations =
        Closure::<dyn FnMut(Array, MutationObserver)>::new(move |records: Array, _: MutationObserver| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<MutationRecord>() else {
                    continue;
                };
                let added = record.added_nodes();
                for index in 0..added.length() {
                    let Some(node) = added.get(index) else { continue };
                    let Some(element) = node.dyn_ref::<Element>() else {
                        // Text and comment nodes carry no style state.
                        continue;
                    };
                    match element.matches(&selector) {
                        Ok(true) => recolorer.process(element),
                        Ok(false) => {}
                        Err(err) => {
                            log::warn!(
                                "watcher match failed: {}",
                                dom::js_error_message(&err)
                            );
                        }
                    }
                }
            }
        });

    let observer = MutationObserver::new(on_mutations.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(target, &options)?;
    // Watching for the page lifetime; the closure is never reclaimed.
    on_mutations.forget();
    Ok(())
}
