use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// The full address of the current page, as matched against the allow-list.
///
/// # Errors
/// Returns an error if the location cannot be read.
pub fn page_href() -> Result<String, JsValue> {
    window().location().href()
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Read one post-cascade computed style property of an element.
///
/// A document without a view returns the empty string, which parses to
/// the "no color" sentinel downstream.
///
/// # Errors
/// Returns an error if the computed style cannot be resolved for the element.
pub fn computed_property(element: &Element, property: &str) -> Result<String, JsValue> {
    match window().get_computed_style(element)? {
        Some(style) => style.get_property_value(property),
        None => Ok(String::new()),
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log a warning message to the browser console.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from(message));
}
