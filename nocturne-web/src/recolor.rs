//! The element recolorer: applies per-element color decisions to the live
//! DOM tree.

use nocturne_core::{
    ElementKind, LIGHT_THEME_CLASSES, PROCESSED_CLASS, Palette, decide, parse_color,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

/// Stateless walker that recolors an element and its subtree with one
/// fixed palette. Cheap to clone into the mutation watcher.
#[derive(Debug, Clone)]
pub struct Recolorer {
    palette: Palette,
}

impl Recolorer {
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Insert the global rule tying the processed marker class to the
    /// primary colors, so a stylesheet loaded later cannot re-assert a
    /// light background over already-handled elements.
    ///
    /// # Errors
    /// Returns an error if the style element cannot be created or attached.
    pub fn inject_style_rule(&self, document: &Document) -> Result<(), JsValue> {
        let style = document.create_element("style")?;
        style.set_text_content(Some(&self.palette.style_rule()));
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?;
        head.append_child(&style)?;
        Ok(())
    }

    /// Recolor `root` and every element beneath it.
    ///
    /// Explicit work-list depth-first walk, parent before children in
    /// document order: a child's computed background may depend on an
    /// ancestor that has not been updated yet. An element already carrying
    /// the processed mark is skipped without descending, which makes a
    /// second pass over the same subtree a true no-op. A fault on one
    /// element is logged and never stops siblings or the rest of the walk.
    pub fn process(&self, root: &Element) {
        let mut pending = vec![root.clone()];
        while let Some(element) = pending.pop() {
            if element.class_list().contains(PROCESSED_CLASS) {
                continue;
            }
            if let Err(err) = self.recolor_one(&element) {
                let message = dom::js_error_message(&err);
                log::warn!("skipping <{}>: {message}", element.tag_name().to_lowercase());
                dom::console_warn(&format!("nocturne: skipping element: {message}"));
            }
            let children = element.children();
            // Reverse push keeps document order on the LIFO work list.
            for index in (0..children.length()).rev() {
                if let Some(child) = children.item(index) {
                    pending.push(child);
                }
            }
        }
    }

    fn recolor_one(&self, element: &Element) -> Result<(), JsValue> {
        let class_list = element.class_list();
        for light_class in LIGHT_THEME_CLASSES {
            class_list.remove_1(light_class)?;
        }

        let current_bg = parse_color(&dom::computed_property(element, "background-color")?);
        let current_fg = parse_color(&dom::computed_property(element, "color")?);
        let kind = ElementKind::from_tag(&element.tag_name());
        let decision = decide(kind, current_bg, current_fg, &self.palette);

        let style = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| JsValue::from_str("element has no inline style"))?
            .style();
        style.set_property_with_priority(
            "background-color",
            &decision.background.to_css(),
            "important",
        )?;
        style.set_property_with_priority("color", &decision.foreground.to_css(), "important")?;
        if let Some(border) = decision.border {
            style.set_property_with_priority("border-color", &border.to_css(), "important")?;
        }

        class_list.add_1(PROCESSED_CLASS)?;
        Ok(())
    }
}
