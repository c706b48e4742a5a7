use nocturne_core::{PROCESSED_CLASS, Palette};
use nocturne_web::dom;
use nocturne_web::recolor::Recolorer;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let doc = dom::document();
    let root = doc.create_element("div").expect("create fixture root");
    root.set_inner_html(html);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("attach fixture");
    root
}

fn inline(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_value(property)
        .expect("read inline property")
}

#[wasm_bindgen_test]
fn processing_marks_and_recolors_the_whole_subtree() {
    let palette = Palette::default();
    let root = fixture("<p>hello <span>world</span></p>");
    Recolorer::new(palette).process(&root);

    let p = root.query_selector("p").unwrap().expect("p exists");
    let span = root.query_selector("span").unwrap().expect("span exists");
    for element in [&root, &p, &span] {
        assert!(element.class_list().contains(PROCESSED_CLASS));
        assert_eq!(inline(element, "background-color"), palette.background.to_css());
        assert_eq!(inline(element, "color"), palette.text.to_css());
    }
}

#[wasm_bindgen_test]
fn styles_are_applied_with_important_priority() {
    let root = fixture("<p>text</p>");
    Recolorer::new(Palette::default()).process(&root);
    let priority = root
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_priority("background-color");
    assert_eq!(priority, "important");
}

#[wasm_bindgen_test]
fn second_pass_is_a_true_no_op() {
    let palette = Palette::default();
    let root = fixture("<p>once</p>");
    let recolorer = Recolorer::new(palette);
    recolorer.process(&root);

    // Tamper below the mark; a reprocess must not descend and fix it.
    let p = root.query_selector("p").unwrap().expect("p exists");
    p.dyn_ref::<HtmlElement>()
        .expect("html element")
        .style()
        .set_property("color", "rgb(1, 2, 3)")
        .expect("tamper");

    recolorer.process(&root);
    assert_eq!(inline(&p, "color"), "rgb(1, 2, 3)");
}

#[wasm_bindgen_test]
fn anchors_get_the_fixed_link_color() {
    let palette = Palette::default();
    let root = fixture("<a href=\"#\" style=\"background-color: #101010\">link</a>");
    Recolorer::new(palette).process(&root);
    let anchor = root.query_selector("a").unwrap().expect("anchor exists");
    assert_eq!(inline(&anchor, "color"), palette.link.to_css());
}

#[wasm_bindgen_test]
fn form_controls_get_accent_surface_and_border() {
    let palette = Palette::default();
    let root = fixture("<input><textarea></textarea><select></select>");
    Recolorer::new(palette).process(&root);
    for tag in ["input", "textarea", "select"] {
        let control = root.query_selector(tag).unwrap().expect("control exists");
        assert_eq!(
            inline(&control, "background-color"),
            palette.accent_background.to_css()
        );
        assert_eq!(inline(&control, "color"), palette.text.to_css());
        assert_eq!(
            inline(&control, "border-color"),
            palette.control_border.to_css()
        );
    }
}

#[wasm_bindgen_test]
fn light_theme_classes_are_stripped() {
    let root = fixture("<div class=\"bg-light navbar-light keepme\">x</div>");
    Recolorer::new(Palette::default()).process(&root);
    let div = root.query_selector("div").unwrap().expect("div exists");
    assert!(!div.class_list().contains("bg-light"));
    assert!(!div.class_list().contains("navbar-light"));
    assert!(div.class_list().contains("keepme"));
}

#[wasm_bindgen_test]
fn style_rule_lands_in_head() {
    let palette = Palette::default();
    Recolorer::new(palette)
        .inject_style_rule(&dom::document())
        .expect("inject rule");
    let head_html = dom::document().head().expect("head").inner_html();
    assert!(head_html.contains("nocturne-processed"));
}
