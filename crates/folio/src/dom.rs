//! Small DOM helpers shared by the page and map modules.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::SetupError;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, SetupError> {
    window()?
        .document()
        .ok_or(SetupError::MissingGlobal("document"))
}

/// Whether a constructor or namespace exists on the global object.
pub fn has_global(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

/// `querySelector` that treats an invalid selector the same as no match.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Rendered height of the navbar, 0 when the page has none.
pub fn navbar_height(document: &Document, navbar_selector: &str) -> f64 {
    query(document, navbar_selector)
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or(0.0)
}

/// Document-space scroll position that puts an element's top edge just below
/// the navbar, `margin` pixels further up.
pub fn scroll_offset_top(rect_top: f64, scroll_y: f64, navbar_height: f64, margin: f64) -> f64 {
    rect_top + scroll_y - navbar_height - margin
}

/// Smooth-scroll the window so `target` sits below the fixed navbar.
pub fn scroll_below_navbar(
    window: &Window,
    document: &Document,
    target: &Element,
    navbar_selector: &str,
    margin: f64,
) {
    let rect_top = target.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_offset_top(
        rect_top,
        scroll_y,
        navbar_height(document, navbar_selector),
        margin,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
