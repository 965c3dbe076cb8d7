//! DOM fixtures for the browser tests.

#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit, Window,
};

pub fn window() -> Window {
    web_sys::window().unwrap()
}

pub fn document() -> Document {
    window().document().unwrap()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap()
}

/// Instant jump, no smooth behavior.
pub fn jump_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

/// Where the page would be scrolled to put `element` at the viewport top,
/// `offset` pixels further up.
pub fn document_top(element: &Element, offset: f64) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y() - offset
}

/// Markup appended to `<body>` for one test, removed again on drop.
pub struct Fixture {
    root: HtmlElement,
}

impl Fixture {
    pub fn new(html: &str) -> Self {
        let document = document();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }

    pub fn find(&self, selector: &str) -> HtmlElement {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("fixture has no `{selector}`"))
            .unchecked_into()
    }

    pub fn find_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = self.root.query_selector_all(selector).unwrap();
        (0..list.length())
            .filter_map(|index| list.item(index))
            .map(|node| node.unchecked_into())
            .collect()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Bubbling, cancelable event. Returns `false` if a handler prevented the default.
pub fn dispatch(target: &Element, event_type: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Plain `Event` on the window, e.g. `resize`.
pub fn dispatch_on_window(event_type: &str) {
    let event = Event::new(event_type).unwrap();
    window().dispatch_event(&event).unwrap();
}

pub fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}
