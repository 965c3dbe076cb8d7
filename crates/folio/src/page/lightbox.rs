//! Full-screen image overlay for gallery items.
//!
//! The overlay is created once, appended to `<body>`, and reused for every
//! gallery image. While it is open the page itself does not scroll.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent, Node};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::events::Listener;

const OVERLAY_CLASS: &str = "lightbox";
const CLOSE_CLASS: &str = "lightbox-close";

/// The overlay elements, shared by every handler.
pub struct LightboxView {
    overlay: HtmlElement,
    close_button: HtmlElement,
    image: HtmlImageElement,
    body: HtmlElement,
    active_class: &'static str,
}

impl LightboxView {
    fn create(document: &Document, body: HtmlElement, active_class: &'static str) -> Result<Self, SetupError> {
        let overlay: HtmlElement = document.create_element("div")?.unchecked_into();
        overlay.set_class_name(OVERLAY_CLASS);

        let close_button: HtmlElement = document.create_element("button")?.unchecked_into();
        close_button.set_class_name(CLOSE_CLASS);
        close_button.set_attribute("aria-label", "Close lightbox")?;
        close_button.set_text_content(Some("\u{00d7}"));

        let image: HtmlImageElement = document.create_element("img")?.unchecked_into();
        image.set_src("");
        image.set_alt("");

        overlay.append_child(&close_button)?;
        overlay.append_child(&image)?;
        body.append_child(&overlay)?;

        Ok(Self {
            overlay,
            close_button,
            image,
            body,
            active_class,
        })
    }

    pub fn open(&self, source: &HtmlImageElement) {
        self.image.set_src(&source.src());
        self.image.set_alt(&source.alt());
        dom::add_class(&self.overlay, self.active_class);
        let _ = self.body.style().set_property("overflow", "hidden");
    }

    pub fn close(&self) {
        dom::remove_class(&self.overlay, self.active_class);
        let _ = self.body.style().remove_property("overflow");
    }

    pub fn is_open(&self) -> bool {
        dom::has_class(&self.overlay, self.active_class)
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

pub struct Lightbox {
    view: Rc<LightboxView>,
    _listeners: Vec<Listener>,
}

impl Lightbox {
    /// Inert on pages without gallery items.
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        let items = dom::query_all(document, config.gallery_item_selector);
        if items.is_empty() {
            return Ok(None);
        }
        let body = document.body().ok_or(SetupError::MissingGlobal("document.body"))?;
        let view = Rc::new(LightboxView::create(document, body, config.active_class)?);

        let mut listeners = Vec::with_capacity(items.len() + 3);
        for item in items {
            listeners.push(Listener::new(&item.clone(), "click", {
                let view = view.clone();
                move |_| {
                    if let Some(image) = gallery_image(&item) {
                        view.open(&image);
                    }
                }
            })?);
        }
        listeners.push(Listener::new(&view.close_button, "click", {
            let view = view.clone();
            move |_| view.close()
        })?);
        listeners.push(Listener::new(&view.overlay, "click", {
            let view = view.clone();
            move |event| {
                // Only the backdrop itself dismisses; clicks on the image bubble up here too.
                let overlay: &Node = &view.overlay;
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| node.is_same_node(Some(overlay)));
                if on_backdrop {
                    view.close();
                }
            }
        })?);
        listeners.push(Listener::new(document, "keydown", {
            let view = view.clone();
            move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|event| event.key() == "Escape");
                if escape && view.is_open() {
                    view.close();
                }
            }
        })?);

        Ok(Some(Self {
            view,
            _listeners: listeners,
        }))
    }

    pub fn view(&self) -> &LightboxView {
        &self.view
    }
}

fn gallery_image(item: &Element) -> Option<HtmlImageElement> {
    item.query_selector("img")
        .ok()
        .flatten()
        .and_then(|image| image.dyn_into::<HtmlImageElement>().ok())
}
