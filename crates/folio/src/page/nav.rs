//! Navigation chrome: mobile menu toggle, navbar scroll state, active link.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::events::Listener;

// --- MenuToggle ---

/// The toggle button and the link list it opens, sharing one "active" state.
struct Menu {
    toggle: Element,
    links: Element,
    active_class: &'static str,
}

impl Menu {
    fn flip(&self) {
        let _ = self.toggle.class_list().toggle(self.active_class);
        let _ = self.links.class_list().toggle(self.active_class);
    }

    fn close(&self) {
        dom::remove_class(&self.toggle, self.active_class);
        dom::remove_class(&self.links, self.active_class);
    }

    fn contains(&self, node: &Node) -> bool {
        self.toggle.contains(Some(node)) || self.links.contains(Some(node))
    }
}

pub struct MenuToggle {
    menu: Rc<Menu>,
    _listeners: Vec<Listener>,
}

impl MenuToggle {
    /// Inert unless the page has both the toggle and the link list.
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        let (Some(toggle), Some(links)) = (
            dom::query(document, config.nav_toggle_selector),
            dom::query(document, config.nav_links_selector),
        ) else {
            return Ok(None);
        };
        let menu = Rc::new(Menu {
            toggle,
            links,
            active_class: config.active_class,
        });

        let mut listeners = Vec::new();
        listeners.push(Listener::new(&menu.toggle, "click", {
            let menu = menu.clone();
            move |_| menu.flip()
        })?);
        for link in dom::query_all_in(&menu.links, "a") {
            listeners.push(Listener::new(&link, "click", {
                let menu = menu.clone();
                move |_| menu.close()
            })?);
        }
        listeners.push(Listener::new(document, "click", {
            let menu = menu.clone();
            move |event| {
                let outside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .is_some_and(|node| !menu.contains(&node));
                if outside {
                    menu.close();
                }
            }
        })?);

        Ok(Some(Self {
            menu,
            _listeners: listeners,
        }))
    }

    pub fn close(&self) {
        self.menu.close();
    }
}

// --- NavbarScroll ---

pub struct NavbarScroll {
    _listener: Listener,
}

impl NavbarScroll {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &PageConfig,
    ) -> Result<Option<Self>, SetupError> {
        let Some(navbar) = dom::query(document, config.navbar_selector) else {
            return Ok(None);
        };
        let threshold = config.scrolled_threshold_px;
        let scrolled_class = config.scrolled_class;
        let update = {
            let window = window.clone();
            move || {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                if scroll_y > threshold {
                    dom::add_class(&navbar, scrolled_class);
                } else {
                    dom::remove_class(&navbar, scrolled_class);
                }
            }
        };
        // Sync with the restored scroll position before the first scroll event.
        update();
        let listener = Listener::passive(window, "scroll", move |_| update())?;
        Ok(Some(Self {
            _listener: listener,
        }))
    }
}

// --- Active link ---

/// Clears the active class from every nav link, then re-adds it to the links
/// matching `path`. Returns how many links ended up active.
pub fn mark_active_links(document: &Document, path: &str, config: &PageConfig) -> usize {
    let selector = format!("{} a", config.nav_links_selector);
    let mut active = 0;
    for link in dom::query_all(document, &selector) {
        dom::remove_class(&link, config.active_class);
        let matches = link
            .get_attribute("href")
            .is_some_and(|href| config.routes.matches(path, &href));
        if matches {
            dom::add_class(&link, config.active_class);
            active += 1;
        }
    }
    active
}
