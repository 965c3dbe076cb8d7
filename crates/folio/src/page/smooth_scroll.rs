//! Smooth scrolling for in-page `#fragment` links.

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::events::Listener;

pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &PageConfig,
    ) -> Result<Option<Self>, SetupError> {
        let anchors = dom::query_all(document, config.anchor_selector);
        if anchors.is_empty() {
            return Ok(None);
        }
        let navbar_selector = config.navbar_selector;
        let listeners = anchors
            .into_iter()
            .map(|anchor| {
                let window = window.clone();
                let document = document.clone();
                Listener::new(&anchor.clone(), "click", move |event| {
                    let Some(href) = anchor.get_attribute("href") else {
                        return;
                    };
                    if href == "#" {
                        return;
                    }
                    // A fragment that isn't a valid selector is just a missing target.
                    let Some(target) = dom::query(&document, &href) else {
                        return;
                    };
                    event.prevent_default();
                    dom::scroll_below_navbar(&window, &document, &target, navbar_selector, 0.0);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
