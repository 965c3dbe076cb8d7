//! Mutually exclusive view tabs on project pages.
//!
//! Selecting a tab only moves the active class and reports the tab's view id.
//! Swapping the rendered view is left to whoever supplies `on_select`.

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::events::Listener;

pub struct ViewTabs {
    _listeners: Vec<Listener>,
}

impl ViewTabs {
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        Self::install_with(document, config, |view| {
            zoon::println!("[ViewTabs] Switched to view: {view}");
        })
    }

    pub fn install_with(
        document: &Document,
        config: &PageConfig,
        on_select: impl Fn(&str) + 'static,
    ) -> Result<Option<Self>, SetupError> {
        let tabs: Rc<[Element]> = dom::query_all(document, config.view_tab_selector).into();
        if tabs.is_empty() {
            return Ok(None);
        }
        let on_select = Rc::new(on_select);
        let active_class = config.active_class;
        let view_attribute = config.view_attribute;

        let listeners = tabs
            .iter()
            .map(|tab| {
                let tabs = tabs.clone();
                let tab = tab.clone();
                let on_select = on_select.clone();
                Listener::new(&tab.clone(), "click", move |_| {
                    for other in tabs.iter() {
                        dom::remove_class(other, active_class);
                    }
                    dom::add_class(&tab, active_class);
                    if let Some(view) = tab.get_attribute(view_attribute) {
                        on_select(&view);
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
