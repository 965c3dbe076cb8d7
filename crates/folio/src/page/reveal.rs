//! One-shot fade-in reveal as elements scroll into view.

use web_sys::Document;

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::observer::ViewportObserver;

pub struct Reveal {
    _observer: ViewportObserver,
}

impl Reveal {
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        Self::install_with_support(document, config, ViewportObserver::is_supported())
    }

    /// Without observer support every flagged element is shown right away.
    pub fn install_with_support(
        document: &Document,
        config: &PageConfig,
        observer_supported: bool,
    ) -> Result<Option<Self>, SetupError> {
        let elements = dom::query_all(document, config.fade_in_selector);
        let visible_class = config.visible_class;
        if elements.is_empty() || !observer_supported {
            for element in &elements {
                dom::add_class(element, visible_class);
            }
            return Ok(None);
        }

        let observer = ViewportObserver::new(
            Some(config.reveal_threshold),
            config.reveal_root_margin,
            move |element, observer| {
                dom::add_class(&element, visible_class);
                observer.unobserve(&element);
            },
        )?;
        for element in &elements {
            observer.observe(element);
        }
        Ok(Some(Self {
            _observer: observer,
        }))
    }
}
