//! Swaps in `data-src` image sources once they approach the viewport.

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;
use crate::error::SetupError;
use crate::observer::ViewportObserver;

pub struct LazyImages {
    _observer: ViewportObserver,
}

impl LazyImages {
    /// Skipped entirely when the runtime has no `IntersectionObserver`.
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        if !ViewportObserver::is_supported() {
            zoon::println!("[LazyImages] IntersectionObserver unavailable, deferred images stay unloaded");
            return Ok(None);
        }
        let images = dom::query_all(document, config.lazy_image_selector);
        if images.is_empty() {
            return Ok(None);
        }

        let attribute = config.lazy_source_attribute;
        let observer = ViewportObserver::new(None, config.lazy_root_margin, move |image, observer| {
            load_deferred_source(&image, attribute);
            observer.unobserve(&image);
        })?;
        for image in &images {
            observer.observe(image);
        }
        Ok(Some(Self {
            _observer: observer,
        }))
    }
}

/// Moves the deferred attribute into `src`. Returns `false` when there was
/// nothing to load (already loaded or never deferred).
pub fn load_deferred_source(image: &Element, attribute: &str) -> bool {
    let Some(source) = image.get_attribute(attribute) else {
        return false;
    };
    let _ = image.set_attribute("src", &source);
    let _ = image.remove_attribute(attribute);
    true
}
