//! Browser-side interactivity for the portfolio site, compiled to WebAssembly.
//!
//! Two independent modules run once per page load:
//! - [`page`]: navigation, scroll effects, reveal animations, lightbox, lazy
//!   images, code copy buttons and view tabs.
//! - [`travel_map`]: the Leaflet world map of [`trips::TRIPS`], only on pages
//!   carrying the map container.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod error;
pub mod events;

#[cfg(feature = "page")]
pub mod observer;
#[cfg(feature = "page")]
pub mod page;

#[cfg(feature = "travel-map")]
pub mod debounce;
#[cfg(feature = "travel-map")]
pub mod geo;
#[cfg(feature = "travel-map")]
pub mod travel_map;
#[cfg(feature = "travel-map")]
pub mod trips;

pub use config::{MapConfig, PageConfig, SiteConfig};
pub use error::SetupError;

/// Everything installed on the current page.
pub struct Site {
    #[cfg(feature = "page")]
    pub page: page::PageSession,
    #[cfg(feature = "travel-map")]
    pub travel_map: Option<travel_map::TravelMap>,
}

impl Site {
    #[allow(unused_variables)]
    pub fn install(config: &SiteConfig) -> Result<Self, SetupError> {
        let window = dom::window()?;
        let document = dom::document()?;
        Ok(Self {
            #[cfg(feature = "page")]
            page: page::PageSession::install(&window, &document, &config.page),
            #[cfg(feature = "travel-map")]
            travel_map: error::settle(
                "TravelMap",
                travel_map::TravelMap::install(&window, &document, &config.map, &trips::TRIPS),
            ),
        })
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(error) = init(SiteConfig::default()) {
        zoon::eprintln!("[Folio] Initialization failed: {error}");
    }
}

/// Installs the site once the DOM is parsed. Later calls are no-ops.
pub fn init(config: SiteConfig) -> Result<(), SetupError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return install_once(&config);
    }
    let callback = Closure::once_into_js(move || {
        if let Err(error) = install_once(&config) {
            zoon::eprintln!("[Folio] Initialization failed: {error}");
        }
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

fn install_once(config: &SiteConfig) -> Result<(), SetupError> {
    if SITE.with(|site| site.borrow().is_some()) {
        return Ok(());
    }
    let site = Site::install(config)?;
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}

/// Whether the page-scoped initialization has run.
pub fn is_installed() -> bool {
    SITE.with(|site| site.borrow().is_some())
}
