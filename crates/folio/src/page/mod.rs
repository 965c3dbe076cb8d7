//! Page interactions shared by every page of the site.
//!
//! Each feature installs independently: a feature whose markup is missing stays
//! inert, and a feature whose setup fails is logged and skipped without taking
//! the others down.

pub mod chrome;
pub mod code_copy;
pub mod lazy_images;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod smooth_scroll;
pub mod view_tabs;

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::error::settle;

use code_copy::CodeCopy;
use lazy_images::LazyImages;
use lightbox::Lightbox;
use nav::{MenuToggle, NavbarScroll};
use reveal::Reveal;
use smooth_scroll::SmoothScroll;
use view_tabs::ViewTabs;

/// Everything the page module installed, kept alive for the page session.
#[derive(Default)]
pub struct PageSession {
    pub menu: Option<MenuToggle>,
    pub navbar: Option<NavbarScroll>,
    pub smooth_scroll: Option<SmoothScroll>,
    pub reveal: Option<Reveal>,
    pub lightbox: Option<Lightbox>,
    pub lazy_images: Option<LazyImages>,
    pub code_copy: Option<CodeCopy>,
    pub view_tabs: Option<ViewTabs>,
}

impl PageSession {
    pub fn install(window: &Window, document: &Document, config: &PageConfig) -> Self {
        chrome::stamp_current_year(document, config.year_id);

        let session = Self {
            menu: settle("Menu", MenuToggle::install(document, config)),
            navbar: settle("Navbar", NavbarScroll::install(window, document, config)),
            smooth_scroll: settle("SmoothScroll", SmoothScroll::install(window, document, config)),
            reveal: settle("Reveal", Reveal::install(document, config)),
            lightbox: settle("Lightbox", Lightbox::install(document, config)),
            lazy_images: settle("LazyImages", LazyImages::install(document, config)),
            code_copy: settle("CodeCopy", CodeCopy::install(document, config)),
            view_tabs: settle("ViewTabs", ViewTabs::install(document, config)),
        };

        match window.location().pathname() {
            Ok(path) => {
                nav::mark_active_links(document, &path, config);
            }
            Err(error) => zoon::eprintln!("[Nav] Failed to read location: {error:?}"),
        }

        if config.greeting {
            chrome::print_greeting();
        }
        session
    }
}
