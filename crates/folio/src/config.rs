//! Tunables for both modules.
//!
//! The page markup and stylesheet key off the class names below, so changing a
//! selector here means changing the HTML/CSS with it.

/// Hrefs that get special-cased by active-link marking.
#[derive(Clone, Debug, PartialEq)]
pub struct NavRoutes {
    /// Link marked active for any path ending in `/`.
    pub home_href: &'static str,
    /// Link marked active for any path under `/projects/`.
    pub projects_href: &'static str,
    /// Link marked active for any path under `/blog/`.
    pub blog_href: &'static str,
}

impl Default for NavRoutes {
    fn default() -> Self {
        Self {
            home_href: "index.html",
            projects_href: "projects.html",
            blog_href: "blog.html",
        }
    }
}

impl NavRoutes {
    /// Whether a nav link pointing at `href` is the active one for `path`.
    pub fn matches(&self, path: &str, href: &str) -> bool {
        path.ends_with(href)
            || (path.ends_with('/') && href == self.home_href)
            || (path.contains("/projects/") && href == self.projects_href)
            || (path.contains("/blog/") && href == self.blog_href)
    }
}

#[derive(Clone, Debug)]
pub struct PageConfig {
    pub year_id: &'static str,
    pub nav_toggle_selector: &'static str,
    pub nav_links_selector: &'static str,
    pub navbar_selector: &'static str,
    pub anchor_selector: &'static str,
    pub fade_in_selector: &'static str,
    pub gallery_item_selector: &'static str,
    pub lazy_image_selector: &'static str,
    pub lazy_source_attribute: &'static str,
    pub code_block_selector: &'static str,
    pub view_tab_selector: &'static str,
    pub view_attribute: &'static str,

    pub active_class: &'static str,
    pub scrolled_class: &'static str,
    pub visible_class: &'static str,

    /// Navbar gets `scrolled_class` once `scrollY` is strictly above this.
    pub scrolled_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub lazy_root_margin: &'static str,
    pub copy_label_revert_ms: u32,

    pub routes: NavRoutes,
    pub greeting: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            year_id: "current-year",
            nav_toggle_selector: ".nav-toggle",
            nav_links_selector: ".nav-links",
            navbar_selector: ".navbar",
            anchor_selector: "a[href^=\"#\"]",
            fade_in_selector: ".fade-in",
            gallery_item_selector: ".gallery-item",
            lazy_image_selector: "img[data-src]",
            lazy_source_attribute: "data-src",
            code_block_selector: "pre code",
            view_tab_selector: ".view-tab",
            view_attribute: "data-view",

            active_class: "active",
            scrolled_class: "scrolled",
            visible_class: "visible",

            scrolled_threshold_px: 50.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            lazy_root_margin: "50px 0px",
            copy_label_revert_ms: 2000,

            routes: NavRoutes::default(),
            greeting: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MapConfig {
    pub container_id: &'static str,
    pub navbar_selector: &'static str,
    pub popup_link_selector: &'static str,

    /// `[latitude, longitude]`
    pub center: [f64; 2],
    pub initial_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,

    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub tile_subdomains: &'static str,
    pub tile_max_zoom: u8,

    /// Ratio each side of the marker bounds grows by before fitting the view.
    pub fit_padding: f64,
    /// Extra gap kept between the navbar and a trip section scrolled to from a popup.
    pub popup_scroll_margin_px: f64,
    pub resize_debounce_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "travel-map",
            navbar_selector: ".navbar",
            popup_link_selector: ".map-popup-link",

            center: [30.0, 0.0],
            initial_zoom: 2,
            min_zoom: 2,
            max_zoom: 18,

            tile_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> \
                 &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
            tile_subdomains: "abcd",
            tile_max_zoom: 20,

            fit_padding: 0.3,
            popup_scroll_margin_px: 20.0,
            resize_debounce_ms: 250,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    pub page: PageConfig,
    pub map: MapConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_suffix_marks_link() {
        let routes = NavRoutes::default();
        assert!(routes.matches("/about.html", "about.html"));
        assert!(routes.matches("/site/about.html", "about.html"));
        assert!(!routes.matches("/about.html", "blog.html"));
    }

    #[test]
    fn root_path_marks_home_only() {
        let routes = NavRoutes::default();
        assert!(routes.matches("/", "index.html"));
        assert!(routes.matches("/portfolio/", "index.html"));
        assert!(!routes.matches("/", "projects.html"));
        assert!(!routes.matches("/", "blog.html"));
    }

    #[test]
    fn section_paths_mark_section_links() {
        let routes = NavRoutes::default();
        assert!(routes.matches("/projects/synth.html", "projects.html"));
        assert!(!routes.matches("/projects/synth.html", "blog.html"));
        assert!(routes.matches("/blog/2024/first-post.html", "blog.html"));
        assert!(!routes.matches("/blog/2024/first-post.html", "index.html"));
    }

    #[test]
    fn section_directory_index_marks_both_home_and_section() {
        // `/projects/` ends with `/` and contains `/projects/`.
        let routes = NavRoutes::default();
        assert!(routes.matches("/projects/", "index.html"));
        assert!(routes.matches("/projects/", "projects.html"));
    }

    #[test]
    fn map_defaults_match_tile_service() {
        let config = MapConfig::default();
        assert_eq!(config.center, [30.0, 0.0]);
        assert_eq!((config.min_zoom, config.max_zoom), (2, 18));
        assert_eq!(config.tile_subdomains, "abcd");
        assert_eq!(config.tile_max_zoom, 20);
        assert!(config.tile_url.contains("{s}") && config.tile_url.contains("{r}"));
    }
}
