//! Interactive world map plotting [`Trip`]s, backed by Leaflet.
//!
//! Only pages with the map container get a map. Once built it lives for the
//! rest of the page session; there is no teardown path.

pub mod leaflet;
pub mod options;
pub mod popup;

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::MapConfig;
use crate::debounce::Debouncer;
use crate::dom;
use crate::error::{SetupError, describe_js_value};
use crate::events::Listener;
use crate::geo::GeoBounds;
use crate::trips::Trip;

use options::{MapOptions, MarkerOptions, PinIconOptions, PopupOptions, TileLayerOptions, to_js};

/// A rendered marker and the trip it was built from.
pub struct PlacedMarker {
    pub marker: leaflet::Marker,
    pub trip: Trip,
}

pub struct TravelMap {
    map: leaflet::Map,
    markers: Vec<PlacedMarker>,
    fitted_bounds: Option<GeoBounds>,
    _resize_debouncer: Rc<Debouncer>,
    _listeners: Vec<Listener>,
}

impl TravelMap {
    /// `Ok(None)` when the page has no map container.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &MapConfig,
        trips: &[Trip],
    ) -> Result<Option<Self>, SetupError> {
        let Some(container) = document
            .get_element_by_id(config.container_id)
            .and_then(|container| container.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(None);
        };
        if !dom::has_global("L") {
            return Err(SetupError::MissingGlobal("L"));
        }

        let map = leaflet::map(&container, &to_js(&MapOptions::from(config))?)
            .map_err(|error| SetupError::Map(describe_js_value(&error)))?;
        leaflet::tile_layer(config.tile_url, &to_js(&TileLayerOptions::from(config))?).add_to(&map);

        let markers = place_markers(&map, trips)?;

        let fitted_bounds = GeoBounds::from_points(markers.iter().map(|placed| placed.trip.coordinates))
            .map(|bounds| bounds.pad(config.fit_padding));
        match fitted_bounds {
            Some(bounds) => {
                map.fit_bounds(&to_js(&bounds.corners())?);
            }
            None => zoon::println!("[TravelMap] No trips to plot, keeping the default view"),
        }

        let resize_debouncer = Rc::new(Debouncer::new(config.resize_debounce_ms, {
            let map = map.clone();
            move || {
                map.invalidate_size();
            }
        }));

        let listeners = vec![
            popup_link_listener(window, document, &map, config)?,
            Listener::passive(window, "resize", {
                let resize_debouncer = resize_debouncer.clone();
                move |_| resize_debouncer.trigger()
            })?,
        ];

        Ok(Some(Self {
            map,
            markers,
            fitted_bounds,
            _resize_debouncer: resize_debouncer,
            _listeners: listeners,
        }))
    }

    pub fn map(&self) -> &leaflet::Map {
        &self.map
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// Padded bounds the view was fitted to; `None` when there were no trips.
    pub fn fitted_bounds(&self) -> Option<GeoBounds> {
        self.fitted_bounds
    }
}

fn place_markers(map: &leaflet::Map, trips: &[Trip]) -> Result<Vec<PlacedMarker>, SetupError> {
    let icon_options = to_js(&PinIconOptions::default())?;
    let popup_options = to_js(&PopupOptions::default())?;
    trips
        .iter()
        .map(|trip| -> Result<PlacedMarker, SetupError> {
            let marker_options = to_js(&MarkerOptions::from(trip))?;
            js_sys::Reflect::set(
                &marker_options,
                &JsValue::from_str("icon"),
                &leaflet::div_icon(&icon_options),
            )?;
            let marker = leaflet::marker(&to_js(&trip.coordinates)?, &marker_options);
            marker.bind_popup(&popup::popup_content(trip), &popup_options);
            marker.add_to(map);
            Ok(PlacedMarker {
                marker,
                trip: *trip,
            })
        })
        .collect()
}

/// Popups are rendered by Leaflet on demand, so their links are handled with a
/// single delegated listener on the document.
fn popup_link_listener(
    window: &Window,
    document: &Document,
    map: &leaflet::Map,
    config: &MapConfig,
) -> Result<Listener, SetupError> {
    let window = window.clone();
    let map = map.clone();
    let link_selector = config.popup_link_selector;
    let navbar_selector = config.navbar_selector;
    let margin = config.popup_scroll_margin_px;
    Listener::new(document, "click", {
        let document = document.clone();
        move |event| {
            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(link_selector).ok().flatten())
            else {
                return;
            };
            event.prevent_default();
            let Some(section) = link
                .get_attribute("href")
                .and_then(|href| dom::query(&document, &href))
            else {
                return;
            };
            map.close_popup();
            dom::scroll_below_navbar(&window, &document, &section, navbar_selector, margin);
        }
    })
}
