//! Typed Leaflet option objects, converted to plain JS objects with
//! `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::MapConfig;
use crate::error::SetupError;
use crate::trips::Trip;

const MARKER_CONTAINER_CLASS: &str = "travel-marker-container";
const MARKER_HTML: &str = r#"<div class="travel-marker"><svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="10" r="3"/></svg></div>"#;
const MARKER_SIZE: u32 = 28;

/// Plain objects rather than ES `Map`s, which Leaflet would not read.
pub fn to_js(options: &impl Serialize) -> Result<JsValue, SetupError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    Ok(options.serialize(&serializer)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
}

impl From<&MapConfig> for MapOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.initial_zoom,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_control: true,
            scroll_wheel_zoom: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: &'static str,
    pub subdomains: &'static str,
    pub max_zoom: u8,
}

impl From<&MapConfig> for TileLayerOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            attribution: config.tile_attribution,
            subdomains: config.tile_subdomains,
            max_zoom: config.tile_max_zoom,
        }
    }
}

/// Circular pin, centered on its coordinate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinIconOptions {
    pub class_name: &'static str,
    pub html: &'static str,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub popup_anchor: [i32; 2],
}

impl Default for PinIconOptions {
    fn default() -> Self {
        let half = MARKER_SIZE / 2;
        Self {
            class_name: MARKER_CONTAINER_CLASS,
            html: MARKER_HTML,
            icon_size: [MARKER_SIZE, MARKER_SIZE],
            icon_anchor: [half, half],
            popup_anchor: [0, -(half as i32)],
        }
    }
}

/// The icon itself is a Leaflet object and is attached separately.
#[derive(Debug, Serialize)]
pub struct MarkerOptions {
    pub title: &'static str,
}

impl From<&Trip> for MarkerOptions {
    fn from(trip: &Trip) -> Self {
        Self { title: trip.title }
    }
}

/// No close button: popups are dismissed by clicking elsewhere on the map.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub close_button: bool,
    pub offset: [i32; 2],
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            close_button: false,
            offset: [0, -8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_options_use_leaflet_names() {
        let options = MapOptions::from(&MapConfig::default());
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "center": [30.0, 0.0],
                "zoom": 2,
                "minZoom": 2,
                "maxZoom": 18,
                "zoomControl": true,
                "scrollWheelZoom": true,
            })
        );
    }

    #[test]
    fn tile_layer_options() {
        let options = TileLayerOptions::from(&MapConfig::default());
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["subdomains"], "abcd");
        assert_eq!(value["maxZoom"], 20);
        assert!(value["attribution"].as_str().unwrap().contains("OpenStreetMap"));
    }

    #[test]
    fn pin_is_anchored_at_its_center() {
        let value = serde_json::to_value(PinIconOptions::default()).unwrap();
        assert_eq!(value["iconSize"], json!([28, 28]));
        assert_eq!(value["iconAnchor"], json!([14, 14]));
        assert_eq!(value["popupAnchor"], json!([0, -14]));
        assert_eq!(value["className"], "travel-marker-container");
    }

    #[test]
    fn popup_has_no_close_button() {
        let value = serde_json::to_value(PopupOptions::default()).unwrap();
        assert_eq!(value, json!({ "closeButton": false, "offset": [0, -8] }));
    }
}
