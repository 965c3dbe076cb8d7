//! Bindings for the slice of Leaflet (the `L` global) the travel map uses.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Clone, Debug)]
    pub type Map;

    /// `L.map(container, options)`; throws if the container already hosts a map.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    /// `bounds` is `[[south, west], [north, east]]`.
    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = closePopup)]
    pub fn close_popup(this: &Map) -> Map;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    #[derive(Clone, Debug)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = DivIcon)]
    #[derive(Clone, Debug)]
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    #[derive(Clone, Debug)]
    pub type Marker;

    /// `lat_lng` is `[latitude, longitude]`.
    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;
}
