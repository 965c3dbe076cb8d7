//! Errors raised while wiring features onto the page.
//!
//! A missing DOM anchor is never an error: installers return `Ok(None)` and the
//! feature stays inert. `SetupError` only covers calls into the browser or the
//! mapping library that actually failed.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum SetupError {
    /// A DOM call threw (create_element, add_event_listener, observer construction, ...).
    Dom(String),
    /// A global the feature relies on is not defined (`window`, `document`, Leaflet's `L`).
    MissingGlobal(&'static str),
    /// Leaflet rejected a call or its options could not be converted.
    Map(String),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Dom(message) => write!(f, "DOM call failed: {message}"),
            SetupError::MissingGlobal(name) => write!(f, "global `{name}` is not available"),
            SetupError::Map(message) => write!(f, "map call failed: {message}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Dom(describe_js_value(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for SetupError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        SetupError::Map(error.to_string())
    }
}

/// Best-effort text for a thrown JS value (usually an `Error` with a message).
pub(crate) fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Logs a failed installer and turns it into an inert feature.
pub(crate) fn settle<T>(feature: &str, result: Result<Option<T>, SetupError>) -> Option<T> {
    result.unwrap_or_else(|error| {
        zoon::eprintln!("[{feature}] Setup failed: {error}");
        None
    })
}
