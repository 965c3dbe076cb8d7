//! One-off touches on load: footer copyright year and the console greeting.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Writes the current year into the footer's year slot, if the page has one.
pub fn stamp_current_year(document: &Document, year_id: &str) -> Option<u32> {
    let element = document.get_element_by_id(year_id)?;
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
    Some(year)
}

/// Styled hello for anyone who opens the devtools console.
pub fn print_greeting() {
    let lines = [
        ("%c👋 Hey there!", "font-size: 24px; font-weight: bold;"),
        ("%cInterested in how this site was built?", "font-size: 14px;"),
        (
            "%cIt's static HTML and CSS, with the interactive bits compiled from Rust to WebAssembly!",
            "font-size: 14px; color: #3b82f6;",
        ),
        (
            "%cCheck out the source: https://github.com/yourusername/portfolio",
            "font-size: 12px; color: #666;",
        ),
    ];
    for (text, style) in lines {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}
