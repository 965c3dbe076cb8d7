//! Popup markup for a trip marker.

use crate::trips::Trip;

const ARROW_SVG: &str = r#"<svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M7 17l9.2-9.2M17 17V7H7"/></svg>"#;

pub fn popup_content(trip: &Trip) -> String {
    format!(
        r#"<div class="map-popup"><div class="map-popup-title">{title}</div><div class="map-popup-date">{date}</div><a href="{href}" class="map-popup-link">View Photos {ARROW_SVG}</a></div>"#,
        title = escape_html(trip.title),
        date = escape_html(trip.date),
        href = escape_html(&trip.anchor_href()),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
