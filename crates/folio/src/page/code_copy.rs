//! "Copy" buttons on `<pre><code>` blocks.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement};
use zoon::{Task, Timer};

use crate::config::PageConfig;
use crate::error::{SetupError, describe_js_value};
use crate::dom;
use crate::events::Listener;

pub const COPY_LABEL: &str = "Copy";

const BUTTON_CLASS: &str = "copy-code-btn";
const BUTTON_STYLE: &str = "\
    position: absolute; \
    top: 0.5rem; \
    right: 0.5rem; \
    padding: 0.25rem 0.5rem; \
    font-size: 0.75rem; \
    background: var(--color-bg-card); \
    border: 1px solid var(--color-border); \
    border-radius: var(--radius-sm); \
    color: var(--color-text-muted); \
    cursor: pointer; \
    opacity: 0; \
    transition: opacity 0.2s ease;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Label shown on the button until it reverts to [`COPY_LABEL`].
    pub fn label(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Copied!",
            CopyOutcome::Failed => "Failed",
        }
    }
}

/// Writes `text` to the system clipboard.
///
/// Insecure contexts expose no `navigator.clipboard` at all; that counts as a
/// failure like a rejected permission.
pub async fn write_clipboard(text: &str) -> CopyOutcome {
    let promise = match clipboard_write_text(text) {
        Ok(promise) => promise,
        Err(error) => {
            zoon::eprintln!("[CodeCopy] Clipboard API unavailable: {}", describe_js_value(&error));
            return CopyOutcome::Failed;
        }
    };
    match JsFuture::from(promise).await {
        Ok(_) => CopyOutcome::Copied,
        Err(error) => {
            zoon::eprintln!("[CodeCopy] Clipboard write rejected: {}", describe_js_value(&error));
            CopyOutcome::Failed
        }
    }
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically.
fn clipboard_write_text(text: &str) -> Result<Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard is not defined"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
}

pub struct CopyButton {
    button: HtmlElement,
    _listeners: [Listener; 3],
}

impl CopyButton {
    fn attach(document: &Document, block: Element, revert_ms: u32) -> Result<Option<Self>, SetupError> {
        let Some(pre) = block.parent_element().and_then(|pre| pre.dyn_into::<HtmlElement>().ok()) else {
            return Ok(None);
        };

        let button: HtmlElement = document.create_element("button")?.unchecked_into();
        button.set_class_name(BUTTON_CLASS);
        button.set_text_content(Some(COPY_LABEL));
        button.style().set_css_text(BUTTON_STYLE);
        pre.style().set_property("position", "relative")?;
        pre.append_child(&button)?;

        let show = Listener::new(&pre, "mouseenter", {
            let button = button.clone();
            move |_| {
                let _ = button.style().set_property("opacity", "1");
            }
        })?;
        let hide = Listener::new(&pre, "mouseleave", {
            let button = button.clone();
            move |_| {
                let _ = button.style().set_property("opacity", "0");
            }
        })?;
        let copy = Listener::new(&button.clone(), "click", {
            let button = button.clone();
            move |_| {
                let text = block.text_content().unwrap_or_default();
                let button = button.clone();
                Task::start(async move {
                    let outcome = write_clipboard(&text).await;
                    button.set_text_content(Some(outcome.label()));
                    Timer::sleep(revert_ms).await;
                    button.set_text_content(Some(COPY_LABEL));
                });
            }
        })?;

        Ok(Some(Self {
            button,
            _listeners: [show, hide, copy],
        }))
    }

    pub fn button(&self) -> &HtmlElement {
        &self.button
    }
}

pub struct CodeCopy {
    buttons: Vec<CopyButton>,
}

impl CodeCopy {
    pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Self>, SetupError> {
        let mut buttons = Vec::new();
        for block in dom::query_all(document, config.code_block_selector) {
            if let Some(button) = CopyButton::attach(document, block, config.copy_label_revert_ms)? {
                buttons.push(button);
            }
        }
        if buttons.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { buttons }))
    }

    pub fn buttons(&self) -> &[CopyButton] {
        &self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(CopyOutcome::Copied.label(), "Copied!");
        assert_eq!(CopyOutcome::Failed.label(), "Failed");
        assert_eq!(COPY_LABEL, "Copy");
    }

    #[test]
    fn button_starts_hidden() {
        assert!(BUTTON_STYLE.contains("opacity: 0;"));
        assert!(BUTTON_STYLE.contains("position: absolute;"));
    }
}
