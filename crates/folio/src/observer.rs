//! Viewport-intersection watching for reveal animations and lazy images.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::SetupError;

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Older runtimes ship without `IntersectionObserver`; callers fall back.
    pub fn is_supported() -> bool {
        dom::has_global("IntersectionObserver")
    }

    /// `on_enter` runs for every observed element that starts intersecting.
    /// It receives the observer so it can stop watching the element.
    pub fn new(
        threshold: Option<f64>,
        root_margin: &str,
        mut on_enter: impl FnMut(Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, SetupError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
