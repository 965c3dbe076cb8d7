//! Event listener registrations owned by the feature that installed them.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::SetupError;

/// A listener that stays attached for as long as this value lives.
///
/// Dropping it detaches the callback before the closure is freed, so a handler
/// can never fire into a dropped Rust closure.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &impl AsRef<EventTarget>,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SetupError> {
        let target = target.as_ref().clone();
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event_type,
            closure,
        })
    }

    /// Same as [`Listener::new`] but registered with `{ passive: true }`.
    pub fn passive(
        target: &impl AsRef<EventTarget>,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SetupError> {
        let target = target.as_ref().clone();
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target,
            event_type,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}
