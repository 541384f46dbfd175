use leptos::ev::EventDescriptor;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Registers a window listener for the lifetime of the current reactive owner.
///
/// The listener is removed when the owner is cleaned up, whichever way the
/// component goes away.
pub fn use_window_listener<E>(event: E, handler: impl Fn(E::EventType) + 'static)
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let handle = window_event_listener(event, handler);
    on_cleanup(move || handle.remove());
}
