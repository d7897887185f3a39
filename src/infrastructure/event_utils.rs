use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl EventOptions {
    /// Listener allowed to call `preventDefault` (wheel, touchmove).
    pub fn non_passive() -> Self {
        Self { passive: false, ..Self::default() }
    }
}

impl From<&EventOptions> for EventListenerOptions {
    fn from(options: &EventOptions) -> Self {
        EventListenerOptions {
            phase: if options.capture { EventListenerPhase::Capture } else { EventListenerPhase::Bubble },
            passive: options.passive,
        }
    }
}

/// Typed listener on an element. The listener is removed when the returned
/// handle is dropped.
pub fn element_event_listener_with_options<E>(
    target: &EventTarget,
    event_name: &'static str,
    options: &EventOptions,
    mut cb: impl FnMut(&E) + 'static,
) -> EventListener
where
    E: JsCast,
{
    EventListener::new_with_options(target, event_name, options.into(), move |ev: &Event| {
        cb(ev.unchecked_ref::<E>());
    })
}
