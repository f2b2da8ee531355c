// ============================================================================
// EVENT HANDLING
// ============================================================================
// Every listener registered while a view is built is parked here until the
// app takes them with `take_listeners()`. Dropping an `EventListener` removes
// it from its element and frees the Rust closure, so the app drops the
// previous render's listeners before it clears the root.
// ============================================================================

use std::cell::RefCell;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

thread_local! {
    static PENDING: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

/// Listeners registered since the last call
pub fn take_listeners() -> Vec<EventListener> {
    PENDING.with(|pending| std::mem::take(&mut *pending.borrow_mut()))
}

fn park(listener: EventListener) {
    PENDING.with(|pending| pending.borrow_mut().push(listener));
}

fn listen<E, F>(element: &Element, event_type: &'static str, mut handler: F)
where
    E: JsCast + Clone + 'static,
    F: FnMut(E) + 'static,
{
    park(EventListener::new(element, event_type, move |event: &Event| {
        if let Some(typed) = event.dyn_ref::<E>() {
            handler(typed.clone());
        }
    }));
}

pub fn on_click<F>(element: &Element, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler);
}

/// Fires with the field's current value on every keystroke
pub fn on_input<F>(element: &Element, mut handler: F)
where
    F: FnMut(String) + 'static,
{
    let target = element.clone();
    listen(element, "input", move |_: Event| handler(crate::dom::field_value(&target)));
}

pub fn on_change<F>(element: &Element, mut handler: F)
where
    F: FnMut(String) + 'static,
{
    let target = element.clone();
    listen(element, "change", move |_: Event| handler(crate::dom::field_value(&target)));
}

/// Form submit with the browser's default navigation suppressed
pub fn on_submit<F>(form: &Element, mut handler: F)
where
    F: FnMut() + 'static,
{
    // gloo listeners are passive unless told otherwise
    park(EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            event.prevent_default();
            handler();
        },
    ));
}
