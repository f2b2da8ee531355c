use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::state::Notification;

/// Dismissible toast; auto-dismiss is scheduled by whoever raised it
pub fn render_toast<F>(notification: &Notification, on_dismiss: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let close = ElementBuilder::new("button")?
        .class("toast-close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("×")
        .build();
    on_click(&close, move |_| on_dismiss());

    let message = ElementBuilder::new("span")?
        .class("toast-message")
        .text(&notification.message)
        .build();

    Ok(ElementBuilder::new("div")?
        .class(notification.css_class())
        .attr("role", "alert")?
        .child(message)?
        .child(close)?
        .build())
}
