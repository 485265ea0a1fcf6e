//! Browser helpers shared by the behavior modules.
//!
//! Everything browser-side here wraps a `web_sys` call so behaviors can use
//! `?` with `MountError` instead of juggling `JsValue`s.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Whether `document.readyState` says parsing has finished.
///
/// Only `"loading"` means the markup may still be incomplete; `"interactive"`,
/// `"complete"`, and anything a future browser reports count as parsed.
#[must_use]
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(feature = "hydrate")]
pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

#[cfg(feature = "hydrate")]
pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// Element by id, or [`MountError::MissingElement`].
#[cfg(feature = "hydrate")]
pub fn by_id(doc: &Document, id: &str) -> Result<Element, MountError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(format!("#{id}")))
}

/// All elements in the document matching `selector`, in document order.
#[cfg(feature = "hydrate")]
pub fn select_all(doc: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
#[cfg(feature = "hydrate")]
pub fn select_within(root: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

#[cfg(feature = "hydrate")]
fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` for the page's lifetime.
#[cfg(feature = "hydrate")]
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` after `millis`. Zero still defers to the next task.
#[cfg(feature = "hydrate")]
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, f).forget();
}

/// Run `f` on the next animation frame.
#[cfg(feature = "hydrate")]
pub fn next_frame(f: &Closure<dyn FnMut(f64)>) -> Result<(), MountError> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())?;
    Ok(())
}

/// Set an inline style property on `el`.
#[cfg(feature = "hydrate")]
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), MountError> {
    let html = el
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| MountError::NotHtmlElement(el.tag_name()))?;
    html.style().set_property(property, value)?;
    Ok(())
}

/// Add or remove `class` on `el`.
#[cfg(feature = "hydrate")]
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), MountError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Run `f` once the document has parsed: immediately if it already has,
/// otherwise on `DOMContentLoaded`.
#[cfg(feature = "hydrate")]
pub fn on_ready<F>(f: F) -> Result<(), MountError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if is_parsed(&doc.ready_state()) {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())?;
    Ok(())
}
