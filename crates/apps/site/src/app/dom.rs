//! Small DOM helpers: element creation, styling, and listener registration
//! that deregisters itself on teardown.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Creates an element and casts it to `HtmlElement`.
pub(crate) fn el(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let node: HtmlElement = document
        .create_element(tag)?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not an HtmlElement"))?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

/// Creates an element with text content.
pub(crate) fn text_el(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let node = el(document, tag, class)?;
    node.set_text_content(Some(text));
    Ok(node)
}

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Creates an SVG-namespaced element (kept as `Element`; SVG nodes are
/// styled through attributes).
pub(crate) fn svg_el(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag)
}

pub(crate) fn set_style(node: &HtmlElement, property: &str, value: &str) {
    let _ = node.style().set_property(property, value);
}

/// Registers `handler` for `event` on `target` and defers deregistration
/// to the site teardown, so no listener outlives the page session.
pub(crate) fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    let target = target.clone();
    super::with_teardown(move |teardown| {
        teardown.defer(move || {
            let _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            drop(closure);
        });
    });
    Ok(())
}
