//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Lookups return `Option`; writes whose failure cannot be acted on are
//! discarded with `let _ =`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config::selectors::ACTIVE_CLASS;
use crate::core::error::WidgetError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

// =============================================================================
// Queries
// =============================================================================

/// First element matching `selector` in the document.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// First element matching `selector` below `root`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Element by id.
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// All elements matching `selector` in the document, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(collect_elements)
        .unwrap_or_default()
}

/// All elements matching `selector` below `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query`], but reports the selector when nothing matches.
pub fn require(selector: &'static str) -> Result<Element, WidgetError> {
    query(selector).ok_or(WidgetError::MissingElement(selector))
}

/// Like [`by_id`], but reports the id when nothing matches.
pub fn require_id(id: &'static str) -> Result<Element, WidgetError> {
    by_id(id).ok_or(WidgetError::MissingElement(id))
}

/// Value of a `data-*` attribute, e.g. `data(el, "category")`.
pub fn data(element: &Element, key: &str) -> Option<String> {
    element.get_attribute(&format!("data-{key}"))
}

// =============================================================================
// Classes and Styles
// =============================================================================

/// Adds or removes `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Marks exactly the element at `active` (if any) with the `active` class.
pub fn mark_active(elements: &[Element], active: Option<usize>) {
    for (i, element) in elements.iter().enumerate() {
        set_class(element, ACTIVE_CLASS, Some(i) == active);
    }
}

/// Sets an inline style property. Non-HTML elements are ignored.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Removes an inline style property. Non-HTML elements are ignored.
pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

/// Locks or restores page scrolling (modal overlays).
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    if locked {
        set_style(&body, "overflow", "hidden");
    } else {
        clear_style(&body, "overflow");
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Current vertical page scroll.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// `offsetTop`, `offsetLeft` and `offsetHeight` of an HTML element.
pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |e| f64::from(e.offset_top()))
}

pub fn offset_left(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |e| f64::from(e.offset_left()))
}

pub fn offset_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |e| f64::from(e.offset_height()))
}

/// Scrolls the window vertically to `top`.
pub fn scroll_window_to(top: f64, smooth: bool) {
    if let Some(window) = window() {
        let opts = scroll_options(smooth);
        opts.set_top(top);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Scrolls a container horizontally to `left`.
pub fn scroll_element_to(element: &Element, left: f64, smooth: bool) {
    let opts = scroll_options(smooth);
    opts.set_left(left);
    element.scroll_to_with_scroll_to_options(&opts);
}

fn scroll_options(smooth: bool) -> ScrollToOptions {
    let opts = ScrollToOptions::new();
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    opts
}

/// Focus an element. Returns `true` on success.
pub fn focus(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .is_some_and(|e| e.focus().is_ok())
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

// =============================================================================
// Events
// =============================================================================

/// Attach an event listener for the lifetime of the page.
///
/// # Note
/// The closure is intentionally leaked using `forget()` since the widgets
/// live as long as the page does.
pub fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WidgetError>
where
    E: JsCast + 'static,
{
    let closure = event_closure(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| WidgetError::ListenerFailed(event))?;
    closure.forget();
    Ok(())
}

/// Attach a passive listener (touch and scroll events).
pub fn listen_passive<E>(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WidgetError>
where
    E: JsCast + 'static,
{
    let closure = event_closure(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|_| WidgetError::ListenerFailed(event))?;
    closure.forget();
    Ok(())
}

fn event_closure<E>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
{
    Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Run `callback` on the next animation frame.
pub fn request_animation_frame(callback: impl FnOnce() + 'static) {
    if let Some(window) = window() {
        let closure = Closure::once_into_js(callback);
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }
}

/// Whether the event originated inside an element matching `selector`.
pub fn event_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Horizontal and vertical screen position of the first changed touch.
pub fn touch_point(event: &web_sys::TouchEvent) -> Option<(f64, f64)> {
    let touch = event.changed_touches().get(0)?;
    Some((f64::from(touch.screen_x()), f64::from(touch.screen_y())))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn elements(count: usize) -> Vec<Element> {
        let doc = document().unwrap();
        (0..count)
            .map(|_| doc.create_element("div").unwrap())
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_mark_active_marks_exactly_one() {
        let items = elements(3);
        mark_active(&items, Some(1));
        assert!(!has_class(&items[0], ACTIVE_CLASS));
        assert!(has_class(&items[1], ACTIVE_CLASS));
        assert!(!has_class(&items[2], ACTIVE_CLASS));

        mark_active(&items, None);
        assert!(items.iter().all(|item| !has_class(item, ACTIVE_CLASS)));
    }

    #[wasm_bindgen_test]
    fn test_data_reads_data_attributes() {
        let item = &elements(1)[0];
        item.set_attribute("data-category", "kitchen").unwrap();
        assert_eq!(data(item, "category").as_deref(), Some("kitchen"));
        assert_eq!(data(item, "feature"), None);
    }

    #[wasm_bindgen_test]
    fn test_body_scroll_lock_round_trip() {
        let body = document().unwrap().body().unwrap();
        set_body_scroll_locked(true);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
        set_body_scroll_locked(false);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
    }
}
