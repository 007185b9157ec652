use app_core::TransformSink;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// App-lifetime click hook on an element id; the closure is leaked on
/// purpose (gate buttons live for the whole session).
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no element '#{}' to wire", element_id);
    }
}

/// Event listener that detaches when dropped. Scene-scoped wiring uses
/// this so unmounting a scene deterministically releases its handlers,
/// including on early-return mount failures.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl ListenerHandle {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Non-passive variant for listeners that must be able to call
    /// `preventDefault` on wheel/touch events.
    pub fn listen_blocking(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Keep the listener for the rest of the session instead of scoping it.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Writes a layer's smoothed offset as a CSS transform.
pub struct CssTransformSink {
    el: web::HtmlElement,
}

impl CssTransformSink {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl TransformSink for CssTransformSink {
    fn set_offset(&mut self, offset: Vec2) {
        let value = format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y);
        let _ = self.el.style().set_property("transform", &value);
    }
}

/// Find a layer element by class inside a scene container.
pub fn layer_element(container: &web::Element, class: &str) -> Option<web::HtmlElement> {
    match container.query_selector(&format!(".{}", class)) {
        Ok(Some(el)) => el.dyn_into::<web::HtmlElement>().ok(),
        _ => None,
    }
}
