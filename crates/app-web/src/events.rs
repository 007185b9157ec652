use crate::dom::ListenerHandle;
use app_core::{pointer_axis_norm, scroll_fraction, InputSample, SceneFlow};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that scroll the page; suppressed while scroll is locked.
const SCROLL_KEYS: &[&str] = &[
    "ArrowUp", "ArrowDown", "PageUp", "PageDown", "Home", "End", " ",
];

/// Track pointer position, normalized to [-1, 1] per axis against the
/// viewport. Writes the shared sample; never advances time.
pub fn wire_pointermove(sample: Rc<RefCell<InputSample>>) -> Option<ListenerHandle> {
    let window = web::window()?;
    let win = window.clone();
    let handle = ListenerHandle::listen(&window, "mousemove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
            return;
        };
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let h = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let mut s = sample.borrow_mut();
        s.pointer_x = pointer_axis_norm(ev.client_x() as f32, w);
        s.pointer_y = pointer_axis_norm(ev.client_y() as f32, h);
    });
    Some(handle)
}

/// Track scroll progress of the document as a [0, 1] fraction, feeding
/// both the shared sample and the flow's progress observer.
pub fn wire_scroll(
    sample: Rc<RefCell<InputSample>>,
    flow: Rc<RefCell<SceneFlow>>,
) -> Option<ListenerHandle> {
    let window = web::window()?;
    let win = window.clone();
    let handle = ListenerHandle::listen(&window, "scroll", move |_ev| {
        let offset = win.scroll_y().unwrap_or(0.0);
        let span = scrollable_span(&win);
        let p = scroll_fraction(offset, span);
        sample.borrow_mut().scroll_progress = p;
        flow.borrow_mut().set_scroll_progress(p);
    });
    Some(handle)
}

fn scrollable_span(window: &web::Window) -> f64 {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let full = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    full - viewport
}

/// Suppress wheel/touch/key scrolling. Dropping the returned handles
/// restores normal scrolling, so the lock is scoped to a scene mount.
pub fn lock_scroll() -> Vec<ListenerHandle> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut handles = Vec::with_capacity(3);
    for event in ["wheel", "touchmove"] {
        handles.push(ListenerHandle::listen_blocking(
            &window,
            event,
            |ev: web::Event| {
                ev.prevent_default();
            },
        ));
    }
    handles.push(ListenerHandle::listen(
        &window,
        "keydown",
        |ev: web::Event| {
            if let Ok(key_ev) = ev.dyn_into::<web::KeyboardEvent>() {
                if SCROLL_KEYS.contains(&key_ev.key().as_str()) {
                    key_ev.prevent_default();
                }
            }
        },
    ));
    handles
}

/// Global keydown hook: 's' fires a shake impulse into the active scene.
pub fn wire_shake_key(mut on_shake: impl FnMut() + 'static) -> Option<ListenerHandle> {
    let window = web::window()?;
    let handle = ListenerHandle::listen(&window, "keydown", move |ev: web::Event| {
        if let Ok(key_ev) = ev.dyn_into::<web::KeyboardEvent>() {
            let key = key_ev.key();
            if key == "s" || key == "S" {
                on_shake();
            }
        }
    });
    Some(handle)
}
