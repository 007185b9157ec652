//! Scene mount/unmount against the DOM.
//!
//! Mounting looks up each declared layer inside the scene container and
//! attaches a CSS transform sink; a layer whose element is missing simply
//! stays inert (the rest of the scene keeps animating). Dropping the
//! `MountedScene` releases every tracker, sink and listener, so unmount
//! paths cannot leak.

use crate::dom::{self, CssTransformSink, ListenerHandle};
use app_core::{fog_drift_percent, InputSample, SceneAnimator, SceneSpec};
use std::time::Duration;
use web_sys as web;

pub struct MountedScene {
    pub spec: SceneSpec,
    pub animator: SceneAnimator,
    fog_wraps: Vec<Option<web::HtmlElement>>,
    listeners: Vec<ListenerHandle>,
}

impl MountedScene {
    pub fn mount(
        document: &web::Document,
        spec: SceneSpec,
        on_activate: impl FnMut() + 'static,
    ) -> Self {
        let mut animator = SceneAnimator::new(spec.layers);
        let mut listeners = Vec::new();
        let mut fog_wraps = Vec::new();

        match document.get_element_by_id(spec.name) {
            Some(container) => {
                for layer in spec.layers {
                    match dom::layer_element(&container, layer.id) {
                        Some(el) => {
                            animator.attach_sink(layer.id, Box::new(CssTransformSink::new(el)))
                        }
                        None => log::warn!(
                            "[stage] {}: no element for layer '{}', left inert",
                            spec.name,
                            layer.id
                        ),
                    }
                }
                for id in spec.fog_layers {
                    fog_wraps.push(dom::layer_element(&container, &format!("{}-wrap", id)));
                }
                let mut on_activate = on_activate;
                match dom::layer_element(&container, spec.activation_layer) {
                    Some(el) => listeners.push(ListenerHandle::listen(
                        &el,
                        "click",
                        move |_ev| on_activate(),
                    )),
                    None => log::warn!(
                        "[stage] {}: activation layer '{}' missing",
                        spec.name,
                        spec.activation_layer
                    ),
                }
            }
            None => {
                // The engine still runs; there is just nothing to paint.
                log::warn!("[stage] no container '#{}', scene mounted inert", spec.name);
            }
        }

        log::info!("[stage] mounted {}", spec.name);
        Self {
            spec,
            animator,
            fog_wraps,
            listeners,
        }
    }

    /// Attach an extra scene-scoped listener (released on unmount).
    pub fn push_listener(&mut self, handle: ListenerHandle) {
        self.listeners.push(handle);
    }

    /// One animation frame: step every layer, then apply the slow
    /// horizontal fog drift to the fog wrappers.
    pub fn frame(&mut self, dt: Duration, sample: InputSample) {
        self.animator.frame(dt, sample);
        let elapsed = self.animator.elapsed();
        for (i, wrap) in self.fog_wraps.iter().enumerate() {
            if let Some(el) = wrap {
                let pct = fog_drift_percent(elapsed, i);
                let _ = el
                    .style()
                    .set_property("transform", &format!("translateX({:.3}%)", pct));
            }
        }
    }
}

impl Drop for MountedScene {
    fn drop(&mut self) {
        self.animator.detach_sinks();
        self.listeners.clear();
        log::info!("[stage] unmounted {}", self.spec.name);
    }
}
