//! Per-scene animation loop.
//!
//! A [`SceneAnimator`] is created when a scene mounts and dropped when it
//! unmounts; nothing survives across mounts. It owns one tracker pair per
//! declared layer and a typed registry of transform sinks. The frame loop
//! is the single writer: every layer is retargeted and stepped with the
//! same input sample and the same delta, so layers cannot desynchronize
//! within a frame.

use crate::constants::{
    FOG_BREATHE_AMPLITUDE, FOG_BREATHE_RATE, FOG_DRIFT_BASE_PERIOD_SEC, FOG_DRIFT_PERCENT,
    FOG_DRIFT_PERIOD_STEP_SEC,
};
use crate::input::InputSample;
use crate::layer::{LayerConfig, LayerId};
use crate::tracker::AxisPair;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Receives a layer's smoothed offset once per frame. The web frontend
/// maps this to a CSS transform; tests capture the values directly.
pub trait TransformSink {
    fn set_offset(&mut self, offset: Vec2);
}

struct LayerState {
    config: LayerConfig,
    axes: AxisPair,
    impulse: Vec2,
    impulse_left: Duration,
}

pub struct SceneAnimator {
    layers: SmallVec<[LayerState; 16]>,
    sinks: FnvHashMap<LayerId, Box<dyn TransformSink>>,
    elapsed: f64,
}

impl SceneAnimator {
    pub fn new(configs: &[LayerConfig]) -> Self {
        let layers = configs
            .iter()
            .map(|c| LayerState {
                config: *c,
                axes: AxisPair::new(c.tau_sec),
                impulse: Vec2::ZERO,
                impulse_left: Duration::ZERO,
            })
            .collect();
        Self {
            layers,
            sinks: FnvHashMap::default(),
            elapsed: 0.0,
        }
    }

    /// Register the transform sink for a declared layer. A layer with no
    /// sink stays inert on the output side but keeps animating internally,
    /// so it cannot stall the rest of the scene. Sinks for undeclared
    /// layers are dropped with a warning.
    pub fn attach_sink(&mut self, id: LayerId, sink: Box<dyn TransformSink>) {
        if self.layers.iter().any(|l| l.config.id == id) {
            self.sinks.insert(id, sink);
        } else {
            log::warn!("[scene] sink for undeclared layer '{}' ignored", id);
        }
    }

    /// Release every sink handle. Called on unmount before the animator is
    /// dropped so DOM references never outlive the scene.
    pub fn detach_sinks(&mut self) {
        self.sinks.clear();
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().map(|l| l.config.id)
    }

    /// Shake-eligible layers with their strength multipliers.
    pub fn shake_targets(&self) -> SmallVec<[(LayerId, f32); 16]> {
        self.layers
            .iter()
            .filter(|l| l.config.shake_eligible())
            .map(|l| (l.config.id, l.config.shake_strength))
            .collect()
    }

    /// Add a transient displacement to a layer's target for `hold`. A new
    /// impulse replaces any pending one, so overlapping triggers cannot
    /// leave the layer permanently offset.
    pub fn apply_impulse(&mut self, id: LayerId, offset: Vec2, hold: Duration) {
        if let Some(l) = self.layers.iter_mut().find(|l| l.config.id == id) {
            l.impulse = offset;
            l.impulse_left = hold;
        }
    }

    /// Advance every layer by `dt` against the given input sample and push
    /// the smoothed offsets to the attached sinks.
    pub fn frame(&mut self, dt: Duration, sample: InputSample) {
        self.elapsed += dt.as_secs_f64();
        let breathe = (self.elapsed * FOG_BREATHE_RATE).sin() as f32 * FOG_BREATHE_AMPLITUDE;

        for l in self.layers.iter_mut() {
            let c = &l.config;
            let mut target = Vec2::new(
                c.target_x(sample.pointer_x),
                c.target_y(sample.scroll_progress, sample.pointer_y) + breathe * c.breathe,
            );
            if !l.impulse_left.is_zero() {
                target += l.impulse;
                l.impulse_left = l.impulse_left.saturating_sub(dt);
            }
            l.axes.retarget(target);
            l.axes.step(dt);
            if let Some(sink) = self.sinks.get_mut(c.id) {
                sink.set_offset(l.axes.value());
            }
        }
    }

    /// Current smoothed offset of a layer, if declared.
    pub fn offset(&self, id: LayerId) -> Option<Vec2> {
        self.layers
            .iter()
            .find(|l| l.config.id == id)
            .map(|l| l.axes.value())
    }

    /// Current target of a layer's trackers, if declared.
    pub fn target(&self, id: LayerId) -> Option<Vec2> {
        self.layers
            .iter()
            .find(|l| l.config.id == id)
            .map(|l| Vec2::new(l.axes.x.target(), l.axes.y.target()))
    }

    /// Seconds of animation time accumulated since mount.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Stateless horizontal fog drift, a slow yoyo sweep toward
/// [`FOG_DRIFT_PERCENT`]. Pure presentation: the frontend applies it as a
/// percentage translation on fog wrappers, outside the tracker pipeline.
pub fn fog_drift_percent(elapsed_sec: f64, fog_index: usize) -> f32 {
    let period = FOG_DRIFT_BASE_PERIOD_SEC + FOG_DRIFT_PERIOD_STEP_SEC * fog_index as f64;
    let phase = std::f64::consts::PI * elapsed_sec / period;
    FOG_DRIFT_PERCENT * 0.5 * (1.0 - phase.cos()) as f32
}
