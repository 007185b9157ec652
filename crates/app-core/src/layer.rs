//! Static per-layer declarations.
//!
//! A layer is one flat visual plane inside a scene. Its configuration is
//! declared when the scene mounts and never changes afterwards; all
//! runtime state (the smoothed trackers, shake impulses) lives in the
//! scene animator.

use crate::depth;

/// Stable key of a layer within its scene. Scene declarations are static,
/// so plain string literals are enough.
pub type LayerId = &'static str;

/// Declarative description of one parallax layer.
#[derive(Clone, Copy, Debug)]
pub struct LayerConfig {
    pub id: LayerId,
    /// Scroll responsiveness level, nominally 1..=9 (clamped on use).
    pub scroll_level: i32,
    /// Scroll displacement ceiling in px.
    pub scroll_max: f32,
    /// Scroll direction sign, +1.0 or -1.0.
    pub direction: f32,
    /// Pointer responsiveness level, nominally 1..=9 (clamped on use).
    pub pointer_level: i32,
    /// Pointer displacement ceiling in px.
    pub pointer_max: f32,
    /// Smoothing time constant for this layer's trackers, seconds.
    pub tau_sec: f32,
    /// Shake strength multiplier in [0, 1]; 0 means not shake-eligible.
    pub shake_strength: f32,
    /// Fog breathe factor; 0 for non-fog layers.
    pub breathe: f32,
}

impl LayerConfig {
    /// Fixed-part constructor used by the scene tables; shake and breathe
    /// default to off.
    pub const fn plane(
        id: LayerId,
        scroll_level: i32,
        scroll_max: f32,
        direction: f32,
        pointer_level: i32,
        pointer_max: f32,
        tau_sec: f32,
    ) -> Self {
        Self {
            id,
            scroll_level,
            scroll_max,
            direction,
            pointer_level,
            pointer_max,
            tau_sec,
            shake_strength: 0.0,
            breathe: 0.0,
        }
    }

    pub const fn with_shake(mut self, strength: f32) -> Self {
        self.shake_strength = strength;
        self
    }

    pub const fn with_breathe(mut self, factor: f32) -> Self {
        self.breathe = factor;
        self
    }

    pub fn shake_eligible(&self) -> bool {
        self.shake_strength > 0.0
    }

    /// Combined scroll + pointer target for this layer's y axis.
    pub fn target_y(&self, scroll_progress: f32, pointer_y: f32) -> f32 {
        depth::scroll_value(
            self.scroll_level,
            self.scroll_max,
            self.direction,
            scroll_progress,
        ) + depth::pointer_value(self.pointer_max, self.pointer_level, pointer_y)
    }

    /// Pointer-only target for this layer's x axis (scroll drives y only).
    pub fn target_x(&self, pointer_x: f32) -> f32 {
        depth::pointer_value(self.pointer_max, self.pointer_level, pointer_x)
    }
}
