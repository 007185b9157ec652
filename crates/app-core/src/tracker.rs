//! Retargetable exponential smoothing for a single animated value.
//!
//! Every parallax layer owns one tracker per axis. Event handlers and the
//! depth mapper only ever *retarget*; the frame loop is the only caller of
//! [`SmoothedAxis::step`], so a value is advanced exactly once per frame.

use glam::Vec2;
use std::time::Duration;

/// Critically-damped approach of a current value toward a movable target.
///
/// The step rule is `current += (target - current) * (1 - exp(-dt / tau))`,
/// which converges identically regardless of frame rate and can never
/// overshoot the target.
#[derive(Clone, Debug)]
pub struct SmoothedAxis {
    current: f32,
    target: f32,
    tau_sec: f32,
}

impl SmoothedAxis {
    /// Create a tracker at rest at `initial` with smoothing time constant
    /// `tau_sec`. Non-positive taus are bumped to a tiny positive value so
    /// the tracker degrades to near-instant snapping instead of dividing
    /// by zero.
    pub fn new(initial: f32, tau_sec: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            tau_sec: if tau_sec > 0.0 { tau_sec } else { 1e-3 },
        }
    }

    /// Store a new target. Called freely, typically once per frame per
    /// layer. Non-finite inputs are dropped so one bad sample cannot
    /// poison the tracker forever.
    pub fn retarget(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Advance the current value toward the target by `dt`.
    pub fn step(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        if dt_sec <= 0.0 {
            return;
        }
        let alpha = 1.0 - (-dt_sec / self.tau_sec).exp();
        self.current += (self.target - self.current) * alpha;
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

/// X/Y tracker pair for one layer, sharing a single time constant.
#[derive(Clone, Debug)]
pub struct AxisPair {
    pub x: SmoothedAxis,
    pub y: SmoothedAxis,
}

impl AxisPair {
    pub fn new(tau_sec: f32) -> Self {
        Self {
            x: SmoothedAxis::new(0.0, tau_sec),
            y: SmoothedAxis::new(0.0, tau_sec),
        }
    }

    pub fn retarget(&mut self, target: Vec2) {
        self.x.retarget(target.x);
        self.y.retarget(target.y);
    }

    pub fn step(&mut self, dt: Duration) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }
}
