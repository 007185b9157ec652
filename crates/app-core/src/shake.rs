//! One-shot shake impulses broadcast to every eligible layer of the
//! active scene.

use crate::constants::SHAKE_HOLD;
use crate::scene::SceneAnimator;
use glam::Vec2;
use rand::prelude::*;

/// Pushes bounded pseudo-random displacements into a scene's trackers.
///
/// Each trigger retargets every shake-eligible layer to a random offset
/// bounded by `layer.shake_strength * strength`. The offset holds for a
/// fixed short window, then the targets fall back to the depth-mapper
/// baseline. Overlapping triggers replace each other, so the last
/// scheduled return always wins.
pub struct ShakeBroadcaster {
    rng: StdRng,
}

impl ShakeBroadcaster {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn trigger(&mut self, scene: &mut SceneAnimator, strength: f32) {
        let strength = strength.max(0.0);
        for (id, layer_strength) in scene.shake_targets() {
            let bound = layer_strength * strength;
            if bound <= 0.0 {
                continue;
            }
            let mut disp = Vec2::new(
                self.rng.gen_range(-bound..=bound),
                self.rng.gen_range(-bound..=bound),
            );
            // bound is a magnitude cap, not a per-axis box
            let len = disp.length();
            if len > bound {
                disp *= bound / len;
            }
            scene.apply_impulse(id, disp, SHAKE_HOLD);
        }
    }
}
