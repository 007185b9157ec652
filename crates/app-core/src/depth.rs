//! Depth-response mapping: how strongly a layer reacts to scroll and
//! pointer input given its responsiveness level.
//!
//! Levels are small integers, nominally 1..=9, and clamp rather than
//! reject. Higher scroll levels start moving earlier in the scroll, which
//! produces the staggered depth-ordered reveal.

/// Fraction of the pointer ceiling actually used; pointer motion is a
/// subtle secondary cue on top of scroll.
pub const POINTER_RESPONSE_SCALE: f32 = 0.2;

#[inline]
fn level_fraction(level: i32) -> f32 {
    level.clamp(1, 9) as f32 / 9.0
}

/// Scroll-driven target offset for one layer.
///
/// The layer is inert until overall progress passes `1 - level/9`; within
/// its active window local progress is renormalized to [0, 1] and scaled
/// by the displacement ceiling and direction sign.
#[inline]
pub fn scroll_value(level: i32, max_px: f32, direction: f32, progress: f32) -> f32 {
    let speed = level_fraction(level);
    let local = ((progress - (1.0 - speed)) / speed).clamp(0.0, 1.0);
    local * max_px * direction
}

/// Pointer-driven target offset for one axis. Proportional, centered at
/// zero, always active; an odd function of the pointer axis value.
#[inline]
pub fn pointer_value(max_px: f32, level: i32, axis_input: f32) -> f32 {
    max_px * POINTER_RESPONSE_SCALE * level_fraction(level) * axis_input
}
