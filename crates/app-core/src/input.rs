//! Latest-sample input state shared between event handlers and the frame
//! loop.
//!
//! Event handlers write, the frame loop reads; within one frame every
//! layer sees the same sample. Last write wins, nothing is queued.

/// The most recent known input snapshot.
///
/// `scroll_progress` is the active scene's scroll fraction in [0, 1];
/// pointer axes are normalized to [-1, 1] with 0 at the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample {
    pub scroll_progress: f32,
    pub pointer_x: f32,
    pub pointer_y: f32,
}

impl InputSample {
    pub fn pointer(&self) -> (f32, f32) {
        (self.pointer_x, self.pointer_y)
    }
}

/// Normalize a client-space pointer coordinate against the viewport
/// extent: 0 px -> -1, extent px -> +1. Degenerate extents yield the
/// centered default rather than NaN.
#[inline]
pub fn pointer_axis_norm(client_px: f32, extent_px: f32) -> f32 {
    if extent_px <= 0.0 {
        return 0.0;
    }
    ((client_px / extent_px) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Normalize a scroll offset against the scrollable span into [0, 1].
#[inline]
pub fn scroll_fraction(offset_px: f64, span_px: f64) -> f32 {
    if span_px <= 0.0 {
        return 0.0;
    }
    ((offset_px / span_px) as f32).clamp(0.0, 1.0)
}
