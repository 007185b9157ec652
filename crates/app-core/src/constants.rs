use std::time::Duration;

// Shared engine tuning constants used by both the core frame code and the
// web frontend.

// Fog "breathe": vertical sine drift applied to fog layers, scaled by each
// layer's breathe factor.
pub const FOG_BREATHE_RATE: f64 = 0.5; // radians per second
pub const FOG_BREATHE_AMPLITUDE: f32 = 15.0; // px at factor 1.0

// Horizontal fog drift (presentation tween): percent travel and base
// period; the period grows per fog sheet index (20/25/30/35 s across the
// four sheets) so they desync.
pub const FOG_DRIFT_PERCENT: f32 = -20.0;
pub const FOG_DRIFT_BASE_PERIOD_SEC: f64 = 20.0;
pub const FOG_DRIFT_PERIOD_STEP_SEC: f64 = 5.0;

// Shake impulses hold this long before the target snaps back to the
// depth-mapper baseline.
pub const SHAKE_HOLD: Duration = Duration::from_millis(220);

// Default music volume used by the scene presets.
pub const DEFAULT_TRACK_VOLUME: f32 = 0.8;
