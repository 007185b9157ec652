// Host-side tests for the scene animator, shake impulses and fog drift.

use app_core::scene::{fog_drift_percent, SceneAnimator, TransformSink};
use app_core::{
    InputSample, LayerConfig, ShakeBroadcaster, FOG_DRIFT_PERCENT, SCENE_ONE, SCENE_THREE,
    SCENE_TWO, SHAKE_HOLD,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn layers() -> &'static [LayerConfig] {
    const L: &[LayerConfig] = &[
        LayerConfig::plane("bg", 1, 30.0, 1.0, 2, 30.0, 0.2),
        LayerConfig::plane("mid", 5, 100.0, -1.0, 4, 100.0, 0.2).with_shake(0.4),
        LayerConfig::plane("fog", 3, 40.0, -1.0, 2, 40.0, 0.2).with_breathe(1.0),
    ];
    L
}

/// Captures the offsets pushed to one layer.
#[derive(Clone, Default)]
struct Capture(Rc<RefCell<Vec<Vec2>>>);

impl TransformSink for Capture {
    fn set_offset(&mut self, offset: Vec2) {
        self.0.borrow_mut().push(offset);
    }
}

fn run_frames(scene: &mut SceneAnimator, n: usize, sample: InputSample) {
    for _ in 0..n {
        scene.frame(FRAME, sample);
    }
}

#[test]
fn attached_sink_receives_an_offset_every_frame() {
    let mut scene = SceneAnimator::new(layers());
    let cap = Capture::default();
    scene.attach_sink("mid", Box::new(cap.clone()));

    run_frames(&mut scene, 10, InputSample::default());
    assert_eq!(cap.0.borrow().len(), 10);
}

#[test]
fn sink_for_undeclared_layer_is_dropped() {
    let mut scene = SceneAnimator::new(layers());
    let cap = Capture::default();
    scene.attach_sink("ghost", Box::new(cap.clone()));
    run_frames(&mut scene, 5, InputSample::default());
    assert!(cap.0.borrow().is_empty());
}

#[test]
fn layer_without_sink_still_animates() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample {
        scroll_progress: 1.0,
        ..Default::default()
    };
    run_frames(&mut scene, 200, sample);
    let offset = scene.offset("mid").unwrap();
    assert!(
        (offset.y + 100.0).abs() < 0.5,
        "inert-output layer should still track, got {offset:?}"
    );
}

#[test]
fn scroll_moves_layers_by_depth_and_direction() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample {
        scroll_progress: 1.0,
        ..Default::default()
    };
    run_frames(&mut scene, 400, sample);

    let bg = scene.offset("bg").unwrap();
    let mid = scene.offset("mid").unwrap();
    assert!((bg.y - 30.0).abs() < 0.5, "bg sinks by its ceiling: {bg:?}");
    assert!((mid.y + 100.0).abs() < 0.5, "mid lifts by its ceiling: {mid:?}");
}

#[test]
fn pointer_moves_both_axes() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample {
        scroll_progress: 0.0,
        pointer_x: 1.0,
        pointer_y: -1.0,
    };
    run_frames(&mut scene, 400, sample);
    let mid = scene.offset("mid").unwrap();
    // pointer ceiling 100 at level 4: 100 * 0.2 * 4/9 ≈ 8.89 px
    assert!((mid.x - 8.89).abs() < 0.1, "x deflection: {mid:?}");
    assert!((mid.y + 8.89).abs() < 0.1, "y deflection: {mid:?}");
}

#[test]
fn shake_displaces_only_eligible_layers_within_bounds() {
    let mut scene = SceneAnimator::new(layers());
    run_frames(&mut scene, 5, InputSample::default());
    let bg_target = scene.target("bg").unwrap();
    let mid_target = scene.target("mid").unwrap();

    let mut shaker = ShakeBroadcaster::new(7);
    shaker.trigger(&mut scene, 30.0);
    scene.frame(FRAME, InputSample::default());

    let mid_after = scene.target("mid").unwrap();
    let delta = mid_after - mid_target;
    assert!(delta.length() > 0.0, "eligible layer must be displaced");
    assert!(
        delta.length() <= 0.4 * 30.0 + 1e-3,
        "displacement exceeds bound: {delta:?}"
    );
    assert_eq!(scene.target("bg").unwrap(), bg_target);
}

#[test]
fn shake_target_returns_to_baseline_after_the_hold() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample::default();
    run_frames(&mut scene, 3, sample);
    let baseline = scene.target("mid").unwrap();

    let mut shaker = ShakeBroadcaster::new(99);
    shaker.trigger(&mut scene, 30.0);
    scene.frame(FRAME, sample);
    assert_ne!(scene.target("mid").unwrap(), baseline);

    // step past the hold window
    let frames = (SHAKE_HOLD.as_millis() / FRAME.as_millis() + 2) as usize;
    run_frames(&mut scene, frames, sample);
    assert_eq!(scene.target("mid").unwrap(), baseline);
}

#[test]
fn retrigger_replaces_the_pending_impulse() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample::default();
    let mut shaker = ShakeBroadcaster::new(1);

    shaker.trigger(&mut scene, 30.0);
    scene.frame(FRAME, sample);
    let first = scene.target("mid").unwrap();

    shaker.trigger(&mut scene, 30.0);
    scene.frame(FRAME, sample);
    let second = scene.target("mid").unwrap();
    assert_ne!(first, second, "second trigger must replace the first");

    // only one hold window runs; the layer still settles back
    let frames = (SHAKE_HOLD.as_millis() / FRAME.as_millis() + 2) as usize;
    run_frames(&mut scene, frames, sample);
    assert_eq!(scene.target("mid").unwrap(), Vec2::ZERO);
}

#[test]
fn breathe_oscillates_fog_layers_only() {
    let mut scene = SceneAnimator::new(layers());
    let sample = InputSample::default();

    run_frames(&mut scene, 60, sample); // ~1 s in
    let fog_target = scene.target("fog").unwrap();
    let bg_target = scene.target("bg").unwrap();
    assert!(
        fog_target.y.abs() > 0.1,
        "fog should breathe off baseline: {fog_target:?}"
    );
    assert_eq!(bg_target.y, 0.0, "non-fog layer must not breathe");
}

#[test]
fn shake_targets_lists_eligible_layers() {
    let scene = SceneAnimator::new(SCENE_ONE.layers);
    let targets = scene.shake_targets();
    assert!(!targets.is_empty());
    assert!(targets.iter().all(|(_, s)| *s > 0.0));
    assert!(
        !targets.iter().any(|(id, _)| *id == "bg"),
        "the background never shakes"
    );
}

#[test]
fn detach_sinks_stops_output_but_not_animation() {
    let mut scene = SceneAnimator::new(layers());
    let cap = Capture::default();
    scene.attach_sink("mid", Box::new(cap.clone()));
    run_frames(&mut scene, 5, InputSample::default());
    scene.detach_sinks();
    let count = cap.0.borrow().len();

    let sample = InputSample {
        scroll_progress: 1.0,
        ..Default::default()
    };
    run_frames(&mut scene, 100, sample);
    assert_eq!(cap.0.borrow().len(), count, "no output after detach");
    assert!(scene.offset("mid").unwrap().y < -1.0, "still animating");
}

#[test]
fn fog_drift_sweeps_between_zero_and_its_ceiling() {
    // Starts at rest, reaches the full travel half a period in, and comes
    // back, never leaving the [ceiling, 0] band.
    assert_eq!(fog_drift_percent(0.0, 0), 0.0);
    let full = fog_drift_percent(20.0, 0); // base period 20 s
    assert!((full - FOG_DRIFT_PERCENT).abs() < 1e-3);
    let back = fog_drift_percent(40.0, 0);
    assert!(back.abs() < 1e-3);

    for i in 0..200 {
        let t = i as f64 * 0.5;
        for fog_index in 0..4 {
            let v = fog_drift_percent(t, fog_index);
            assert!(
                (FOG_DRIFT_PERCENT - 1e-3..=1e-3).contains(&v),
                "drift out of band at t={t}, index {fog_index}: {v}"
            );
        }
    }
}

#[test]
fn fog_sheets_desync_on_a_period_ladder() {
    // Periods 20/25/30/35 s by sheet index: half the base period in, the
    // sheets must disagree.
    let a = fog_drift_percent(10.0, 0);
    let b = fog_drift_percent(10.0, 1);
    let c = fog_drift_percent(10.0, 2);
    let d = fog_drift_percent(10.0, 3);
    assert!((a - b).abs() > 0.1);
    assert!((b - c).abs() > 0.1);
    assert!((c - d).abs() > 0.1);

    // the fourth sheet's full travel lands at half its 35 s period
    let full = fog_drift_percent(17.5, 3);
    assert!((full - FOG_DRIFT_PERCENT).abs() < 1e-3);
}

#[test]
fn every_scene_carries_a_drift_only_smoke_sheet() {
    for spec in [SCENE_ONE, SCENE_TWO, SCENE_THREE] {
        assert_eq!(spec.fog_layers.len(), 4, "{}: four fog sheets", spec.name);
        assert_eq!(spec.fog_layers[0], "smoke");
        // drift-only: no scroll/pointer tracking for the first sheet
        assert!(
            !spec.layers.iter().any(|l| l.id == "smoke"),
            "{}: 'smoke' must not be a tracked layer",
            spec.name
        );
        // the breathing sheets remain tracked layers
        for id in &spec.fog_layers[1..] {
            assert!(
                spec.layers.iter().any(|l| l.id == *id),
                "{}: '{}' missing from the layer table",
                spec.name,
                id
            );
        }
    }
}
