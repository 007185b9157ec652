// Host-side tests for the music directory state machine, driven through a
// fake sink so no audio platform is involved.

use app_core::music::{AudioSink, MusicDirectory, TrackState};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    playing: bool,
    position: f64,
    duration: f64,
    volume: f32,
    play_calls: u32,
}

/// Shared handle into a [`FakeSink`] so tests can observe the sink after
/// the directory takes ownership of it.
#[derive(Clone, Default)]
struct Probe(Rc<RefCell<Inner>>);

struct FakeSink {
    probe: Probe,
}

fn sink(duration: f64) -> (FakeSink, Probe) {
    let probe = Probe::default();
    probe.0.borrow_mut().duration = duration;
    (
        FakeSink {
            probe: probe.clone(),
        },
        probe,
    )
}

impl AudioSink for FakeSink {
    fn play(&mut self) {
        let mut i = self.probe.0.borrow_mut();
        i.playing = true;
        i.play_calls += 1;
    }

    fn pause(&mut self) {
        self.probe.0.borrow_mut().playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.probe.0.borrow_mut().position = seconds;
    }

    fn set_volume(&mut self, volume: f32) {
        self.probe.0.borrow_mut().volume = volume;
    }

    fn current_time(&self) -> f64 {
        self.probe.0.borrow().position
    }

    fn duration(&self) -> f64 {
        self.probe.0.borrow().duration
    }

    fn paused(&self) -> bool {
        !self.probe.0.borrow().playing
    }
}

fn directory_with(ids: &[&str]) -> (MusicDirectory<FakeSink>, Vec<Probe>) {
    let mut dir = MusicDirectory::new();
    let mut probes = Vec::new();
    for id in ids {
        let (s, p) = sink(180.0);
        dir.register(id, s, 0.8);
        probes.push(p);
    }
    (dir, probes)
}

#[test]
fn play_before_unlock_is_refused() {
    let (mut dir, probes) = directory_with(&["intro"]);
    dir.play("intro");
    assert_eq!(dir.track_state("intro"), Some(TrackState::Registered));
    assert_eq!(dir.active_track(), None);
    assert_eq!(probes[0].0.borrow().play_calls, 0);
}

#[test]
fn unlock_then_play_starts_the_track() {
    let (mut dir, probes) = directory_with(&["intro"]);
    dir.unlock();
    assert!(dir.unlocked());
    dir.play("intro");
    assert_eq!(dir.track_state("intro"), Some(TrackState::Playing));
    assert_eq!(dir.active_track(), Some("intro"));
    assert!(probes[0].0.borrow().playing);
}

#[test]
fn play_unknown_track_leaves_state_untouched() {
    let (mut dir, _probes) = directory_with(&["intro"]);
    dir.unlock();
    dir.play("nope");
    assert_eq!(dir.active_track(), None);
    assert_eq!(dir.track_state("intro"), Some(TrackState::Registered));
}

#[test]
fn at_most_one_track_plays() {
    let (mut dir, probes) = directory_with(&["a", "b", "c"]);
    dir.unlock();
    dir.play("a");
    dir.play("b");
    dir.play("c");
    let playing: Vec<bool> = probes.iter().map(|p| p.0.borrow().playing).collect();
    assert_eq!(playing, vec![false, false, true]);
    assert_eq!(dir.active_track(), Some("c"));
    assert_eq!(dir.track_state("a"), Some(TrackState::Paused));
    assert_eq!(dir.track_state("b"), Some(TrackState::Paused));
}

#[test]
fn switching_pauses_without_resetting_position() {
    let (mut dir, probes) = directory_with(&["a", "b"]);
    dir.unlock();
    dir.play("a");
    probes[0].0.borrow_mut().position = 42.5; // playback advanced
    dir.play("b");
    assert_eq!(probes[0].0.borrow().position, 42.5);
    assert_eq!(dir.track_state("a"), Some(TrackState::Paused));
}

#[test]
fn replaying_the_active_track_is_harmless() {
    let (mut dir, probes) = directory_with(&["a"]);
    dir.unlock();
    dir.play("a");
    dir.play("a");
    assert_eq!(dir.track_state("a"), Some(TrackState::Playing));
    assert_eq!(probes[0].0.borrow().play_calls, 2);
    assert!(probes[0].0.borrow().playing);
}

#[test]
fn register_is_idempotent_and_keeps_playback() {
    let (mut dir, probes) = directory_with(&["a"]);
    dir.unlock();
    dir.play("a");
    probes[0].0.borrow_mut().position = 10.0;

    let (other, other_probe) = sink(99.0);
    dir.register("a", other, 0.1);

    assert_eq!(dir.track_state("a"), Some(TrackState::Playing));
    assert_eq!(probes[0].0.borrow().position, 10.0);
    assert_eq!(probes[0].0.borrow().volume, 0.8);
    // the replacement sink was never touched
    assert_eq!(other_probe.0.borrow().volume, 0.0);
}

#[test]
fn register_clamps_volume() {
    let mut dir = MusicDirectory::new();
    let (s, p) = sink(60.0);
    dir.register("loud", s, 3.0);
    assert_eq!(p.0.borrow().volume, 1.0);
}

#[test]
fn pause_and_resume_apply_only_to_the_active_track() {
    let (mut dir, probes) = directory_with(&["a", "b"]);
    dir.unlock();
    dir.play("a");

    dir.pause("b"); // not active, no effect
    assert_eq!(dir.track_state("a"), Some(TrackState::Playing));

    dir.pause("a");
    assert_eq!(dir.track_state("a"), Some(TrackState::Paused));
    assert!(!probes[0].0.borrow().playing);

    dir.resume("b"); // not active, no effect
    assert_eq!(dir.track_state("b"), Some(TrackState::Registered));

    dir.resume("a");
    assert_eq!(dir.track_state("a"), Some(TrackState::Playing));
    assert!(probes[0].0.borrow().playing);
}

#[test]
fn seek_clamps_to_track_bounds() {
    let (mut dir, probes) = directory_with(&["a"]);
    dir.seek("a", -5.0);
    assert_eq!(probes[0].0.borrow().position, 0.0);
    dir.seek("a", 500.0);
    assert_eq!(probes[0].0.borrow().position, 180.0);
    dir.seek("a", 30.0);
    assert_eq!(probes[0].0.borrow().position, 30.0);
}

#[test]
fn seek_with_unknown_duration_clamps_low_end_only() {
    let mut dir = MusicDirectory::new();
    let (s, p) = sink(f64::NAN); // metadata not loaded yet
    dir.register("a", s, 0.5);
    dir.seek("a", -1.0);
    assert_eq!(p.0.borrow().position, 0.0);
    dir.seek("a", 1234.0);
    assert_eq!(p.0.borrow().position, 1234.0);
}

#[test]
fn state_polls_the_live_sink() {
    let (mut dir, probes) = directory_with(&["a"]);
    dir.unlock();
    dir.play("a");
    probes[0].0.borrow_mut().position = 12.25;

    let st = dir.state("a").unwrap();
    assert_eq!(st.current_time, 12.25);
    assert_eq!(st.duration, 180.0);
    assert!(!st.paused);
    assert!(dir.state("missing").is_none());
}

#[test]
fn natural_end_fires_the_callback_once() {
    let (mut dir, _probes) = directory_with(&["a"]);
    dir.unlock();
    dir.play("a");

    let fired = Rc::new(RefCell::new(0));
    let fired_cb = fired.clone();
    dir.set_ended_callback("a", Rc::new(move || *fired_cb.borrow_mut() += 1));

    if let Some(cb) = dir.handle_ended("a") {
        cb();
    }
    assert_eq!(*fired.borrow(), 1);
    assert_eq!(dir.track_state("a"), Some(TrackState::Registered));

    // a second ended event for the same completion is ignored
    assert!(dir.handle_ended("a").is_none());
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn ended_while_paused_is_not_a_natural_completion() {
    let (mut dir, _probes) = directory_with(&["a"]);
    dir.unlock();
    dir.play("a");
    dir.pause("a");
    dir.set_ended_callback("a", Rc::new(|| panic!("must not fire")));
    assert!(dir.handle_ended("a").is_none());
}

#[test]
fn playlist_chain_advances_through_ended_callbacks() {
    let dir: Rc<RefCell<MusicDirectory<FakeSink>>> = Rc::new(RefCell::new(MusicDirectory::new()));
    let ids = ["first", "second"];
    for id in ids {
        let (s, _p) = sink(120.0);
        dir.borrow_mut().register(id, s, 0.8);
    }
    let dir_cb = dir.clone();
    dir.borrow_mut()
        .set_ended_callback("first", Rc::new(move || dir_cb.borrow_mut().play("second")));

    dir.borrow_mut().unlock();
    dir.borrow_mut().play("first");

    // the web glue takes the callback out, drops its borrow, then invokes
    let cb = dir.borrow_mut().handle_ended("first");
    if let Some(cb) = cb {
        cb();
    }
    assert_eq!(dir.borrow().active_track(), Some("second"));
    assert_eq!(
        dir.borrow().track_state("second"),
        Some(TrackState::Playing)
    );
    assert_eq!(dir.borrow().track_state("first"), Some(TrackState::Registered));
}
