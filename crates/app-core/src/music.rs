//! Named music tracks with a single-active-track invariant and a
//! gesture-gated unlock step.
//!
//! The directory is the one piece of state shared across scenes. It is
//! written only from discrete, serialized user actions (last writer wins
//! per track id), so no locking is needed. Playback runs through an
//! abstract [`AudioSink`] so the whole state machine tests natively; the
//! web frontend provides an `HtmlAudioElement` sink.

use fnv::FnvHashMap;
use std::rc::Rc;
use thiserror::Error;

/// Platform playback handle for one registered track.
///
/// `play` is fire-and-forget: platform rejections surface later through
/// error/ended events, never synchronously. `duration` may be NaN until
/// the platform has loaded the track's metadata.
pub trait AudioSink {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f32);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn paused(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackState {
    Registered,
    Playing,
    Paused,
}

/// Snapshot polled from the live sink, not estimated.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
}

#[derive(Debug, Error)]
pub enum MusicError {
    #[error("track '{0}' is not registered")]
    UnknownTrack(String),
    #[error("audio has not been unlocked by a user gesture")]
    Locked,
}

struct TrackEntry<S> {
    sink: S,
    state: TrackState,
    ended: Option<Rc<dyn Fn()>>,
}

/// Process-wide registry of named tracks. At most one track is in the
/// `Playing` state at any instant; switching pauses the previous track
/// without resetting its position.
pub struct MusicDirectory<S: AudioSink> {
    tracks: FnvHashMap<String, TrackEntry<S>>,
    active: Option<String>,
    unlocked: bool,
}

impl<S: AudioSink> Default for MusicDirectory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AudioSink> MusicDirectory<S> {
    pub fn new() -> Self {
        Self {
            tracks: FnvHashMap::default(),
            active: None,
            unlocked: false,
        }
    }

    /// Mark playback as permitted. Must be called synchronously inside a
    /// user-gesture handler once per session; calling again is a no-op.
    pub fn unlock(&mut self) {
        if !self.unlocked {
            log::info!("[music] audio unlocked");
            self.unlocked = true;
        }
    }

    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Register a track under `id`. Idempotent: re-registering an existing
    /// id keeps the existing entry untouched, including the position of a
    /// currently playing track.
    pub fn register(&mut self, id: &str, mut sink: S, volume: f32) {
        if self.tracks.contains_key(id) {
            return;
        }
        sink.set_volume(volume.clamp(0.0, 1.0));
        self.tracks.insert(
            id.to_owned(),
            TrackEntry {
                sink,
                state: TrackState::Registered,
                ended: None,
            },
        );
    }

    /// Switch the active track to `id`. Playback policy violations are
    /// logged and leave the track registered but not playing.
    pub fn play(&mut self, id: &str) {
        if let Err(e) = self.try_play(id) {
            log::warn!("[music] play('{}') refused: {}", id, e);
        }
    }

    fn try_play(&mut self, id: &str) -> Result<(), MusicError> {
        if !self.unlocked {
            return Err(MusicError::Locked);
        }
        if !self.tracks.contains_key(id) {
            return Err(MusicError::UnknownTrack(id.to_owned()));
        }
        // Pause (not reset) the previous active track.
        if let Some(prev) = self.active.clone() {
            if prev != id {
                if let Some(entry) = self.tracks.get_mut(&prev) {
                    if entry.state == TrackState::Playing {
                        entry.sink.pause();
                        entry.state = TrackState::Paused;
                    }
                }
            }
        }
        if let Some(entry) = self.tracks.get_mut(id) {
            self.active = Some(id.to_owned());
            entry.sink.play();
            entry.state = TrackState::Playing;
        }
        Ok(())
    }

    /// Pause `id` if it is the active, playing track; otherwise no effect.
    pub fn pause(&mut self, id: &str) {
        if self.active.as_deref() != Some(id) {
            return;
        }
        if let Some(entry) = self.tracks.get_mut(id) {
            if entry.state == TrackState::Playing {
                entry.sink.pause();
                entry.state = TrackState::Paused;
            }
        }
    }

    /// Resume `id` if it is the active, paused track; otherwise no effect.
    pub fn resume(&mut self, id: &str) {
        if self.active.as_deref() != Some(id) {
            return;
        }
        if let Some(entry) = self.tracks.get_mut(id) {
            if entry.state == TrackState::Paused {
                entry.sink.play();
                entry.state = TrackState::Playing;
            }
        }
    }

    /// Seek within `[0, duration]`; out-of-range times clamp silently.
    pub fn seek(&mut self, id: &str, seconds: f64) {
        if let Some(entry) = self.tracks.get_mut(id) {
            let duration = entry.sink.duration();
            let mut t = seconds.max(0.0);
            if duration.is_finite() {
                t = t.min(duration);
            }
            entry.sink.seek(t);
        }
    }

    /// Live playback snapshot for `id`, polled from the sink.
    pub fn state(&self, id: &str) -> Option<PlaybackState> {
        self.tracks.get(id).map(|entry| PlaybackState {
            current_time: entry.sink.current_time(),
            duration: entry.sink.duration(),
            paused: entry.sink.paused(),
        })
    }

    pub fn track_state(&self, id: &str) -> Option<TrackState> {
        self.tracks.get(id).map(|e| e.state)
    }

    pub fn active_track(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Install the natural-completion callback for `id` (playlist
    /// auto-advance). Replaces any previous callback.
    pub fn set_ended_callback(&mut self, id: &str, callback: Rc<dyn Fn()>) {
        if let Some(entry) = self.tracks.get_mut(id) {
            entry.ended = Some(callback);
        } else {
            log::warn!("[music] ended callback for unknown track '{}'", id);
        }
    }

    /// Handle the platform's end-of-track event for `id`.
    ///
    /// Returns the registered callback to invoke, exactly once per natural
    /// completion; manual pauses never reach this path. The caller invokes
    /// the callback after releasing its borrow of the directory, because
    /// playlist callbacks typically call [`MusicDirectory::play`] again.
    #[must_use]
    pub fn handle_ended(&mut self, id: &str) -> Option<Rc<dyn Fn()>> {
        let entry = self.tracks.get_mut(id)?;
        if entry.state != TrackState::Playing {
            return None;
        }
        entry.state = TrackState::Registered;
        entry.ended.clone()
    }
}
