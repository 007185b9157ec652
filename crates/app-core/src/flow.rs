//! Scene sequencing state machine.
//!
//! Scroll only drives intra-scene animation; moving between scenes is
//! always an explicit user gesture on a designated interactive layer (or
//! the gate/skip buttons). Every transition reports the phase entered so
//! the caller can remount scenes and switch the music track.

use crate::presets::{TRACK_SCENE1, TRACK_SCENE2, TRACK_SCENE3};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The entry gate screen shown before anything animates.
    Gate,
    SceneOne,
    SceneTwo,
    SceneThree,
    /// The normal website content; terminal for this controller.
    Main,
}

impl Phase {
    /// Music track that should be active while this phase is on screen.
    pub fn track(&self) -> Option<&'static str> {
        match self {
            Phase::Gate => None,
            Phase::SceneOne => Some(TRACK_SCENE1),
            Phase::SceneTwo => Some(TRACK_SCENE2),
            Phase::SceneThree | Phase::Main => Some(TRACK_SCENE3),
        }
    }
}

pub struct SceneFlow {
    phase: Phase,
    /// Set while a transition gesture has fired but the next scene has not
    /// mounted yet; repeat gestures are ignored until `settle()`.
    pending: bool,
    scroll_progress: f32,
    progress_observer: Option<Rc<dyn Fn(f32)>>,
}

impl Default for SceneFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFlow {
    pub fn new() -> Self {
        Self {
            phase: Phase::Gate,
            pending: false,
            scroll_progress: 0.0,
            progress_observer: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// User passed the gate screen.
    pub fn enter(&mut self) -> Option<Phase> {
        self.transition_from(Phase::Gate, Phase::SceneOne)
    }

    /// The active scene's designated layer was activated; advance one
    /// scene. Returns the phase entered, or `None` when ignored.
    pub fn activate(&mut self) -> Option<Phase> {
        let next = match self.phase {
            Phase::SceneOne => Phase::SceneTwo,
            Phase::SceneTwo => Phase::SceneThree,
            Phase::SceneThree => Phase::Main,
            Phase::Gate | Phase::Main => return None,
        };
        self.transition_from(self.phase, next)
    }

    /// "Enter website" shortcut exposed only inside scene two.
    pub fn enter_website(&mut self) -> Option<Phase> {
        self.transition_from(Phase::SceneTwo, Phase::Main)
    }

    /// Skip everything from the gate screen.
    pub fn skip(&mut self) -> Option<Phase> {
        self.transition_from(Phase::Gate, Phase::Main)
    }

    fn transition_from(&mut self, expected: Phase, next: Phase) -> Option<Phase> {
        if self.phase != expected {
            return None;
        }
        if self.pending {
            log::info!("[flow] transition already pending, gesture ignored");
            return None;
        }
        log::info!("[flow] {:?} -> {:?}", self.phase, next);
        self.phase = next;
        self.pending = true;
        self.scroll_progress = 0.0;
        Some(next)
    }

    /// The scene entered by the last transition has finished mounting;
    /// gestures may fire again.
    pub fn settle(&mut self) {
        self.pending = false;
    }

    pub fn transition_pending(&self) -> bool {
        self.pending
    }

    /// Whether page scrolling should be suppressed. Only the gate screen
    /// holds the scroll lock; every scene needs live scroll input to
    /// drive its parallax.
    pub fn scroll_locked(&self) -> bool {
        self.phase == Phase::Gate
    }

    /// Record the active scene's scroll progress and notify the observer.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        let p = progress.clamp(0.0, 1.0);
        self.scroll_progress = p;
        if let Some(obs) = &self.progress_observer {
            obs(p);
        }
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Install the continuous scroll-progress observer used by the UI for
    /// progress-dependent chrome.
    pub fn observe_scroll(&mut self, observer: Rc<dyn Fn(f32)>) {
        self.progress_observer = Some(observer);
    }
}
