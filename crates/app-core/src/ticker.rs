//! Frame scheduling abstraction.
//!
//! Decouples the animation loop's lifecycle from any platform refresh
//! mechanism: the web frontend steps a [`Ticker`] from
//! `requestAnimationFrame` with measured deltas, tests step it with
//! synthetic ones. Callbacks are removed by id, which gives scene
//! unmounting a deterministic release path.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallbackId(u64);

type FrameFn = Box<dyn FnMut(Duration)>;

#[derive(Default)]
pub struct Ticker {
    callbacks: Vec<(CallbackId, FrameFn)>,
    next_id: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: FrameFn) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: CallbackId) {
        self.callbacks.retain(|(cb_id, _)| *cb_id != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run every registered callback with the same elapsed delta.
    pub fn step(&mut self, dt: Duration) {
        for (_, cb) in self.callbacks.iter_mut() {
            cb(dt);
        }
    }
}
