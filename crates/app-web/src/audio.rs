use crate::dom::ListenerHandle;
use app_core::music::{AudioSink, MusicDirectory};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The shared music directory over `HtmlAudioElement` sinks.
pub type Music = Rc<RefCell<MusicDirectory<WebAudioSink>>>;

/// One `HtmlAudioElement` per registered track. Playback rejections (for
/// example autoplay policy) are logged asynchronously and never thrown.
pub struct WebAudioSink {
    el: web::HtmlAudioElement,
}

impl WebAudioSink {
    pub fn new(src: &str) -> Option<Self> {
        match web::HtmlAudioElement::new_with_src(src) {
            Ok(el) => {
                el.set_preload("auto");
                Some(Self { el })
            }
            Err(e) => {
                log::error!("[audio] element for '{}' failed: {:?}", src, e);
                None
            }
        }
    }

    pub fn element(&self) -> web::HtmlAudioElement {
        self.el.clone()
    }
}

impl AudioSink for WebAudioSink {
    fn play(&mut self) {
        match self.el.play() {
            Ok(promise) => {
                let on_reject = Closure::once_into_js(|e: wasm_bindgen::JsValue| {
                    log::warn!("[audio] playback rejected: {:?}", e);
                });
                let _ = promise.catch(on_reject.unchecked_ref());
            }
            Err(e) => log::warn!("[audio] play failed: {:?}", e),
        }
    }

    fn pause(&mut self) {
        let _ = self.el.pause();
    }

    fn seek(&mut self, seconds: f64) {
        self.el.set_current_time(seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume as f64);
    }

    fn current_time(&self) -> f64 {
        self.el.current_time()
    }

    fn duration(&self) -> f64 {
        self.el.duration()
    }

    fn paused(&self) -> bool {
        self.el.paused()
    }
}

/// Register `id` from `src` and route the element's natural `ended` event
/// back into the directory. Idempotent like the directory itself.
pub fn register_track(music: &Music, id: &'static str, src: &str, volume: f32) {
    if music.borrow().state(id).is_some() {
        return;
    }
    let Some(sink) = WebAudioSink::new(src) else {
        return;
    };
    let el = sink.element();
    music.borrow_mut().register(id, sink, volume);

    let music_ended = music.clone();
    ListenerHandle::listen(&el, "ended", move |_ev| {
        // take the callback out before invoking it: playlist callbacks
        // re-enter the directory to start the next track
        let cb = music_ended.borrow_mut().handle_ended(id);
        if let Some(cb) = cb {
            cb();
        }
    })
    .forget();
}
