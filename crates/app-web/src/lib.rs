#![cfg(target_arch = "wasm32")]
//! Browser glue: wires DOM input, CSS transforms and HTMLAudio elements
//! to the parallax core. All engine state lives behind `Rc<RefCell<_>>`
//! on the one browser thread; event handlers retarget and sample, the
//! frame loop is the only place that steps time.

use app_core::{
    InputSample, Phase, SceneFlow, SceneSpec, ShakeBroadcaster, DEFAULT_TRACK_VOLUME, GATE_TRACKS,
    PLAYLIST_TRACKS, SCENE_ONE, SCENE_THREE, SCENE_TWO,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod stage;

const SHAKE_SEED: u64 = 0x5EED;
/// Pixel scale for keyboard-triggered shakes; each layer's own strength
/// multiplier shapes the final bound.
const SHAKE_IMPULSE_PX: f32 = 30.0;

/// Shared handles threaded through every wiring site.
#[derive(Clone)]
struct App {
    flow: Rc<RefCell<SceneFlow>>,
    music: audio::Music,
    sample: Rc<RefCell<InputSample>>,
    scene: Rc<RefCell<Option<stage::MountedScene>>>,
    shaker: Rc<RefCell<ShakeBroadcaster>>,
    scroll_lock: Rc<RefCell<Vec<dom::ListenerHandle>>>,
}

impl App {
    fn new() -> Self {
        Self {
            flow: Rc::new(RefCell::new(SceneFlow::new())),
            music: Rc::new(RefCell::new(Default::default())),
            sample: Rc::new(RefCell::new(InputSample::default())),
            scene: Rc::new(RefCell::new(None)),
            shaker: Rc::new(RefCell::new(ShakeBroadcaster::new(SHAKE_SEED))),
            scroll_lock: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = App::new();

    // Frame loop: one persistent ticker callback steps whatever scene is
    // mounted, with the same sample and delta for every layer.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new()));
    {
        let scene = app.scene.clone();
        let sample = app.sample.clone();
        frame_ctx.borrow_mut().ticker.add(Box::new(move |dt| {
            let snapshot = *sample.borrow();
            if let Some(sc) = scene.borrow_mut().as_mut() {
                sc.frame(dt, snapshot);
            }
        }));
    }

    // App-lifetime input listeners.
    if let Some(h) = events::wire_pointermove(app.sample.clone()) {
        h.forget();
    }
    if let Some(h) = events::wire_scroll(app.sample.clone(), app.flow.clone()) {
        h.forget();
    }
    {
        let app_shake = app.clone();
        if let Some(h) = events::wire_shake_key(move || {
            if let Some(sc) = app_shake.scene.borrow_mut().as_mut() {
                app_shake
                    .shaker
                    .borrow_mut()
                    .trigger(&mut sc.animator, SHAKE_IMPULSE_PX);
            }
        }) {
            h.forget();
        }
    }

    // Progress-dependent chrome: mirror scroll progress into a bar width.
    {
        let document_bar = document.clone();
        app.flow
            .borrow_mut()
            .observe_scroll(Rc::new(move |p: f32| {
                if let Some(el) = document_bar.get_element_by_id("scroll-progress") {
                    if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                        let _ = el
                            .style()
                            .set_property("width", &format!("{:.1}%", p * 100.0));
                    }
                }
            }));
    }

    // Scroll is suppressed only while the gate screen is up; passing the
    // gate releases it so scroll can drive the scenes.
    *app.scroll_lock.borrow_mut() = events::lock_scroll();

    wire_gate(&document, &app);
    frame::start_loop(frame_ctx);
    Ok(())
}

fn register_gate_tracks(app: &App) {
    for &(id, src) in GATE_TRACKS {
        audio::register_track(&app.music, id, src, DEFAULT_TRACK_VOLUME);
    }
}

/// The three gate buttons: enter with audio, enter silent, skip to the
/// website. Unlock happens synchronously inside the click handlers, the
/// only place the platform accepts it.
fn wire_gate(document: &web::Document, app: &App) {
    {
        let app = app.clone();
        dom::add_click_listener(document, "gate-enter", move || {
            app.music.borrow_mut().unlock();
            register_gate_tracks(&app);
            let entered = app.flow.borrow_mut().enter();
            advance(&app, entered);
        });
    }
    {
        let app = app.clone();
        dom::add_click_listener(document, "gate-silent", move || {
            // no unlock: play() calls will log and stay registered
            let entered = app.flow.borrow_mut().enter();
            advance(&app, entered);
        });
    }
    {
        let app = app.clone();
        dom::add_click_listener(document, "gate-skip", move || {
            app.music.borrow_mut().unlock();
            register_gate_tracks(&app);
            let entered = app.flow.borrow_mut().skip();
            advance(&app, entered);
        });
    }
}

/// Apply a completed flow transition: switch the music track, remount the
/// stage, then settle the flow so the next gesture is accepted.
fn advance(app: &App, entered: Option<Phase>) {
    let Some(phase) = entered else {
        return;
    };
    if !app.flow.borrow().scroll_locked() {
        app.scroll_lock.borrow_mut().clear();
    }
    if let Some(track) = phase.track() {
        app.music.borrow_mut().play(track);
    }
    match phase {
        Phase::SceneOne => mount_scene(app, SCENE_ONE),
        Phase::SceneTwo => mount_scene(app, SCENE_TWO),
        Phase::SceneThree => mount_scene(app, SCENE_THREE),
        Phase::Main => show_main(app),
        Phase::Gate => {}
    }
    app.flow.borrow_mut().settle();
}

fn mount_scene(app: &App, spec: SceneSpec) {
    let Some(document) = dom::window_document() else {
        return;
    };
    // Drop the previous scene first: its listeners and sinks must be gone
    // before the new scene claims the viewport.
    app.scene.borrow_mut().take();
    app.sample.borrow_mut().scroll_progress = 0.0;
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }

    let app_activate = app.clone();
    let mut mounted = stage::MountedScene::mount(&document, spec, move || {
        let next = app_activate.flow.borrow_mut().activate();
        advance(&app_activate, next);
    });

    // Scene two exposes the direct "enter website" exit.
    if spec.name == SCENE_TWO.name {
        if let Some(el) = document.get_element_by_id("enter-website") {
            let app_enter = app.clone();
            mounted.push_listener(dom::ListenerHandle::listen(&el, "click", move |_ev| {
                let next = app_enter.flow.borrow_mut().enter_website();
                advance(&app_enter, next);
            }));
        }
    }

    *app.scene.borrow_mut() = Some(mounted);
}

/// Terminal phase: tear down the stage and wire the playlist player for
/// the normal website content.
fn show_main(app: &App) {
    app.scene.borrow_mut().take();
    let Some(document) = dom::window_document() else {
        return;
    };
    wire_player(&document, app);
}

fn wire_player(document: &web::Document, app: &App) {
    for &(id, src) in PLAYLIST_TRACKS {
        audio::register_track(&app.music, id, src, DEFAULT_TRACK_VOLUME);
    }
    let index = Rc::new(RefCell::new(0usize));

    // Natural end of any playlist track advances to the next one.
    for (i, &(id, _)) in PLAYLIST_TRACKS.iter().enumerate() {
        let music = app.music.clone();
        let index_cb = index.clone();
        app.music.borrow_mut().set_ended_callback(
            id,
            Rc::new(move || {
                let next = (i + 1) % PLAYLIST_TRACKS.len();
                *index_cb.borrow_mut() = next;
                music.borrow_mut().play(PLAYLIST_TRACKS[next].0);
            }),
        );
    }

    {
        let app = app.clone();
        let index = index.clone();
        dom::add_click_listener(document, "player-toggle", move || {
            let id = PLAYLIST_TRACKS[*index.borrow()].0;
            let paused = app.music.borrow().state(id).map(|s| s.paused);
            match paused {
                Some(true) => app.music.borrow_mut().resume(id),
                Some(false) => app.music.borrow_mut().pause(id),
                None => {}
            }
        });
    }
    {
        let app = app.clone();
        let index = index.clone();
        dom::add_click_listener(document, "player-next", move || {
            step_playlist(&app, &index, 1);
        });
    }
    {
        let app = app.clone();
        let index = index.clone();
        dom::add_click_listener(document, "player-prev", move || {
            step_playlist(&app, &index, -1);
        });
    }
}

fn step_playlist(app: &App, index: &Rc<RefCell<usize>>, delta: isize) {
    let len = PLAYLIST_TRACKS.len() as isize;
    let next = ((*index.borrow() as isize + delta) % len + len) % len;
    *index.borrow_mut() = next as usize;
    app.music.borrow_mut().play(PLAYLIST_TRACKS[next as usize].0);
}
