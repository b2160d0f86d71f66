#![cfg(target_arch = "wasm32")]
use crate::core::{LoadEvent, LoadTracker, NarrationConfig, NarrationSync, LOADING_FALLBACK_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod overlay;
mod presentation;
mod timers;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pale-blue-dot starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Rendering into the canvas is someone else's job; keep its backing store sized.
    match document
        .get_element_by_id(CANVAS_ID)
        .map(|el| el.dyn_into::<web::HtmlCanvasElement>())
    {
        Some(Ok(canvas)) => wire_canvas_resize(&canvas),
        Some(Err(_)) => log::warn!("#{} is not a canvas", CANVAS_ID),
        None => log::warn!("missing #{}", CANVAS_ID),
    }

    let tracker = Rc::new(RefCell::new(LoadTracker::new(PRELOAD)));
    overlay::show(&document);
    let initial = tracker.borrow().snapshot();
    if matches!(initial, LoadEvent::Complete { .. }) {
        overlay::apply(&document, &initial);
    }
    overlay::arm_fallback(&window, &document, &tracker, LOADING_FALLBACK_MS);

    let mut pool = audio::AudioPool::default();

    match audio::start_ambient_loop(&document, AMBIENT_SRC, AMBIENT_VOLUME, AMBIENT_RATE) {
        Some(el) => {
            audio::watch_load(&el, AMBIENT_SRC, &tracker, &document);
            pool.hold(el);
        }
        None => overlay::apply(&document, &tracker.borrow_mut().mark_failed(AMBIENT_SRC)),
    }

    let narration_track = pool.register(NARRATION_SRC, NARRATION_VOLUME);
    match &narration_track {
        Some(el) => audio::watch_load(el, NARRATION_SRC, &tracker, &document),
        None => overlay::apply(&document, &tracker.borrow_mut().mark_failed(NARRATION_SRC)),
    }

    for src in PRELOAD
        .iter()
        .filter(|s| **s != AMBIENT_SRC && **s != NARRATION_SRC)
    {
        audio::preload(src, &mut pool, &tracker, &document);
    }

    events::wire_sound_effects(&document);

    let narration: Rc<RefCell<events::WebNarration>> = Rc::new(RefCell::new(NarrationSync::new(
        NarrationConfig {
            resource: NARRATION_SRC.to_string(),
            ..NarrationConfig::default()
        },
        pool,
        presentation::DomPresentation::new(&document),
        timers::BrowserScheduler::new(window.clone()),
    )));
    events::wire_narration(&document, &narration, narration_track.as_ref());

    log::info!(
        "[narration] ready: {} highlight events, deadline {}ms",
        narration.borrow().config().schedule.events().len(),
        narration.borrow().config().safety_deadline_ms
    );
    Ok(())
}
