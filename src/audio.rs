use crate::core::{AudioPlayback, GestureUnlock, LoadTracker, OneShot, PlaybackError};
use crate::overlay;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_audio(src: &str, volume: f64, rate: f64) -> Result<web::HtmlAudioElement, ()> {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(el) => {
            el.set_volume(volume);
            el.set_playback_rate(rate);
            el.set_preload("auto");
            Ok(el)
        }
        Err(e) => {
            log::error!("[assets] {} audio element error: {:?}", src, e);
            Err(())
        }
    }
}

// play() rejects asynchronously (autoplay policy, decode errors); log and move on
fn play_logged(el: &web::HtmlMediaElement, src: &str) -> Result<(), ()> {
    match el.play() {
        Ok(promise) => {
            let src = src.to_string();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::error!("[sfx] play error for {}: {:?}", src, e);
                }
            });
            Ok(())
        }
        Err(e) => {
            log::error!("[sfx] play error for {}: {:?}", src, e);
            Err(())
        }
    }
}

/// Fire-and-forget sound; each call gets its own element so plays can overlap
pub fn play_one_shot(shot: &OneShot) {
    if let Ok(el) = create_audio(shot.src, shot.volume, shot.rate) {
        _ = play_logged(&el, shot.src);
    }
}

type Unlock = Rc<RefCell<GestureUnlock<web::HtmlAudioElement>>>;

// Replays everything the gate has queued on each pointer or key press.
fn listen_for_gesture(document: &web::Document, unlock: &Unlock) {
    for event in ["pointerdown", "keydown"] {
        let unlock = unlock.clone();
        let closure = Closure::wrap(Box::new(move || {
            let queued = unlock.borrow_mut().release();
            for el in queued {
                play_after_gesture(&el, &unlock, None);
            }
        }) as Box<dyn FnMut()>);
        _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Autoplay policy rejects play() before the first user gesture; queue the
// element and try again on the next one.
fn play_after_gesture(
    el: &web::HtmlAudioElement,
    unlock: &Unlock,
    document: Option<&web::Document>,
) {
    let promise = match el.play() {
        Ok(p) => p,
        Err(e) => {
            log::error!("[sfx] play error for {}: {:?}", el.src(), e);
            return;
        }
    };
    let el = el.clone();
    let unlock = unlock.clone();
    let document = document.cloned();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::info!("[sfx] {} waiting for a user gesture: {:?}", el.src(), e);
            let install = unlock.borrow_mut().defer(el);
            if install {
                match document.or_else(|| web::window().and_then(|w| w.document())) {
                    Some(d) => listen_for_gesture(&d, &unlock),
                    None => log::error!("[sfx] no document to wait for a gesture on"),
                }
            }
        }
    });
}

pub fn start_ambient_loop(
    document: &web::Document,
    src: &str,
    volume: f64,
    rate: f64,
) -> Option<web::HtmlAudioElement> {
    let el = create_audio(src, volume, rate).ok()?;
    el.set_loop(true);
    let unlock: Unlock = Rc::new(RefCell::new(GestureUnlock::default()));
    play_after_gesture(&el, &unlock, Some(document));
    Some(el)
}

/// Report load / error of `el` to the tracker and the loading overlay.
pub fn watch_load(
    el: &web::HtmlAudioElement,
    src: &str,
    tracker: &Rc<RefCell<LoadTracker>>,
    document: &web::Document,
) {
    let loaded = {
        let tracker = tracker.clone();
        let document = document.clone();
        let src = src.to_string();
        Closure::wrap(Box::new(move || {
            let ev = tracker.borrow_mut().mark_loaded(&src);
            overlay::apply(&document, &ev);
        }) as Box<dyn FnMut()>)
    };
    let failed = {
        let tracker = tracker.clone();
        let document = document.clone();
        let src = src.to_string();
        Closure::wrap(Box::new(move || {
            log::error!("[assets] error loading {}", src);
            let ev = tracker.borrow_mut().mark_failed(&src);
            overlay::apply(&document, &ev);
        }) as Box<dyn FnMut()>)
    };
    _ = el.add_event_listener_with_callback("canplaythrough", loaded.as_ref().unchecked_ref());
    _ = el.add_event_listener_with_callback("error", failed.as_ref().unchecked_ref());
    loaded.forget();
    failed.forget();
}

/// Preload an asset that is otherwise only played through one-shots.
/// The element is parked in `pool` so it is not collected mid-load.
pub fn preload(
    src: &str,
    pool: &mut AudioPool,
    tracker: &Rc<RefCell<LoadTracker>>,
    document: &web::Document,
) {
    if let Ok(el) = create_audio(src, 0.0, 1.0) {
        watch_load(&el, src, tracker, document);
        pool.hold(el);
    } else {
        let ev = tracker.borrow_mut().mark_failed(src);
        overlay::apply(document, &ev);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackHandle {
    slot: usize,
    generation: u32,
}

struct Slot {
    src: String,
    el: web::HtmlAudioElement,
    generation: u32,
}

/// One reusable media element per resource; every start bumps its generation
/// so handles from earlier plays go stale.
#[derive(Default)]
pub struct AudioPool {
    slots: Vec<Slot>,
    by_src: FnvHashMap<String, usize>,
    held: Vec<web::HtmlAudioElement>,
}

impl AudioPool {
    /// Keep an element alive for as long as the pool lives.
    pub fn hold(&mut self, el: web::HtmlAudioElement) {
        self.held.push(el);
    }

    pub fn register(&mut self, src: &str, volume: f64) -> Option<web::HtmlAudioElement> {
        if let Some(&i) = self.by_src.get(src) {
            return Some(self.slots[i].el.clone());
        }
        let el = create_audio(src, volume, 1.0).ok()?;
        self.by_src.insert(src.to_string(), self.slots.len());
        self.slots.push(Slot {
            src: src.to_string(),
            el: el.clone(),
            generation: 0,
        });
        Some(el)
    }

    /// Handle of the latest play of `src`, if it was ever started.
    pub fn current_handle(&self, src: &str) -> Option<TrackHandle> {
        let &slot = self.by_src.get(src)?;
        let generation = self.slots[slot].generation;
        (generation > 0).then_some(TrackHandle { slot, generation })
    }

    fn live(&self, handle: TrackHandle) -> Option<&Slot> {
        self.slots
            .get(handle.slot)
            .filter(|s| s.generation == handle.generation)
    }
}

impl AudioPlayback for AudioPool {
    type Handle = TrackHandle;

    fn start(&mut self, resource: &str) -> Result<TrackHandle, PlaybackError> {
        let &slot = self
            .by_src
            .get(resource)
            .ok_or_else(|| PlaybackError::Unavailable(resource.to_string()))?;
        let s = &mut self.slots[slot];
        s.el.set_current_time(0.0);
        play_logged(&s.el, &s.src).map_err(|_| PlaybackError::Refused {
            resource: resource.to_string(),
            reason: "play() threw".to_string(),
        })?;
        s.generation += 1;
        Ok(TrackHandle {
            slot,
            generation: s.generation,
        })
    }

    fn stop(&mut self, handle: TrackHandle) {
        if let Some(s) = self.live(handle) {
            _ = s.el.pause();
            s.el.set_current_time(0.0);
        }
    }

    fn is_playing(&self, handle: TrackHandle) -> bool {
        self.live(handle)
            .map(|s| !s.el.paused() && !s.el.ended())
            .unwrap_or(false)
    }
}
