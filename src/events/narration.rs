use crate::audio::AudioPool;
use crate::constants::{NARRATION_SRC, SPEECH_SELECTOR};
use crate::core::{NarrationSync, TimerKey};
use crate::dom;
use crate::presentation::DomPresentation;
use crate::timers::BrowserScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebNarration = NarrationSync<AudioPool, DomPresentation, BrowserScheduler>;

/// Route fired timeouts, clicks on the speech control and the track's
/// `ended` event into the synchronizer.
pub fn wire_narration(
    document: &web::Document,
    narration: &Rc<RefCell<WebNarration>>,
    track: Option<&web::HtmlAudioElement>,
) {
    let weak = Rc::downgrade(narration);
    let forward = Box::new(move |key: TimerKey| {
        if let Some(n) = weak.upgrade() {
            n.borrow_mut().on_timer(key);
        }
    }) as Box<dyn Fn(TimerKey)>;
    *narration.borrow().scheduler.sink().borrow_mut() = Some(forward);

    let on_click = narration.clone();
    dom::add_listener_all(document, SPEECH_SELECTOR, "click", move || {
        let outcome = on_click.borrow_mut().toggle();
        log::info!("[narration] toggle -> {:?}", outcome);
    });

    if let Some(el) = track {
        let on_ended = narration.clone();
        let ended = Closure::wrap(Box::new(move || {
            let handle = on_ended.borrow().audio.current_handle(NARRATION_SRC);
            if let Some(h) = handle {
                on_ended.borrow_mut().on_track_ended(h);
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("ended", ended.as_ref().unchecked_ref());
        ended.forget();
    }
}
