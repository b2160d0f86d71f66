use crate::audio;
use crate::constants::{
    BUTTON_CLICK, BUTTON_HOVER, CANVAS_CLICK, CANVAS_SELECTOR, HOVER_SELECTOR, HOVER_TEXT,
    SPEECH_SELECTOR,
};
use crate::core::{OneShot, PitchCycler, DRAG_PITCH_RATES, PITCH_RATES};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn cycling(shot: OneShot, rates: &'static [f32], label: &'static str) -> impl FnMut() + 'static {
    let pitch = Rc::new(RefCell::new(PitchCycler::new(rates)));
    move || {
        let mut p = pitch.borrow_mut();
        log::debug!("[sfx] {} #{}", label, p.index());
        let rate = p.next_rate() as f64;
        audio::play_one_shot(&OneShot { rate, ..shot });
    }
}

/// Hover chirps on `.hover` text, speech-button hover/click and canvas clicks.
pub fn wire_sound_effects(document: &web::Document) {
    dom::add_listener_all(
        document,
        HOVER_SELECTOR,
        "mouseenter",
        cycling(HOVER_TEXT, PITCH_RATES, "hover"),
    );
    dom::add_listener_all(document, SPEECH_SELECTOR, "mouseenter", || {
        audio::play_one_shot(&BUTTON_HOVER)
    });
    dom::add_listener_all(
        document,
        SPEECH_SELECTOR,
        "click",
        cycling(BUTTON_CLICK, PITCH_RATES, "button"),
    );
    dom::add_listener_all(
        document,
        CANVAS_SELECTOR,
        "click",
        cycling(CANVAS_CLICK, DRAG_PITCH_RATES, "canvas"),
    );
}
