use crate::constants::{LOADING_ID, LOADING_TEXT_ID};
use crate::core::{progress_text, LoadEvent, LoadTracker, LOADING_START_TEXT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.set_attribute("style", "display:flex");
    }
    set_text(document, LOADING_START_TEXT);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
fn set_text(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_TEXT_ID) {
        el.set_text_content(Some(text));
    }
}

/// Reflect a tracker update on the overlay
pub fn apply(document: &web::Document, event: &LoadEvent) {
    match *event {
        LoadEvent::Progress { percent } => set_text(document, &progress_text(percent)),
        LoadEvent::Complete { percent, failed } => {
            set_text(document, &progress_text(percent));
            log::info!("[assets] loaded ({} failed)", failed);
            hide(document);
        }
        LoadEvent::Ignored => {}
    }
}

/// Stop waiting on assets the browser will not fetch until a gesture.
pub fn arm_fallback(
    window: &web::Window,
    document: &web::Document,
    tracker: &Rc<RefCell<LoadTracker>>,
    delay_ms: u32,
) {
    let document = document.clone();
    let tracker = tracker.clone();
    let callback = Closure::once_into_js(move || {
        let ev = tracker.borrow_mut().expire_pending();
        if ev != LoadEvent::Ignored {
            log::warn!("[assets] gave up waiting after {}ms", delay_ms);
        }
        apply(&document, &ev);
    });
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::error!("[assets] fallback timer failed: {:?}", e);
    }
}
