use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `event` on every element matching `selector`.
pub fn add_listener_all(
    document: &web::Document,
    selector: &str,
    event: &str,
    handler: impl FnMut() + 'static,
) {
    let nodes = match document.query_selector_all(selector) {
        Ok(n) => n,
        Err(e) => {
            log::error!("bad selector {}: {:?}", selector, e);
            return;
        }
    };
    if nodes.length() == 0 {
        log::warn!("no elements for {}", selector);
        return;
    }
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            _ = node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
