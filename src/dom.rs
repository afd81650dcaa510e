use crate::constants::{HINT_CLASS, HINT_ID, HINT_TEXT};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    if hidden {
        _ = el.set_attribute("hidden", "");
    } else {
        _ = el.remove_attribute("hidden");
    }
}

/// The "release" hint inside the container, created hidden when the page
/// does not provide one.
pub fn ensure_hint(document: &web::Document, container: &web::Element) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(HINT_ID);
    el.set_class_name(HINT_CLASS);
    el.set_text_content(Some(HINT_TEXT));
    set_hidden(&el, true);
    container.append_child(&el).ok()?;
    Some(el)
}

/// Keep the canvas backing store at CSS size × capped device pixel ratio.
/// Only touches the canvas when the size actually changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, capped_dpr: f64) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * capped_dpr) as u32).max(1);
    let h_px = ((rect.height() * capped_dpr) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
