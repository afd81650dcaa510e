use glam::Vec2;
use web_sys as web;
use whip_core::Viewport;

// ---------------- Pointer helpers ----------------
// Everything is kept in CSS viewport pixels (client coordinates) so the
// pointer, the element center and the viewport share one space.

#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new((left + width * 0.5) as f32, (top + height * 0.5) as f32)
}

#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    rect_center(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn viewport_from(width: Option<f64>, height: Option<f64>) -> Viewport {
    Viewport::new(width.unwrap_or(0.0) as f32, height.unwrap_or(0.0) as f32)
}

pub fn window_viewport() -> Viewport {
    match web::window() {
        Some(w) => viewport_from(
            w.inner_width().ok().and_then(|v| v.as_f64()),
            w.inner_height().ok().and_then(|v| v.as_f64()),
        ),
        None => Viewport::new(0.0, 0.0),
    }
}
