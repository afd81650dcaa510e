use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use whip_core::WhipEngine;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub engine: Rc<RefCell<WhipEngine>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
    wire_hover(&w, "pointerenter", true);
    wire_hover(&w, "pointerleave", false);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.container.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = input::pointer_client_pos(&ev);
        let origin = input::element_center(&w.container);
        let viewport = input::window_viewport();
        if w.engine.borrow_mut().pointer_down(pointer, origin, viewport) {
            // keep receiving moves once the whip fills the viewport
            _ = w.container.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            log::debug!("[mouse] down at ({:.0},{:.0})", pointer.x, pointer.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = input::pointer_client_pos(&ev);
        let viewport = input::window_viewport();
        w.engine.borrow_mut().pointer_move(pointer, viewport);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event: &str) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.engine.borrow_mut().pointer_up() {
            if w.container.has_pointer_capture(ev.pointer_id()) {
                _ = w.container.release_pointer_capture(ev.pointer_id());
            }
            log::debug!("[mouse] released");
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_hover(w: &InputWiring, event: &str, hovering: bool) {
    let w = w.clone();
    let target = w.container.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.engine.borrow_mut().set_hovering(hovering);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
