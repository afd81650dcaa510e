use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use whip_core::WhipEngine;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, engine: &Rc<RefCell<WhipEngine>>) {
    let key = ev.key();
    if engine.borrow_mut().key_down(&key) {
        log::info!("[keys] {} cancelled drag", key);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(engine: Rc<RefCell<WhipEngine>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &engine);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
