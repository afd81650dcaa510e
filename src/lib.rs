#![cfg(target_arch = "wasm32")]
use crate::constants::{ARIA_LABEL, CANVAS_ID, CONTAINER_SELECTOR};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use whip_core::{EngineConfig, WhipEngine};

mod constants;
mod device;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("whip-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CONTAINER_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = container.set_attribute("aria-label", ARIA_LABEL);
    _ = container.set_attribute("role", "img");
    let hint = dom::ensure_hint(&document, &container);

    let signals = device::read_signals(&window);
    let tier = device::classify(&signals);
    let config = EngineConfig::for_tier(tier).with_seed(random_seed());
    log::info!("[device] {:?} from {:?}", tier, signals);
    let engine = Rc::new(RefCell::new(WhipEngine::new(config)?));

    let dpr = engine
        .borrow()
        .config()
        .capped_pixel_ratio(dom::device_pixel_ratio());
    let (w, h) = dom::sync_canvas_backing_size(&canvas, dpr);
    engine.borrow_mut().set_viewport(w as f32, h as f32);

    events::wire_global_keydown(engine.clone());
    events::wire_input_handlers(events::InputWiring {
        container: container.clone(),
        engine: engine.clone(),
    });

    // Without WebGPU the gesture state still runs; only drawing is skipped.
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        container,
        hint,
        gpu,
        started: Instant::now(),
        expanded: false,
        dragging: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
