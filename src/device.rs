use wasm_bindgen::JsValue;
use web_sys as web;
use whip_core::DeviceTier;

const LOW_MEMORY_GB: f64 = 4.0;
const FEW_CORES: f64 = 4.0;
const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Host capability hints gathered once at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    /// `navigator.deviceMemory` in GB, where the browser exposes it.
    pub device_memory_gb: Option<f64>,
    pub hardware_concurrency: Option<f64>,
    pub coarse_pointer: bool,
    pub viewport_width: f64,
}

#[inline]
pub fn classify(signals: &DeviceSignals) -> DeviceTier {
    let low_memory = matches!(signals.device_memory_gb, Some(gb) if gb > 0.0 && gb <= LOW_MEMORY_GB);
    let few_cores = matches!(signals.hardware_concurrency, Some(n) if n > 0.0 && n <= FEW_CORES);
    let small_touch = signals.coarse_pointer && signals.viewport_width < NARROW_VIEWPORT_PX;
    DeviceTier::from_constrained(low_memory || few_cores || small_touch)
}

pub fn read_signals(window: &web::Window) -> DeviceSignals {
    let navigator = window.navigator();
    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let cores = navigator.hardware_concurrency();
    let coarse_pointer = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    DeviceSignals {
        device_memory_gb,
        hardware_concurrency: (cores > 0.0).then_some(cores),
        coarse_pointer,
        viewport_width,
    }
}
