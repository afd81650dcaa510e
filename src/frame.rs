use crate::constants::WHIPPING_CLASS;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use whip_core::WhipEngine;
use whip_render::GpuContext;

pub struct FrameContext {
    pub engine: Rc<RefCell<WhipEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub container: web::HtmlElement,
    pub hint: Option<web::Element>,
    pub gpu: Option<GpuContext<'static>>,
    pub started: Instant,
    // last values pushed to the DOM, so classes are only touched on change
    pub expanded: bool,
    pub dragging: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        let (expanded, dragging) = {
            let mut engine = self.engine.borrow_mut();
            let frame = engine.tick(now);
            let expanded = frame.expanded;
            (expanded, engine.state().is_dragging())
        };

        if expanded != self.expanded {
            self.expanded = expanded;
            dom::set_class(&self.container, WHIPPING_CLASS, expanded);
            log::debug!("[frame] expanded={}", expanded);
        }
        if dragging != self.dragging {
            self.dragging = dragging;
            if let Some(hint) = &self.hint {
                dom::set_hidden(hint, !dragging);
            }
        }

        let dpr = {
            let engine = self.engine.borrow();
            engine.config().capped_pixel_ratio(dom::device_pixel_ratio())
        };
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas, dpr);
        self.engine.borrow_mut().set_viewport(w as f32, h as f32);

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(w, h);
        let result = gpu.render(&self.engine.borrow());
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[render] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuContext<'static>> {
    let width = canvas.width();
    let height = canvas.height();
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match GpuContext::new(&instance, surface, width, height).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
