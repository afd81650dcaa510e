use glam::Vec2;
use std::sync::Arc;
use std::time::Instant;
use whip_core::{EngineConfig, Viewport, WhipEngine};
use whip_render::GpuContext;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

struct App {
    engine: WhipEngine,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext<'static>>,
    cursor: Vec2,
    started: Instant,
}

impl App {
    fn new(engine: WhipEngine) -> Self {
        Self {
            engine,
            window: None,
            gpu: None,
            cursor: Vec2::ZERO,
            started: Instant::now(),
        }
    }

    /// The window plays the part of the page element: the whip sits at its
    /// center and the viewport is its inner size.
    fn viewport(&self) -> Viewport {
        match &self.window {
            Some(w) => {
                let size = w.inner_size();
                Viewport::new(size.width as f32, size.height as f32)
            }
            None => Viewport::new(0.0, 0.0),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title("whip")
            .with_transparent(true)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 720));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let gpu = pollster::block_on(GpuContext::new(
            &instance,
            surface,
            size.width,
            size.height,
        ))?;
        self.engine
            .set_viewport(size.width as f32, size.height as f32);
        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.started.elapsed().as_secs_f64();
        self.engine.tick(now);
        if let Some(gpu) = &mut self.gpu {
            match gpu.render(&self.engine) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[render] out of memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("[render] frame skipped: {:?}", e),
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("init error: {:?}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize_if_needed(size.width, size.height);
                }
                self.engine
                    .set_viewport(size.width as f32, size.height as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                let viewport = self.viewport();
                self.engine.pointer_move(self.cursor, viewport);
            }
            WindowEvent::CursorEntered { .. } => self.engine.set_hovering(true),
            WindowEvent::CursorLeft { .. } => self.engine.set_hovering(false),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let viewport = self.viewport();
                    self.engine
                        .pointer_down(self.cursor, viewport.center(), viewport);
                }
                ElementState::Released => {
                    self.engine.pointer_up();
                }
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    self.engine.key_down("Escape");
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let engine = WhipEngine::new(EngineConfig::default())?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(engine);
    event_loop.run_app(&mut app)?;
    Ok(())
}
