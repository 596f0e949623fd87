use crate::camera::OrbitCamera;
use crate::core::{ParticleField, Scene};
use crate::input::PointerTracker;
use crate::loader::DecodedImage;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches. The particle field is owned here
/// because the frame loop is its only writer; the scene, camera, tracker,
/// and session are shared with event callbacks.
pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub particles: ParticleField,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    /// Backdrop image handoff from its load task; consumed on the next tick.
    pub pending_backdrop: Rc<RefCell<Option<DecodedImage>>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One tick: render, advance the damped camera, advance the snow.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Some(img) = self.pending_backdrop.borrow_mut().take() {
                g.set_backdrop_image(&img);
            }
            let scene = self.scene.borrow();
            let camera = self.camera.borrow();
            if let Err(e) = g.render(&scene, &camera, &self.particles) {
                log::error!("render error: {:?}", e);
            }
        }

        self.camera.borrow_mut().update(dt_sec);
        let speed = self.tracker.borrow().current_speed();
        self.particles.advance(speed);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particle_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
