use crate::render::{self, NoRenderer};
use crate::{App, SharedApp};
use irc_core::AnchorSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: SharedApp,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// One animation frame: track the canvas size, then run the viewer step.
    pub fn frame(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(width, height);
        }

        let mut guard = self.app.borrow_mut();
        let App { viewer, overlay, .. } = &mut *guard;
        viewer.orbit_mut().set_aspect(width as f32 / height.max(1) as f32);
        let outcome = match self.gpu.as_mut() {
            Some(gpu) => viewer.step(&mut **overlay, gpu),
            None => viewer.step(&mut **overlay, &mut NoRenderer),
        };
        if outcome.facing_changed {
            log::info!("[frame] facing {}", viewer.current_facing());
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    anchors: &AnchorSet,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, anchors).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
