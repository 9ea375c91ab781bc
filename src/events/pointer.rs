use crate::constants::WHEEL_NOTCH_PIXELS;
use crate::input::{self, DragState};
use crate::SharedApp;
use glam::Vec2;
use irc_core::ORBIT_ZOOM_STEP;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: SharedApp,
    pub drag_state: Rc<RefCell<DragState>>,
}

/// Orbit controls: drag to rotate around the model, wheel to zoom.
pub fn wire_orbit_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state
            .borrow_mut()
            .begin(ev.pointer_id(), client_pos(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w
            .drag_state
            .borrow_mut()
            .drag_to(ev.pointer_id(), client_pos(&ev));
        if let Some(d) = delta {
            w.app.borrow_mut().viewer.orbit_mut().rotate(d.x, d.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let target = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            w.drag_state.borrow_mut().end(ev.pointer_id());
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(ev.delta_y(), WHEEL_NOTCH_PIXELS, ORBIT_ZOOM_STEP);
        w.app.borrow_mut().viewer.orbit_mut().zoom(factor);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
