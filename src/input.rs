use glam::Vec2;

/// Pointer drag in progress over the canvas, in CSS pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous sample, or `None` when not dragging with
    /// this pointer.
    pub fn drag_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Orbit distance multiplier for a wheel event; scrolling down (positive
/// `delta_y`) moves the camera away.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64, notch_pixels: f64, step: f32) -> f32 {
    if !delta_y.is_finite() || notch_pixels <= 0.0 {
        return 1.0;
    }
    let notches = (delta_y / notch_pixels) as f32;
    step.powf(-notches)
}
