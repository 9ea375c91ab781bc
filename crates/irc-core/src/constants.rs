use glam::Vec3;

// Shared scene and overlay tuning constants used by the core and the web frontend.

// Scene axes (the reaction model is authored Z-up)
pub const FORWARD: [f32; 3] = [1.0, 0.0, 0.0];
pub const RIGHT: [f32; 3] = [0.0, 1.0, 0.0];
pub const UP: [f32; 3] = [0.0, 0.0, 1.0];

// Scene layout
pub const ANCHOR_DISTANCE: f32 = 10.0; // distance of each anchor cube from the origin
pub const ANCHOR_CUBE_SIZE: f32 = 10.0; // unit box scaled by the anchor distance
pub const CAMERA_OFFSET: f32 = 2.0; // initial eye sits this far inside the anchor ring
pub const VIEWPORT_SCALE: f32 = 0.5; // canvas size relative to the window

// Camera
pub const FIELD_OF_VIEW_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 1000.0;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel of pointer drag
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps the eye off the poles

// Progress slider
pub const PROGRESS_MAX: u8 = 100;
pub const GROUND_STATE_MAX: u8 = 33; // inclusive upper bound of the ground-state band
pub const TRANSITION_STATE_MAX: u8 = 66; // inclusive upper bound of the transition band
pub const DEFAULT_PROGRESS: u8 = 50;

// Default asset locations
pub const DEFAULT_IMAGE_BASE: &str = "/public/templates";
pub const DEFAULT_MODEL_PATH: &str = "public/imports/EB01.fbx";
pub const DEFAULT_MANIFEST_PATH: &str = "public/json/eb01.json";

#[inline]
pub fn forward_vec3() -> Vec3 {
    Vec3::from_array(FORWARD)
}

#[inline]
pub fn right_vec3() -> Vec3 {
    Vec3::from_array(RIGHT)
}

#[inline]
pub fn up_vec3() -> Vec3 {
    Vec3::from_array(UP)
}
