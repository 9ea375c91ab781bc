//! Camera and orbit controls.
//!
//! These types avoid platform APIs so the web frontend and host tests share
//! them. The frontend feeds pointer deltas into [`OrbitController`] and reads
//! the resulting [`Camera`] both for rendering and for facing classification.

use crate::constants::{
    FIELD_OF_VIEW_DEG, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON,
    ORBIT_ROTATE_SPEED, Z_FAR, Z_NEAR,
};
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: FIELD_OF_VIEW_DEG.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector the camera looks along, in world space.
    pub fn world_direction(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

/// Orbits the camera eye around its target on a sphere.
///
/// Azimuth turns around the camera's up axis (+Y); the polar angle is measured
/// from it and kept off the poles so the view matrix stays well defined.
#[derive(Clone, Debug)]
pub struct OrbitController {
    camera: Camera,
    initial: Camera,
    radius: f32,
    polar: f32,
    azimuth: f32,
}

impl OrbitController {
    pub fn new(camera: Camera) -> Self {
        let (radius, polar, azimuth) = spherical(camera.eye - camera.target);
        Self {
            initial: camera.clone(),
            camera,
            radius,
            polar,
            azimuth,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    /// Drag by `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_ROTATE_SPEED;
        self.polar = (self.polar - dy * ORBIT_ROTATE_SPEED)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.update_eye();
    }

    /// Multiply the orbit radius by `factor` (< 1 moves closer).
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.radius = (self.radius * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.update_eye();
    }

    /// Move the eye to `eye`, keeping the target. Later drags continue from there.
    pub fn set_eye(&mut self, eye: Vec3) {
        let (radius, polar, azimuth) = spherical(eye - self.camera.target);
        self.camera.eye = eye;
        self.radius = radius;
        self.polar = polar.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.azimuth = azimuth;
    }

    /// Restore the pose the controller was created with.
    pub fn reset(&mut self) {
        let aspect = self.camera.aspect;
        self.camera = self.initial.clone();
        self.camera.aspect = aspect;
        let (radius, polar, azimuth) = spherical(self.camera.eye - self.camera.target);
        self.radius = radius;
        self.polar = polar;
        self.azimuth = azimuth;
    }

    fn update_eye(&mut self) {
        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            sin_polar * self.azimuth.sin(),
            self.polar.cos(),
            sin_polar * self.azimuth.cos(),
        ) * self.radius;
        self.camera.eye = self.camera.target + offset;
    }
}

/// `(radius, polar, azimuth)` of `offset` around +Y.
fn spherical(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, PI * 0.5, 0.0);
    }
    let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    let azimuth = offset.x.atan2(offset.z);
    (radius, polar, azimuth)
}
