//! Visual-side state types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for host-side tests. The web frontend consumes them to
//! build camera matrices each frame.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Orbit camera around the tree: azimuth/polar angles plus distance, with
/// the same polar and distance clamps the scene's orbit controls impose.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub polar: f32,
    pub distance: f32,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: CAMERA_START_DISTANCE,
            target: Vec3::ZERO,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_Y,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// World-space eye position for the current orbit state.
    pub fn eye(&self) -> Vec3 {
        let sp = self.polar.sin();
        self.target
            + Vec3::new(sp * self.yaw.sin(), self.polar.cos(), sp * self.yaw.cos())
                * self.distance
    }

    /// Apply a drag delta in radians; polar angle stays inside the clamp
    /// range so the camera can neither flip over the apex nor dive under
    /// the ground.
    pub fn orbit(&mut self, d_yaw: f32, d_polar: f32) {
        self.yaw += d_yaw;
        self.polar = (self.polar + d_polar).clamp(CAMERA_MIN_POLAR, CAMERA_MAX_POLAR);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Slow automatic yaw advance; the scene enables this only while the
    /// tree is assembled.
    pub fn auto_rotate(&mut self, dt_sec: f32) {
        self.yaw += AUTO_ROTATE_RAD_PER_SEC * dt_sec.max(0.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera-space right and up axes, used for billboarding point sprites.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}
