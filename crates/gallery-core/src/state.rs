//! Camera description and GPU-facing instance data shared with the web
//! frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are usable from host-side tests as well as the WASM build.

use glam::{Mat4, Vec2, Vec3};

use crate::constants::{CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
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
    /// Camera on the +Z axis at `distance`, looking at the origin. This is
    /// the only camera pose the viewer uses; zoom moves it along the axis.
    pub fn at_distance(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
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

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Per-image instance data uploaded to the renderer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ImageInstance {
    /// Layout-space position; the group rotation is applied in the shader.
    pub pos: [f32; 3],
    /// Animated scale from the viewport controller.
    pub scale: f32,
    /// Card width/height in world units.
    pub footprint: [f32; 2],
    pub opacity: f32,
    pub _pad: f32,
}

impl ImageInstance {
    pub fn new(pos: Vec3, scale: f32, footprint: Vec2, opacity: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            footprint: footprint.to_array(),
            opacity,
            _pad: 0.0,
        }
    }
}
