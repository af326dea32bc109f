//! Perspective camera
//!
//! A look-at camera with a vertical field of view in degrees and an aspect
//! ratio that follows the window.

use fxaa_math::mat4::{self, Mat4};
use fxaa_math::Vec3;

/// Perspective look-at camera
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    /// Vertical field of view in degrees
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(40.0, 1.0, 0.1, 1000.0)
    }
}

impl PerspectiveCamera {
    /// Create a camera at +Z looking at the origin
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Place the camera at `eye` looking at `target` with world up
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        // A minimized window reports 0 height, keep the previous ratio
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Set the vertical field of view in degrees
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_to_screen_centre() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(100.0, 80.0, 50.0), Vec3::new(1.0, 50.0, 0.0));
        cam.set_aspect_ratio(16.0 / 9.0);

        let clip = mat4::transform_point(cam.view_projection(), cam.target());
        assert!((clip[0] / clip[3]).abs() < 1e-4);
        assert!((clip[1] / clip[3]).abs() < 1e-4);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn test_invalid_aspect_is_ignored() {
        let mut cam = PerspectiveCamera::default();
        cam.set_aspect_ratio(2.0);
        cam.set_aspect_ratio(0.0);
        cam.set_aspect_ratio(f32::INFINITY);
        assert_eq!(cam.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_fov_in_degrees() {
        let mut cam = PerspectiveCamera::default();
        cam.set_fov(90.0);
        cam.set_aspect_ratio(1.0);
        let proj = cam.projection_matrix();
        assert!((proj[1][1] - 1.0).abs() < 1e-5);
    }
}
