//! GPU-compatible data types for the render passes
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use fxaa_math::mat4::{self, Mat4};

/// A mesh vertex with position and surface normal
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BoxVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Outward surface normal
    pub normal: [f32; 3],
}

/// Per-instance data for one piston
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PistonInstance {
    /// Model matrix (column-major)
    pub model: Mat4,
    /// RGBA color
    pub color: [f32; 4],
}

impl Default for PistonInstance {
    fn default() -> Self {
        Self {
            model: mat4::IDENTITY,
            color: [1.0; 4],
        }
    }
}

/// Camera and lighting uniforms for the scene pass
/// Layout: 96 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Combined projection * view matrix (64 bytes)
    pub view_projection: Mat4,
    /// Eye position + padding (16 bytes)
    pub eye: [f32; 3],
    pub _padding: f32,
    /// Direction towards the light + padding (16 bytes)
    pub light_dir: [f32; 3],
    pub _padding2: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_projection: mat4::IDENTITY,
            eye: [0.0, 0.0, 1.0],
            _padding: 0.0,
            light_dir: [0.3, 1.0, 0.5],
            _padding2: 0.0,
        }
    }
}

/// Parameters for the FXAA shader
/// Layout: 32 bytes total (must match fxaa.wgsl FxaaUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FxaaUniforms {
    /// 1 / source size in pixels
    pub rcp_frame: [f32; 2],
    /// Amount of sub-pixel aliasing removal (0 = off, 1 = softest)
    pub subpixel_quality: f32,
    /// Minimum local contrast, relative to the brightest neighbour
    pub edge_threshold: f32,
    /// Absolute contrast below which dark areas are skipped
    pub edge_threshold_min: f32,
    pub _padding: [f32; 3],
}

impl FxaaUniforms {
    /// Build uniforms for a source of the given pixel size
    pub fn new(
        width: u32,
        height: u32,
        subpixel_quality: f32,
        edge_threshold: f32,
        edge_threshold_min: f32,
    ) -> Self {
        Self {
            rcp_frame: [1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32],
            subpixel_quality,
            edge_threshold,
            edge_threshold_min,
            _padding: [0.0; 3],
        }
    }
}

/// Parameters for the split-screen composite shader
/// Layout: 32 bytes total (must match composite.wgsl CompositeUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CompositeUniforms {
    /// Screen size in pixels
    pub screen_size: [f32; 2],
    /// Divider column in pixels
    pub divider_x: f32,
    pub _padding: f32,
    /// Top-left corner of the arrow sprite in pixels
    pub arrow_origin: [f32; 2],
    /// Arrow sprite size in pixels
    pub arrow_size: [f32; 2],
}

impl CompositeUniforms {
    /// Place the arrow centred on the divider, resting on the bottom edge
    pub fn new(width: u32, height: u32, divider_x: u32, arrow_width: u32, arrow_height: u32) -> Self {
        let arrow_w = arrow_width as f32;
        let arrow_h = arrow_height as f32;
        Self {
            screen_size: [width as f32, height as f32],
            divider_x: divider_x as f32,
            _padding: 0.0,
            arrow_origin: [divider_x as f32 - arrow_w / 2.0, height as f32 - arrow_h],
            arrow_size: [arrow_w, arrow_h],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_box_vertex_size() {
        // 3 floats position + 3 floats normal = 24 bytes
        assert_eq!(size_of::<BoxVertex>(), 24);
    }

    #[test]
    fn test_piston_instance_size() {
        // 16 floats matrix + 4 floats color = 80 bytes
        assert_eq!(size_of::<PistonInstance>(), 80);
    }

    #[test]
    fn test_scene_uniforms_size() {
        assert_eq!(size_of::<SceneUniforms>(), 96);
    }

    #[test]
    fn test_fxaa_uniforms_size() {
        assert_eq!(size_of::<FxaaUniforms>(), 32);
    }

    #[test]
    fn test_composite_uniforms_size() {
        assert_eq!(size_of::<CompositeUniforms>(), 32);
    }

    #[test]
    fn test_fxaa_rcp_frame() {
        let u = FxaaUniforms::new(800, 400, 0.75, 0.166, 0.0833);
        assert_eq!(u.rcp_frame, [1.0 / 800.0, 1.0 / 400.0]);
    }

    #[test]
    fn test_fxaa_zero_size_does_not_divide_by_zero() {
        let u = FxaaUniforms::new(0, 0, 0.75, 0.166, 0.0833);
        assert!(u.rcp_frame[0].is_finite());
        assert!(u.rcp_frame[1].is_finite());
    }

    #[test]
    fn test_arrow_centred_on_divider() {
        let u = CompositeUniforms::new(1280, 720, 640, 48, 24);
        assert_eq!(u.arrow_origin, [616.0, 696.0]);
        assert_eq!(u.arrow_size, [48.0, 24.0]);
        assert_eq!(u.divider_x, 640.0);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<BoxVertex>(), 4);
        assert_eq!(std::mem::align_of::<PistonInstance>(), 4);
        assert_eq!(std::mem::align_of::<SceneUniforms>(), 4);
        assert_eq!(std::mem::align_of::<FxaaUniforms>(), 4);
        assert_eq!(std::mem::align_of::<CompositeUniforms>(), 4);
    }
}
