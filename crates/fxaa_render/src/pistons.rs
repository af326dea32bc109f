//! The piston scene
//!
//! A square grid of boxes that pump up and down. Each piston gets a random
//! phase and grey shade from a seeded RNG so every run looks the same.
//! Thin vertical silhouettes against the black background make plenty of
//! aliased edges for the FXAA comparison.

use rand::{rngs::StdRng, Rng, SeedableRng};

use fxaa_math::mat4;
use fxaa_math::Vec3;

use crate::camera::PerspectiveCamera;
use crate::pipeline::{PistonInstance, SceneUniforms, ScenePipeline};
use crate::target::RenderTarget;

/// Layout and animation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct PistonsSettings {
    /// Pistons per row and column
    pub grid_size: u32,
    /// Distance between piston centres
    pub spacing: f32,
    /// Footprint of a piston (X and Z size)
    pub width: f32,
    /// Mean height
    pub base_height: f32,
    /// Height swing around the mean
    pub amplitude: f32,
    /// Animation speed in radians per second
    pub speed: f32,
    /// Heights never drop below this
    pub min_height: f32,
    /// RNG seed for phases and shades
    pub seed: u64,
    /// Direction towards the light
    pub light_dir: [f32; 3],
}

impl Default for PistonsSettings {
    fn default() -> Self {
        Self {
            grid_size: 11,
            spacing: 10.0,
            width: 8.0,
            base_height: 50.0,
            amplitude: 40.0,
            speed: 1.0,
            min_height: 2.0,
            seed: 2014,
            light_dir: [0.3, 1.0, 0.5],
        }
    }
}

/// One piston in the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piston {
    /// Ground position (y = 0)
    pub position: Vec3,
    /// Phase offset in radians
    pub phase: f32,
    /// Grey level of the piston
    pub shade: f32,
    /// Current height
    pub height: f32,
}

/// CPU side of the scene: layout and per-frame animation
pub struct PistonField {
    settings: PistonsSettings,
    pistons: Vec<Piston>,
    instances: Vec<PistonInstance>,
}

impl PistonField {
    /// Lay out the grid, centred on the origin
    pub fn new(settings: PistonsSettings) -> Self {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let n = settings.grid_size;
        let half = (n.saturating_sub(1)) as f32 * 0.5;

        let mut pistons = Vec::with_capacity(n as usize * n as usize);
        for row in 0..n {
            for col in 0..n {
                let x = (col as f32 - half) * settings.spacing;
                let z = (row as f32 - half) * settings.spacing;
                pistons.push(Piston {
                    position: Vec3::new(x, 0.0, z),
                    phase: rng.random_range(0.0..std::f32::consts::TAU),
                    shade: rng.random_range(0.55..0.9),
                    height: settings.base_height.max(settings.min_height),
                });
            }
        }

        let instances = vec![PistonInstance::default(); pistons.len()];
        let mut field = Self {
            settings,
            pistons,
            instances,
        };
        field.animate(0.0);
        field
    }

    /// Height of a piston at `time` seconds
    ///
    /// Two sines with a position-dependent term keep neighbours from moving
    /// in lockstep. The sum stays within `base_height +/- amplitude`.
    pub fn height_at(&self, piston: &Piston, time: f32) -> f32 {
        let s = &self.settings;
        let t = piston.phase + time * s.speed;
        let ripple = 0.05 * (piston.position.x + piston.position.z);
        let wave = 0.5 * (t.sin() + (0.7 * t + ripple).sin());
        (s.base_height + s.amplitude * wave).max(s.min_height)
    }

    /// Advance all pistons to `time` and rebuild their instance data
    pub fn animate(&mut self, time: f32) {
        let width = self.settings.width;
        for i in 0..self.pistons.len() {
            let height = self.height_at(&self.pistons[i], time);
            let piston = &mut self.pistons[i];
            piston.height = height;

            let model = mat4::mul(
                mat4::translation(piston.position),
                mat4::scale(Vec3::new(width, height, width)),
            );
            self.instances[i] = PistonInstance {
                model,
                color: [piston.shade, piston.shade, piston.shade * 1.05, 1.0],
            };
        }
    }

    pub fn pistons(&self) -> &[Piston] {
        &self.pistons
    }

    pub fn instances(&self) -> &[PistonInstance] {
        &self.instances
    }

    pub fn settings(&self) -> &PistonsSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.pistons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pistons.is_empty()
    }
}

/// The piston scene renderer
pub struct Pistons {
    field: PistonField,
    pipeline: ScenePipeline,
}

impl Pistons {
    /// Build the scene and its GPU resources
    pub fn setup(device: &wgpu::Device, settings: PistonsSettings) -> Self {
        let field = PistonField::new(settings);
        let pipeline = ScenePipeline::new(device, field.len());
        log::info!("Set up {} pistons", field.len());
        Self { field, pipeline }
    }

    /// Animate to `time` and upload the camera for the next draw
    pub fn update(&mut self, queue: &wgpu::Queue, camera: &PerspectiveCamera, time: f32) {
        self.field.animate(time);
        self.pipeline.upload_instances(queue, self.field.instances());

        let uniforms = SceneUniforms {
            view_projection: camera.view_projection(),
            eye: camera.eye().to_array(),
            _padding: 0.0,
            light_dir: Vec3::from_array(self.field.settings().light_dir).normalized().to_array(),
            _padding2: 0.0,
        };
        self.pipeline.update_uniforms(queue, &uniforms);
    }

    /// Clear `target` and draw the scene into it
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &RenderTarget, clear_color: wgpu::Color) {
        self.pipeline.render(encoder, target, clear_color);
    }

    pub fn field(&self) -> &PistonField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_count() {
        let field = PistonField::new(PistonsSettings::default());
        assert_eq!(field.len(), 121);
        assert_eq!(field.instances().len(), 121);
    }

    #[test]
    fn test_grid_is_centred() {
        let settings = PistonsSettings::default();
        let field = PistonField::new(settings.clone());
        let first = field.pistons().first().unwrap().position;
        let last = field.pistons().last().unwrap().position;
        assert_eq!(first, Vec3::new(-50.0, 0.0, -50.0));
        assert_eq!(last, Vec3::new(50.0, 0.0, 50.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = PistonField::new(PistonsSettings::default());
        let b = PistonField::new(PistonsSettings::default());
        assert_eq!(a.pistons(), b.pistons());

        let c = PistonField::new(PistonsSettings {
            seed: 7,
            ..PistonsSettings::default()
        });
        assert_ne!(a.pistons()[0].phase, c.pistons()[0].phase);
    }

    #[test]
    fn test_heights_stay_in_range() {
        let settings = PistonsSettings::default();
        let mut field = PistonField::new(settings.clone());
        for step in 0..200 {
            field.animate(step as f32 * 0.37);
            for p in field.pistons() {
                assert!(p.height >= settings.min_height);
                assert!(p.height <= settings.base_height + settings.amplitude + 1e-3);
            }
        }
    }

    #[test]
    fn test_min_height_clamp() {
        let settings = PistonsSettings {
            base_height: 0.0,
            amplitude: 10.0,
            min_height: 3.0,
            ..PistonsSettings::default()
        };
        let mut field = PistonField::new(settings);
        field.animate(1.0);
        assert!(field.pistons().iter().all(|p| p.height >= 3.0));
    }

    #[test]
    fn test_animation_changes_heights() {
        let mut field = PistonField::new(PistonsSettings::default());
        field.animate(0.0);
        let before: Vec<f32> = field.pistons().iter().map(|p| p.height).collect();
        field.animate(1.5);
        let after: Vec<f32> = field.pistons().iter().map(|p| p.height).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_instance_matches_piston() {
        let mut field = PistonField::new(PistonsSettings::default());
        field.animate(2.0);
        let piston = field.pistons()[5];
        let instance = field.instances()[5];

        // Translation column carries the ground position
        assert_eq!(instance.model[3][0], piston.position.x);
        assert_eq!(instance.model[3][2], piston.position.z);
        // Y scale is the height, X/Z scale the footprint
        assert!((instance.model[1][1] - piston.height).abs() < 1e-5);
        assert_eq!(instance.model[0][0], 8.0);
        assert_eq!(instance.color[3], 1.0);
    }

    #[test]
    fn test_empty_grid() {
        let field = PistonField::new(PistonsSettings {
            grid_size: 0,
            ..PistonsSettings::default()
        });
        assert!(field.is_empty());
    }
}
