//! Box mesh used for every piston
//!
//! A unit box spanning `[-0.5, 0.5]` in X and Z and `[0, 1]` in Y, so a
//! scale on Y grows the piston upwards from the ground plane.
//! Each face has its own 4 vertices so normals stay flat.

use fxaa_math::Vec3;

use crate::pipeline::BoxVertex;

/// Face description: outward normal plus two in-plane axes with `u x v = normal`
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0)),
    (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0)),
    (Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
    (Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
];

/// Indexed box mesh
pub struct BoxMesh {
    pub vertices: Vec<BoxVertex>,
    pub indices: Vec<u16>,
}

impl BoxMesh {
    /// Build the unit piston box
    pub fn unit() -> Self {
        let center = Vec3::new(0.0, 0.5, 0.0);
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in FACES {
            let face_center = center + normal * 0.5;
            let base = vertices.len() as u16;

            // Counter-clockwise seen from outside the box
            for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
                let p = face_center + u * su + v * sv;
                vertices.push(BoxVertex {
                    position: p.to_array(),
                    normal: normal.to_array(),
                });
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// Number of indices to draw
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
