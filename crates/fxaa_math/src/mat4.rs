//! 4x4 matrix utilities
//!
//! Column-major matrices (`m[column][row]`), matching WGSL `mat4x4<f32>`
//! layout so they can be written to uniform buffers directly.
//! Projection follows wgpu conventions: right-handed view space,
//! clip-space depth in `[0, 1]`.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) and return the homogeneous result
pub fn transform_point(m: Mat4, p: Vec3) -> [f32; 4] {
    [
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
        m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3],
    ]
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Right-handed perspective projection with a `[0, 1]` depth range
///
/// `fov_y` is the full vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = far / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, range, -1.0],
        [0.0, 0.0, range * near, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_mul_identity() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert!(mat_approx_eq(mul(IDENTITY, t), t));
        assert!(mat_approx_eq(mul(t, IDENTITY), t));
    }

    #[test]
    fn test_mul_order_applies_right_first() {
        // scale then translate
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), scale(Vec3::new(2.0, 2.0, 2.0)));
        let p = transform_point(m, Vec3::new(1.0, 1.0, 1.0));
        assert!(approx_eq(p[0], 12.0));
        assert!(approx_eq(p[1], 2.0));
        assert!(approx_eq(p[3], 1.0));
    }

    #[test]
    fn test_look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);
        let p = transform_point(view, Vec3::ZERO);
        assert!(approx_eq(p[0], 0.0));
        assert!(approx_eq(p[1], 0.0));
        assert!(approx_eq(p[2], -10.0));
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(std::f32::consts::FRAC_PI_4, 1.5, 0.1, 100.0);

        let near = transform_point(proj, Vec3::new(0.0, 0.0, -0.1));
        assert!(approx_eq(near[2] / near[3], 0.0), "near plane maps to 0");

        let far = transform_point(proj, Vec3::new(0.0, 0.0, -100.0));
        assert!(approx_eq(far[2] / far[3], 1.0), "far plane maps to 1");
    }

    #[test]
    fn test_perspective_aspect() {
        let proj = perspective(std::f32::consts::FRAC_PI_2, 2.0, 0.1, 100.0);
        assert!(approx_eq(proj[1][1], 1.0));
        assert!(approx_eq(proj[0][0], 0.5));
    }
}
