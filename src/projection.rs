//! # Projection
//!
//! Rotate-then-project pipeline for the demo scene. Rotation runs about X,
//! then Y, then Z (right handed, radians), the result is pushed
//! `CAMERA_PUSH` units along +Z and perspective divided:
//!
//! ```text
//! screen = origin + p.xy * fov / (viewer_distance + p.z)
//! ```
//!
//! The divisor is never clamped. Points near the camera plane project to
//! huge or saturated coordinates, which the pixel layer then drops.

use libm::{cosf, sinf};

/// Distance every rotated vertex is pushed away from the camera.
pub const CAMERA_PUSH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

/// Integer screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2 {
    pub x: i16,
    pub y: i16,
}

impl Point2 {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Sines and cosines for one set of Euler angles.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    sin: [f32; 3],
    cos: [f32; 3],
}

impl Rotation {
    pub fn new(angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        Self {
            sin: [sinf(angle_x), sinf(angle_y), sinf(angle_z)],
            cos: [cosf(angle_x), cosf(angle_y), cosf(angle_z)],
        }
    }

    pub fn identity() -> Self {
        Self { sin: [0.0; 3], cos: [1.0; 3] }
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        let [sin_x, sin_y, sin_z] = self.sin;
        let [cos_x, cos_y, cos_z] = self.cos;

        // X
        let y1 = v.y * cos_x - v.z * sin_x;
        let z1 = v.y * sin_x + v.z * cos_x;

        // Y
        let x2 = v.x * cos_y + z1 * sin_y;
        let z2 = -v.x * sin_y + z1 * cos_y;

        // Z
        let x3 = x2 * cos_z - y1 * sin_z;
        let y3 = x2 * sin_z + y1 * cos_z;

        Vec3::new(x3, y3, z2)
    }
}

/// Perspective divide onto the screen. Fractions truncate toward zero and
/// out-of-range results saturate at the `i16` limits.
pub fn project(point: Vec3, fov: f32, viewer_distance: f32, origin: Point2) -> Point2 {
    let factor = fov / (viewer_distance + point.z);
    Point2 {
        x: (point.x * factor + origin.x as f32) as i16,
        y: (point.y * factor + origin.y as f32) as i16,
    }
}

/// Scale an object-space vertex, rotate it, push it in front of the camera
/// and project it.
pub fn transform(
    vertex: Vec3,
    size: f32,
    rotation: &Rotation,
    fov: f32,
    viewer_distance: f32,
    origin: Point2,
) -> Point2 {
    let mut p = rotation.apply(vertex.scale(size));
    p.z += CAMERA_PUSH;
    project(p, fov, viewer_distance, origin)
}
