//! Wireframe cube geometry
use crate::framebuffer::{color::Level, store::PixelStore};
use crate::projection::{transform, Point2, Rotation, Vec3};

pub const NUM_VERTICES: usize = 8;
pub const NUM_EDGES: usize = 12;

/// Unit cube corners, front face (z = -1) first.
pub const CUBE_VERTICES: [Vec3; NUM_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

pub const CUBE_EDGES: [(usize, usize); NUM_EDGES] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // front
    (4, 5), (5, 6), (6, 7), (7, 4), // back
    (0, 4), (1, 5), (2, 6), (3, 7), // sides
];

/// Where one cube lands on screen this frame.
#[derive(Debug, Clone, Copy)]
pub struct CubeProjection {
    pub size: f32,
    pub fov: f32,
    pub viewer_distance: f32,
    pub origin: Point2,
}

impl CubeProjection {
    pub fn vertices(&self, rotation: &Rotation) -> [Point2; NUM_VERTICES] {
        core::array::from_fn(|i| {
            transform(
                CUBE_VERTICES[i],
                self.size,
                rotation,
                self.fov,
                self.viewer_distance,
                self.origin,
            )
        })
    }
}

/// Project the cube and draw its 12 edges.
pub fn draw_cube(store: &mut PixelStore, cube: &CubeProjection, rotation: &Rotation, level: Level) {
    let projected = cube.vertices(rotation);
    for &(start, end) in CUBE_EDGES.iter() {
        let (a, b) = (projected[start], projected[end]);
        store.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::boxed::Box;

    const FRONT: CubeProjection = CubeProjection {
        size: 80.0,
        fov: 110.0,
        viewer_distance: 400.0,
        origin: Point2::new(180, 220),
    };

    #[test]
    fn test_every_vertex_has_three_edges() {
        let mut degree = [0; NUM_VERTICES];
        for &(a, b) in CUBE_EDGES.iter() {
            assert_ne!(a, b);
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree, [3; NUM_VERTICES]);
    }

    #[test]
    fn test_draw_cube_outlines_front_face() {
        let mut store = Box::new(PixelStore::new());
        draw_cube(&mut store, &FRONT, &Rotation::identity(), Level::White);

        // Front face corners and the middle of its top edge.
        for &(x, y) in [(152, 192), (207, 192), (207, 247), (152, 247), (180, 192)].iter() {
            assert_eq!(store.get_pixel(x, y), Some(Level::White), "({}, {})", x, y);
        }
        // Back face corner and the cube centre.
        assert_eq!(store.get_pixel(161, 201), Some(Level::White));
        assert_eq!(store.get_pixel(180, 220), Some(Level::Transparent));
        assert_eq!(store.scanout().count_level(Level::White), 0);
    }

    #[test]
    fn test_offscreen_cube_is_clipped() {
        let mut store = Box::new(PixelStore::new());
        let far = CubeProjection { origin: Point2::new(-1000, -1000), ..FRONT };
        draw_cube(&mut store, &far, &Rotation::identity(), Level::White);
        assert!(store.active_frame().as_bytes().iter().all(|&b| b == 0));
    }
}
