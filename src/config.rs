//! Scene configuration.
//!
//! Compiled-in constants grouped the same way a theme groups colors: one
//! `Copy` struct with a `const` default that the renderer is built from.

use crate::framebuffer::color::Level;
use crate::projection::Point2;

/// One cube outline: edge half-length in object units and projection fov.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeConfig {
    pub size: f32,
    pub fov: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub cubes: [CubeConfig; 2],
    /// Screen point the projected cube centre lands on.
    pub origin: Point2,
    pub level: Level,
    /// Level the active buffer is cleared to before each frame.
    pub background: Level,
    /// Per-frame rotation increments in radians, X/Y/Z.
    pub angle_step: [f32; 3],
    /// Bouncing fov: start value, per-frame step and reflection bounds.
    pub fov_start: f32,
    pub fov_step: f32,
    pub fov_min: f32,
    pub fov_max: f32,
}

impl SceneConfig {
    pub const DEFAULT: SceneConfig = SceneConfig {
        cubes: [
            CubeConfig { size: 80.0, fov: 110.0 },
            CubeConfig { size: 50.0, fov: 100.0 },
        ],
        origin: Point2 { x: 180, y: 220 },
        level: Level::White,
        background: Level::Transparent,
        angle_step: [0.01, 0.013, 0.017],
        fov_start: 400.0,
        fov_step: 5.0,
        fov_min: 200.0,
        fov_max: 400.0,
    };
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
