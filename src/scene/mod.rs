//! # Demo Scene
//!
//! Two concentric wireframe cubes spinning about all three axes while the
//! viewer distance bounces in and out. Each frame:
//!
//! 1. clear the active buffer to the background level
//! 2. project and draw both cubes with the same angles
//! 3. swap buffers
//! 4. advance the angles, wrapping at 2π
//! 5. advance the fov, reflecting at its bounds
//!
//! The scene cannot fail; anything projected off-screen is clipped.

pub mod cube;

use crate::config::SceneConfig;
use crate::framebuffer::store::PixelStore;
use crate::osd_log;
use crate::projection::Rotation;
use core::f32::consts::TAU;
use cube::{draw_cube, CubeProjection};

/// Per-frame animation values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub angle_x: f32,
    pub angle_y: f32,
    pub angle_z: f32,
    /// Bouncing fov. It is fed to the projection as the viewer distance,
    /// so lower values pull the cubes closer.
    pub fov: f32,
    pub fov_step: f32,
}

impl AnimationState {
    pub const fn new(config: &SceneConfig) -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            fov: config.fov_start,
            fov_step: config.fov_step,
        }
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.angle_x, self.angle_y, self.angle_z)
    }

    /// Step one frame. Returns true when the fov changed direction.
    pub fn advance(&mut self, config: &SceneConfig) -> bool {
        let [dx, dy, dz] = config.angle_step;
        self.angle_x = wrap_angle(self.angle_x + dx);
        self.angle_y = wrap_angle(self.angle_y + dy);
        self.angle_z = wrap_angle(self.angle_z + dz);

        let step = self.fov_step;
        self.fov -= self.fov_step;
        if self.fov < config.fov_min {
            self.fov_step = -config.fov_step.abs();
        }
        if self.fov > config.fov_max {
            self.fov_step = config.fov_step.abs();
        }
        step != self.fov_step
    }
}

fn wrap_angle(angle: f32) -> f32 {
    if angle >= TAU {
        angle - TAU
    } else {
        angle
    }
}

pub struct DemoScene {
    config: SceneConfig,
    state: AnimationState,
    frames: u32,
}

impl DemoScene {
    pub const fn new(config: SceneConfig) -> Self {
        Self {
            state: AnimationState::new(&config),
            config,
            frames: 0,
        }
    }

    pub fn reset(&mut self) {
        self.state = AnimationState::new(&self.config);
        self.frames = 0;
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Draw this frame's cubes into the active buffer, without clearing or
    /// swapping.
    pub fn draw(&self, store: &mut PixelStore) {
        let rotation = self.state.rotation();
        for cube in self.config.cubes.iter() {
            let projection = CubeProjection {
                size: cube.size,
                fov: cube.fov,
                viewer_distance: self.state.fov,
                origin: self.config.origin,
            };
            draw_cube(store, &projection, &rotation, self.config.level);
        }
    }

    /// Render one complete frame and hand it to scan-out.
    pub fn render_frame(&mut self, store: &mut PixelStore) {
        store.clear(self.config.background);
        self.draw(store);
        store.swap();

        if self.state.advance(&self.config) {
            osd_log!(
                "OSD: fov turned at {} after {} frames",
                self.state.fov,
                self.frames + 1
            );
        }
        self.frames = self.frames.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::color::Level;
    use std::boxed::Box;

    #[test]
    fn test_fov_bounces_between_bounds() {
        let config = SceneConfig::DEFAULT;
        let mut state = AnimationState::new(&config);
        assert_eq!(state.fov, 400.0);

        for _ in 0..40 {
            assert!(!state.advance(&config));
        }
        assert_eq!(state.fov, 200.0);
        assert!(state.advance(&config));
        assert_eq!(state.fov, 195.0);
        assert_eq!(state.fov_step, -5.0);

        state.advance(&config);
        assert_eq!(state.fov, 200.0);

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for _ in 0..500 {
            state.advance(&config);
            min = min.min(state.fov);
            max = max.max(state.fov);
        }
        assert_eq!(min, 195.0);
        assert_eq!(max, 405.0);
    }

    #[test]
    fn test_angles_wrap_below_tau() {
        let config = SceneConfig::DEFAULT;
        let mut state = AnimationState::new(&config);
        for _ in 0..2000 {
            state.advance(&config);
            for angle in [state.angle_x, state.angle_y, state.angle_z] {
                assert!((0.0..TAU).contains(&angle), "angle {} escaped", angle);
            }
        }
        // 2000 * 0.017 rad is more than five turns about Z.
        assert!(state.angle_z < 2000.0 * 0.017);
    }

    #[test]
    fn test_render_frame_draws_then_swaps() {
        let mut store = Box::new(PixelStore::new());
        let mut scene = DemoScene::new(SceneConfig::DEFAULT);

        scene.render_frame(&mut store);
        assert_eq!(store.active(), 1);
        assert_eq!(scene.frames(), 1);
        assert_eq!(scene.state().fov, 395.0);
        assert!((scene.state().angle_y - 0.013).abs() < 1e-6);

        let shown = store.scanout();
        // Outer and inner front-face corners at zero rotation.
        assert_eq!(shown.level(152, 192), Some(Level::White));
        assert_eq!(shown.level(165, 205), Some(Level::White));
        assert_eq!(shown.level(0, 0), Some(Level::Transparent));
        assert_eq!(store.active_frame().count_level(Level::White), 0);
    }

    #[test]
    fn test_render_frame_clears_previous_contents() {
        let mut store = Box::new(PixelStore::new());
        let mut scene = DemoScene::new(SceneConfig::DEFAULT);
        store.clear(Level::Gray);
        store.swap();
        store.clear(Level::Gray);

        scene.render_frame(&mut store);
        scene.render_frame(&mut store);
        assert_eq!(store.scanout().count_level(Level::Gray), 0);
        assert_eq!(store.active_frame().count_level(Level::Gray), 0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = Box::new(PixelStore::new());
        let mut scene = DemoScene::new(SceneConfig::DEFAULT);
        for _ in 0..7 {
            scene.render_frame(&mut store);
        }
        scene.reset();
        assert_eq!(*scene.state(), AnimationState::new(&SceneConfig::DEFAULT));
        assert_eq!(scene.frames(), 0);
    }
}
