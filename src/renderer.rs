//! # Overlay Renderer
//!
//! `Overlay` is what the device main loop talks to. It owns the pixel store
//! and the demo scene, so there is exactly one writer for the buffers.
//!
//! ## Main loop contract
//!
//! ```text
//! overlay.render_init();
//! loop {
//!     overlay.render_tick(field_boundary_ready);
//! }
//! ```
//!
//! `render_tick(false)` does nothing. The video generator only reads
//! `scanout()`, which changes on the swap at the end of each rendered frame.

use crate::config::SceneConfig;
use crate::framebuffer::{color::Level, store::PixelStore, FrameView};
use crate::osd_log;
use crate::scene::DemoScene;

pub struct Overlay {
    store: PixelStore,
    scene: DemoScene,
}

impl Overlay {
    pub const fn new() -> Self {
        Self::with_config(SceneConfig::DEFAULT)
    }

    pub const fn with_config(config: SceneConfig) -> Self {
        Self {
            store: PixelStore::new(),
            scene: DemoScene::new(config),
        }
    }

    /// Clear both buffers and restart the animation.
    pub fn render_init(&mut self) {
        self.store.init();
        self.scene.reset();
        osd_log!("OSD: overlay initialised, active buffer {}", self.store.active());
    }

    /// Render one frame if the video side says it is safe to swap.
    pub fn render_tick(&mut self, frame_boundary_ready: bool) {
        if !frame_boundary_ready {
            return;
        }
        self.scene.render_frame(&mut self.store);
    }

    /// Draw the checkerboard test card and hand it to scan-out.
    pub fn self_test(&mut self) {
        self.store.clear(Level::Transparent);
        self.store.draw_checkerboard(Level::Black, Level::White);
        self.store.swap();
        osd_log!("OSD: self-test pattern on buffer {}", self.store.active() ^ 1);
    }

    pub fn scanout(&self) -> FrameView<'_> {
        self.store.scanout()
    }

    pub fn store(&self) -> &PixelStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PixelStore {
        &mut self.store
    }

    pub fn scene(&self) -> &DemoScene {
        &self.scene
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
