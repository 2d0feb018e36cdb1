//! # OSD Overlay Renderer
//!
//! Packed 2-bit pixel buffers for an analog video overlay, plus the
//! rasterizer and demo scene that draw into them.
//!
//! ## Modules
//!
//! - `framebuffer`: double-buffered packed storage and pixel access
//! - `raster`: clear, lines, fills, checkerboard self-test
//! - `projection`: fixed rotate-then-project pipeline
//! - `scene`: spinning cube demo driver
//! - `renderer`: `Overlay`, the entry point the main loop calls
//! - `config`: compiled-in scene constants
//! - `logger`: pluggable log sink and the `osd_log!` macro
//!
//! ## Frame flow
//!
//! ```text
//! main loop ──▶ Overlay::render_tick ──▶ DemoScene ──▶ raster ──▶ PixelStore
//!                                                                    │
//!               video generator ◀── scanout() (non-active buffer) ◀──┘
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod logger;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod scene;

pub use config::SceneConfig;
pub use error::OverlayError;
pub use framebuffer::{color::Level, store::PixelStore, FrameView};
pub use renderer::Overlay;
