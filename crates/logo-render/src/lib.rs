//! Rasterizes logo scenes with tiny-skia and writes transparent PNGs.

pub mod canvas;
pub mod error;
pub mod paint;

pub use canvas::{
    Canvas, CanvasConfig, create_logo, create_logo_variant, render, render_variant, save_png,
};
pub use error::{RenderError, Result};

// Re-export so callers can inspect rendered images without a direct dependency
pub use tiny_skia::Pixmap;
