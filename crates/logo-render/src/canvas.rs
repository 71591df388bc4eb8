//! Offscreen canvas: logical extent → pixmap → PNG.
//!
//! A canvas maps a logical extent (y up) onto a square pixmap of
//! `size_inches × dpi` pixels, keeping the aspect ratio equal. Drawing
//! happens through a `Surface` handle; nothing touches pixels until
//! `finish`, which lints, paints, and optionally trims to content.

use crate::error::{RenderError, Result};
use crate::paint::paint_scene;
use kurbo::{Point, Rect};
use logo_core::{DesignVariant, LintSeverity, Scene, Surface, lint_scene};
use std::path::{Path, PathBuf};
use tiny_skia::{IntRect, Pixmap, Transform};

/// Physical output size and density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Edge length of the square output, in inches.
    pub size_inches: f32,
    /// Pixels per inch.
    pub dpi: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size_inches: 5.0,
            dpi: 300,
        }
    }
}

impl CanvasConfig {
    /// Edge length in pixels (1500 for the default 5in × 300dpi).
    pub fn pixel_size(&self) -> u32 {
        (self.size_inches * self.dpi as f32).round() as u32
    }
}

/// A drawing surface bound to a logical extent and a pixel grid.
pub struct Canvas {
    extent: Rect,
    crop_to_content: bool,
    pixmap: Pixmap,
    scene: Scene,
    transform: Transform,
}

impl Canvas {
    /// Allocate a transparent canvas covering `extent`.
    ///
    /// With `crop_to_content`, `finish` trims the image to the drawn pixels.
    pub fn new(config: CanvasConfig, extent: Rect, crop_to_content: bool) -> Result<Self> {
        let size = config.pixel_size();
        if !(extent.width() > 0.0 && extent.height() > 0.0) || !extent.is_finite() {
            return Err(RenderError::InvalidExtent(format!("{extent:?}")));
        }
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::InvalidCanvas {
            width: size,
            height: size,
        })?;
        let transform = logical_to_pixel(extent, size, size);
        log::debug!(
            "canvas {size}x{size}px extent=({}, {})–({}, {}) crop={crop_to_content}",
            extent.x0,
            extent.y0,
            extent.x1,
            extent.y1
        );

        Ok(Self {
            extent,
            crop_to_content,
            pixmap,
            scene: Scene::new(),
            transform,
        })
    }

    pub fn extent(&self) -> Rect {
        self.extent
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Logical → pixel mapping used when painting.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Pixel-space position (before any crop) → logical point.
    pub fn pixel_to_logical(&self, px: f32, py: f32) -> Option<Point> {
        let inv = self.transform.invert()?;
        let mut pts = [tiny_skia::Point::from_xy(px, py)];
        inv.map_points(&mut pts);
        Some(Point::new(pts[0].x as f64, pts[0].y as f64))
    }

    /// Hand the drawing procedure a surface handle. Call once.
    pub fn draw(&mut self, draw: impl FnOnce(&mut dyn Surface)) {
        draw(&mut self.scene);
    }

    /// Lint, rasterize, and (for tight canvases) crop to content.
    pub fn finish(mut self) -> Result<Pixmap> {
        for diag in lint_scene(&self.scene, self.extent) {
            match diag.severity {
                LintSeverity::Warning => log::warn!("[{}] {}", diag.rule, diag.message),
                LintSeverity::Info => log::debug!("[{}] {}", diag.rule, diag.message),
            }
        }

        paint_scene(&mut self.pixmap, &self.scene, self.transform);

        if !self.crop_to_content {
            return Ok(self.pixmap);
        }
        let rect = content_rect(&self.pixmap).ok_or(RenderError::EmptyCanvas)?;
        log::debug!(
            "crop to {}x{} at ({}, {})",
            rect.width(),
            rect.height(),
            rect.x(),
            rect.y()
        );
        self.pixmap
            .clone_rect(rect)
            .ok_or(RenderError::InvalidCanvas {
                width: rect.width(),
                height: rect.height(),
            })
    }
}

// ─── Entry points ────────────────────────────────────────────────────────────

/// Run a drawing procedure on a fresh canvas and return the rasterized image.
pub fn render(
    config: CanvasConfig,
    extent: Rect,
    crop_to_content: bool,
    draw: impl FnOnce(&mut dyn Surface),
) -> Result<Pixmap> {
    let mut canvas = Canvas::new(config, extent, crop_to_content)?;
    canvas.draw(draw);
    canvas.finish()
}

/// Run a drawing procedure and write the result to `path` as PNG.
///
/// Overwrites an existing file. No cleanup on failure.
pub fn create_logo(
    path: &Path,
    config: CanvasConfig,
    extent: Rect,
    crop_to_content: bool,
    draw: impl FnOnce(&mut dyn Surface),
) -> Result<()> {
    let pixmap = render(config, extent, crop_to_content, draw)?;
    save_png(&pixmap, path)
}

/// Rasterize a preset in memory.
pub fn render_variant(variant: &DesignVariant, config: CanvasConfig) -> Result<Pixmap> {
    render(config, variant.extent(), variant.crops_to_content(), |surface| {
        variant.draw(surface)
    })
}

/// Render a preset into `dir` under its file name; returns the written path.
pub fn create_logo_variant(dir: &Path, variant: &DesignVariant) -> Result<PathBuf> {
    let path = dir.join(variant.file_name);
    log::info!("rendering {} → {}", variant.name, path.display());
    create_logo(
        &path,
        CanvasConfig::default(),
        variant.extent(),
        variant.crops_to_content(),
        |surface| variant.draw(surface),
    )?;
    Ok(path)
}

/// Encode as RGBA PNG and write to disk.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let bytes = pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    std::fs::write(path, &bytes)?;
    log::info!(
        "wrote {} ({}x{}, {} bytes)",
        path.display(),
        pixmap.width(),
        pixmap.height(),
        bytes.len()
    );
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Uniform scale that fits `extent` into `width × height`, centered, y flipped.
fn logical_to_pixel(extent: Rect, width: u32, height: u32) -> Transform {
    let (w, h) = (width as f64, height as f64);
    let k = (w / extent.width()).min(h / extent.height());
    let ox = (w - extent.width() * k) / 2.0;
    let oy = (h - extent.height() * k) / 2.0;
    Transform::from_row(
        k as f32,
        0.0,
        0.0,
        -k as f32,
        (ox - extent.x0 * k) as f32,
        (h - oy + extent.y0 * k) as f32,
    )
}

/// Smallest pixel rectangle containing every non-transparent pixel.
fn content_rect(pixmap: &Pixmap) -> Option<IntRect> {
    let width = pixmap.width() as usize;
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (i, px) in pixmap.pixels().iter().enumerate() {
        if px.alpha() == 0 {
            continue;
        }
        let (x, y) = (i % width, i / width);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    let (x0, y0, x1, y1) = bounds?;
    IntRect::from_xywh(
        x0 as i32,
        y0 as i32,
        (x1 - x0 + 1) as u32,
        (y1 - y0 + 1) as u32,
    )
}
