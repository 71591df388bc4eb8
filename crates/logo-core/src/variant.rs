//! Named design presets and the drawer that turns one into shapes.
//!
//! Each preset is an independent, hardcoded combination of colors, scale and
//! canvas fit. They are not meant to be combined or parametrized further.

use crate::glyph;
use crate::model::{Circle, Color, Polygon};
use crate::scene::Surface;
use crate::transform::{CentroidScale, GLYPH_CENTER};
use kurbo::{Point, Rect};
use serde::Serialize;

/// Logical extent of the glyph authoring grid.
pub const GLYPH_EXTENT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

/// Filled disc drawn beneath the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Background {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

impl Background {
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

/// How the canvas extent is chosen and whether the output is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitMode {
    /// Fixed [0,100]² extent, output cropped to drawn pixels.
    Tight,
    /// Extent equals the background's bounding box, no cropping.
    ExactBackground,
}

/// One named logo preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignVariant {
    pub name: &'static str,
    pub file_name: &'static str,
    pub background: Option<Background>,
    pub foreground: Color,
    pub scale: f64,
    pub fit: FitMode,
}

impl DesignVariant {
    pub fn transform(&self) -> CentroidScale {
        CentroidScale::about_glyph_center(self.scale)
    }

    /// Logical extent the canvas should cover.
    ///
    /// `ExactBackground` without a background falls back to the glyph grid.
    pub fn extent(&self) -> Rect {
        match (self.fit, self.background) {
            (FitMode::ExactBackground, Some(bg)) => bg.bounding_box(),
            _ => GLYPH_EXTENT,
        }
    }

    /// Whether the rendered image is trimmed to its content.
    pub fn crops_to_content(&self) -> bool {
        self.fit == FitMode::Tight
    }

    /// Add this preset's shapes back to front: background, body, fold.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if let Some(bg) = self.background {
            surface.add_circle(Circle::new(bg.center, bg.radius, bg.color));
        }

        let transform = self.transform();
        surface.add_polygon(Polygon::new(glyph::body(&transform), self.foreground));
        surface.add_polygon(Polygon::new(glyph::fold(&transform), self.foreground));
    }
}

// ─── Presets ─────────────────────────────────────────────────────────────

/// Dark charcoal glyph on a transparent background.
pub const ARCHITECTURAL_REDESIGNED: DesignVariant = DesignVariant {
    name: "architectural-redesigned",
    file_name: "logo_architectural_redesigned.png",
    background: None,
    foreground: Color::from_rgb8(0x2D, 0x34, 0x36),
    scale: 1.0,
    fit: FitMode::Tight,
};

/// Near-black glyph shrunk onto a bright mint disc, trimmed to the disc.
pub const BADGE_MINT: DesignVariant = DesignVariant {
    name: "badge-mint",
    file_name: "icon_bg.png",
    background: Some(Background {
        center: GLYPH_CENTER,
        radius: 50.0,
        color: Color::from_rgb8(0x69, 0xF0, 0xAE),
    }),
    foreground: Color::from_rgb8(0x21, 0x21, 0x21),
    scale: 0.9,
    fit: FitMode::Tight,
};

/// Warm yellow glyph enlarged onto a navy disc that bleeds to every edge.
pub const BADGE_NAVY: DesignVariant = DesignVariant {
    name: "badge-navy",
    file_name: "icon_bg_purple.png",
    background: Some(Background {
        center: GLYPH_CENTER,
        radius: 69.0,
        color: Color::from_rgb8(0x1B, 0x26, 0x3B),
    }),
    foreground: Color::from_rgb8(0xD4, 0xA0, 0x17),
    scale: 1.3,
    fit: FitMode::ExactBackground,
};

/// Every preset, in the order the generators were written.
pub const ALL: [DesignVariant; 3] = [ARCHITECTURAL_REDESIGNED, BADGE_MINT, BADGE_NAVY];

/// Look a preset up by its `name`.
pub fn by_name(name: &str) -> Option<DesignVariant> {
    ALL.iter().copied().find(|v| v.name == name)
}
