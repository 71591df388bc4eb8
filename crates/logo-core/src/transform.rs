//! Uniform scale about a fixed center.
//!
//! Vertices are mapped with `p' = (p - c) * s + c`, evaluated per component
//! so that literal inputs give literal outputs (no composed affine matrix).

use kurbo::{Affine, Point};
use serde::Serialize;

/// Center of the glyph's 100×100 authoring grid.
pub const GLYPH_CENTER: Point = Point::new(50.0, 50.0);

/// Scale-about-centroid transform. Identity when `scale == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentroidScale {
    pub scale: f64,
    pub center: Point,
}

impl Default for CentroidScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CentroidScale {
    pub const IDENTITY: Self = Self::about_glyph_center(1.0);

    pub const fn new(scale: f64, center: Point) -> Self {
        Self { scale, center }
    }

    pub const fn about_glyph_center(scale: f64) -> Self {
        Self::new(scale, GLYPH_CENTER)
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    pub fn apply(&self, p: Point) -> Point {
        let c = self.center;
        Point::new(
            (p.x - c.x) * self.scale + c.x,
            (p.y - c.y) * self.scale + c.y,
        )
    }

    /// Map every vertex; returns the input unchanged for the identity.
    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        if self.is_identity() {
            return points.to_vec();
        }
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// The same mapping as a kurbo affine, for callers composing transforms.
    pub fn to_affine(&self) -> Affine {
        let c = self.center.to_vec2();
        Affine::translate(c) * Affine::scale(self.scale) * Affine::translate(-c)
    }
}
