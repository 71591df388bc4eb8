//! Shape data model for logo drawings.
//!
//! Everything lives in a logical coordinate space (the glyph is authored on a
//! 100×100 grid, y growing upwards). Shapes carry a single solid fill and no
//! stroke; the renderer maps logical units to pixels.

use kurbo::{BezPath, Point, Rect, Shape as _};
use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels, usable in `const` presets.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let channel = |hi: u8, lo: u8| -> Option<f32> {
            Some((hex_val(hi)? << 4 | hex_val(lo)?) as f32 / 255.0)
        };
        let short = |c: u8| -> Option<f32> { Some((hex_val(c)? * 17) as f32 / 255.0) };

        match bytes.len() {
            3 => Some(Self::rgba(
                short(bytes[0])?,
                short(bytes[1])?,
                short(bytes[2])?,
                1.0,
            )),
            4 => Some(Self::rgba(
                short(bytes[0])?,
                short(bytes[1])?,
                short(bytes[2])?,
                short(bytes[3])?,
            )),
            6 => Some(Self::rgba(
                channel(bytes[0], bytes[1])?,
                channel(bytes[2], bytes[3])?,
                channel(bytes[4], bytes[5])?,
                1.0,
            )),
            8 => Some(Self::rgba(
                channel(bytes[0], bytes[1])?,
                channel(bytes[2], bytes[3])?,
                channel(bytes[4], bytes[5])?,
                channel(bytes[6], bytes[7])?,
            )),
            _ => None,
        }
    }

    /// Quantize to 8-bit straight-alpha channels `[r, g, b, a]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as uppercase hex; the alpha pair is omitted when fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

/// A closed, filled polygon. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub fill: Color,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Color) -> Self {
        Self { points, fill }
    }

    /// Closed outline as a kurbo path. Empty for an empty vertex list.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(&first) = iter.next() {
            path.move_to(first);
            for &p in iter {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    /// Shoelace area; positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }
}

/// A filled disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

impl Circle {
    pub fn new(center: Point, radius: f64, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
        }
    }

    pub fn to_kurbo(&self) -> kurbo::Circle {
        kurbo::Circle::new(self.center, self.radius)
    }
}

/// One drawable layer on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn fill(&self) -> Color {
        match self {
            Shape::Circle(c) => c.fill,
            Shape::Polygon(p) => p.fill,
        }
    }

    /// Axis-aligned bounds in logical units.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Circle(c) => c.to_kurbo().bounding_box(),
            Shape::Polygon(p) => p.to_path().bounding_box(),
        }
    }

    /// Non-zero winding containment test.
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Shape::Circle(c) => c.to_kurbo().contains(pt),
            Shape::Polygon(p) => p.points.len() >= 3 && p.to_path().contains(pt),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_hex_color() {
        let c = Color::from_hex("#2D3436").unwrap();
        assert_eq!(c.to_rgba8(), [0x2D, 0x34, 0x36, 0xFF]);
        assert_eq!(c.to_hex(), "#2D3436");
    }

    #[test]
    fn parse_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#FFF").unwrap().to_hex(), "#FFFFFF");
        assert_eq!(Color::from_hex("0008").unwrap().to_rgba8(), [0, 0, 0, 0x88]);
        assert_eq!(
            Color::from_hex("#1B263B80").unwrap().to_hex(),
            "#1B263B80"
        );
    }

    #[test]
    fn reject_bad_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn const_rgb8_matches_hex() {
        assert_eq!(
            Color::from_rgb8(0xD4, 0xA0, 0x17),
            Color::from_hex("#D4A017").unwrap()
        );
    }

    #[test]
    fn polygon_area_follows_winding() {
        let ccw = Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            Color::from_rgb8(0, 0, 0),
        );
        assert_eq!(ccw.signed_area(), 50.0);

        let mut cw = ccw.clone();
        cw.points.reverse();
        assert_eq!(cw.signed_area(), -50.0);
    }

    #[test]
    fn circle_bounds_and_containment() {
        let disc = Shape::Circle(Circle::new(
            Point::new(50.0, 50.0),
            69.0,
            Color::from_rgb8(0, 0, 0),
        ));
        assert_eq!(disc.bounding_box(), Rect::new(-19.0, -19.0, 119.0, 119.0));
        assert!(disc.contains(Point::new(50.0, 118.0)));
        assert!(!disc.contains(Point::new(-18.0, -18.0)));
    }
}
