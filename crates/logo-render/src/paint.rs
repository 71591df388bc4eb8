//! Scene → tiny-skia fill operations.
//!
//! Shapes are turned into kurbo outlines in logical units, flattened into
//! tiny-skia paths, and filled through the canvas transform. Fills only:
//! no strokes, anti-aliased edges, non-zero winding.

use kurbo::{PathEl, Shape as _};
use logo_core::model::{Color, Shape};
use logo_core::Scene;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// Flattening tolerance for curved outlines, in logical units.
const CURVE_TOLERANCE: f64 = 0.01;

/// Paint every shape of the scene, bottom-most first.
pub fn paint_scene(pixmap: &mut Pixmap, scene: &Scene, transform: Transform) {
    for (idx, shape) in scene.shapes().iter().enumerate() {
        log::trace!("paint #{idx} {}", shape.kind_name());
        paint_shape(pixmap, shape, transform);
    }
}

fn paint_shape(pixmap: &mut Pixmap, shape: &Shape, transform: Transform) {
    match shape {
        Shape::Circle(circle) => fill_shape(pixmap, &circle.to_kurbo(), circle.fill, transform),
        Shape::Polygon(poly) => fill_shape(pixmap, &poly.to_path(), poly.fill, transform),
    }
}

// ─── Fill ────────────────────────────────────────────────────────────────────

fn fill_shape<S: kurbo::Shape>(pixmap: &mut Pixmap, shape: &S, color: Color, transform: Transform) {
    let Some(path) = to_skia_path(shape.path_elements(CURVE_TOLERANCE)) else {
        log::warn!("skipping shape with an empty or degenerate outline");
        return;
    };
    pixmap.fill_path(&path, &solid(color), FillRule::Winding, transform, None);
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn solid(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Convert kurbo path elements to a tiny-skia path. `None` when empty.
fn to_skia_path(elements: impl Iterator<Item = PathEl>) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for el in elements {
        match el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use logo_core::model::{Circle, Polygon};
    use logo_core::Surface;

    const RED: Color = Color::from_rgb8(0xFF, 0, 0);

    fn alpha_at(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    #[test]
    fn fills_polygon_opaque_inside_transparent_outside() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        let mut scene = Scene::new();
        scene.add_polygon(Polygon::new(
            vec![
                Point::new(2.0, 2.0),
                Point::new(18.0, 2.0),
                Point::new(18.0, 10.0),
                Point::new(2.0, 10.0),
            ],
            RED,
        ));
        paint_scene(&mut pixmap, &scene, Transform::identity());

        let inside = pixmap.pixel(10, 5).unwrap();
        assert_eq!(inside.alpha(), 255);
        assert_eq!(inside.red(), 255);
        assert_eq!(alpha_at(&pixmap, 10, 15), 0);
        assert_eq!(alpha_at(&pixmap, 0, 0), 0);
    }

    #[test]
    fn later_shapes_cover_earlier_ones() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        let mut scene = Scene::new();
        scene.add_circle(Circle::new(Point::new(10.0, 10.0), 9.0, RED));
        scene.add_circle(Circle::new(
            Point::new(10.0, 10.0),
            4.0,
            Color::from_rgb8(0, 0, 0xFF),
        ));
        paint_scene(&mut pixmap, &scene, Transform::identity());

        let center = pixmap.pixel(10, 10).unwrap();
        assert_eq!((center.red(), center.blue()), (0, 255));
        let ring = pixmap.pixel(10, 3).unwrap();
        assert_eq!((ring.red(), ring.blue()), (255, 0));
    }

    #[test]
    fn degenerate_outline_is_skipped() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        let mut scene = Scene::new();
        scene.add_polygon(Polygon::new(Vec::new(), RED));
        paint_scene(&mut pixmap, &scene, Transform::identity());
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }
}
