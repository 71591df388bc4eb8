//! Integration tests: preset → drawn scene → verify geometry.
//!
//! Exercises the public `logo-core` surface the renderer relies on.

use logo_core::variant::{ALL, BADGE_MINT, BADGE_NAVY};
use logo_core::{CentroidScale, Point, Rect, Scene, Shape, glyph, hit_test};

fn drawn(variant: &logo_core::DesignVariant) -> Scene {
    let mut scene = Scene::new();
    variant.draw(&mut scene);
    scene
}

#[test]
fn transform_formula_holds_for_every_body_vertex() {
    for s in [0.9, 1.3] {
        let t = CentroidScale::about_glyph_center(s);
        for (orig, mapped) in glyph::BODY.iter().zip(glyph::body(&t)) {
            let expected = Point::new((orig.x - 50.0) * s + 50.0, (orig.y - 50.0) * s + 50.0);
            assert_eq!(mapped, expected, "scale {s}");
        }
    }
}

#[test]
fn navy_glyph_first_vertex() {
    let scene = drawn(&BADGE_NAVY);
    let Shape::Polygon(body) = &scene.shapes()[1] else {
        panic!("expected body polygon after background");
    };
    assert!((body.points[0].x - 24.0).abs() < 1e-12);
    assert!((body.points[0].y - 95.5).abs() < 1e-12);
}

#[test]
fn background_bounds_equal_extent_in_exact_mode() {
    let scene = drawn(&BADGE_NAVY);
    let disc = scene.shapes()[0].bounding_box();
    assert_eq!(disc, BADGE_NAVY.extent());
    assert_eq!(disc, Rect::new(-19.0, -19.0, 119.0, 119.0));
}

#[test]
fn content_bounds_per_preset() {
    let glyph_only = drawn(&ALL[0]).content_bounds().unwrap();
    assert_eq!(glyph_only, Rect::new(30.0, 20.0, 75.0, 85.0));

    let mint = drawn(&BADGE_MINT).content_bounds().unwrap();
    assert_eq!(mint, Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn body_and_fold_never_overlap() {
    for variant in ALL {
        let scene = drawn(&variant);
        let n = scene.len();
        let (body, fold) = (&scene.shapes()[n - 2], &scene.shapes()[n - 1]);
        let Shape::Polygon(fold_poly) = fold else {
            panic!("fold must be a polygon");
        };
        // Probe the fold's centroid and vertices pulled slightly inward.
        let c = fold_poly.points.iter().fold(Point::ZERO, |acc, p| acc + p.to_vec2());
        let centroid = Point::new(c.x / 3.0, c.y / 3.0);
        assert!(!body.contains(centroid), "{}: fold centroid inside body", variant.name);
        for &v in &fold_poly.points {
            let inward = v.lerp(centroid, 0.05);
            assert!(!body.contains(inward), "{}: {inward:?} in both", variant.name);
            assert_eq!(hit_test(&scene, inward), Some(n - 1));
        }
    }
}
