//! Drawing surface handle and the in-memory scene that backs it.
//!
//! Drawers only ever see `&mut dyn Surface`. `Scene` records what they add,
//! in submission order: index 0 is painted first (bottom-most).

use crate::model::{Circle, Polygon, Shape};
use kurbo::Rect;

/// Something shapes can be added to.
pub trait Surface {
    fn add_circle(&mut self, circle: Circle);
    fn add_polygon(&mut self, polygon: Polygon);
}

/// Ordered back-to-front list of shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Union of all shape bounds, or `None` for an empty scene.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounding_box)
            .reduce(|acc, b| acc.union(b))
    }
}

impl Surface for Scene {
    fn add_circle(&mut self, circle: Circle) {
        log::trace!(
            "circle c=({}, {}) r={} fill={}",
            circle.center.x,
            circle.center.y,
            circle.radius,
            circle.fill.to_hex()
        );
        self.shapes.push(Shape::Circle(circle));
    }

    fn add_polygon(&mut self, polygon: Polygon) {
        log::trace!(
            "polygon n={} fill={}",
            polygon.points.len(),
            polygon.fill.to_hex()
        );
        self.shapes.push(Shape::Polygon(polygon));
    }
}
