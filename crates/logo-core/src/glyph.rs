//! The "fragmented fold" bookmark glyph.
//!
//! Two separate blocks on the 100×100 grid: a body that keeps the bookmark's
//! V-notch tail but has its top-right corner cut away, and a small triangle
//! sitting parallel to that cut. The gap between them reads as the fold.

use crate::transform::CentroidScale;
use kurbo::Point;

/// Body block, counter-clockwise (y up) from the top-left corner.
pub const BODY: [Point; 6] = [
    Point::new(30.0, 85.0),
    Point::new(30.0, 20.0),
    Point::new(50.0, 40.0),
    Point::new(70.0, 20.0),
    Point::new(70.0, 55.0),
    Point::new(52.0, 85.0),
];

/// Fold triangle in the top-right corner.
pub const FOLD: [Point; 3] = [
    Point::new(58.0, 85.0),
    Point::new(75.0, 85.0),
    Point::new(75.0, 62.0),
];

/// Body vertices after `transform`.
pub fn body(transform: &CentroidScale) -> Vec<Point> {
    transform.apply_all(&BODY)
}

/// Fold vertices after `transform`.
pub fn fold(transform: &CentroidScale) -> Vec<Point> {
    transform.apply_all(&FOLD)
}
